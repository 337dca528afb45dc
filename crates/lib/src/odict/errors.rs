//! Error types for ordered dictionary operations.
//!
//! This module defines structured error types for the ordered dictionary,
//! providing detailed context for addressing failures, key collisions, and
//! bulk-operation length mismatches. Every structural error names the
//! offending key or index; nothing is silently absorbed.

use thiserror::Error;

use super::Key;

/// Structured error types for ordered dictionary operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OdictError {
    /// A key lookup failed
    #[error("key not found: {key}")]
    KeyNotFound { key: Key },

    /// A key was supplied twice, or collides with an existing entry
    #[error("duplicate key: {key}")]
    DuplicateKey { key: Key },

    /// An integer position fell outside the addressable range
    #[error("position {index} out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// A bulk assignment supplied the wrong number of values
    #[error("length mismatch: {expected} addressed entries but {actual} values")]
    LengthMismatch { expected: usize, actual: usize },

    /// `make_from` was given keynames that do not pair up with the pulled keys
    #[error("keyname length mismatch: {keys} keys but {keynames} keynames")]
    KeynameLengthMismatch { keys: usize, keynames: usize },

    /// An address was neither a key, a position, a span, nor a pick list
    #[error("invalid address: {reason}")]
    InvalidAddress { reason: String },

    /// An insertion would have introduced a colliding key
    #[error("cannot insert key {key}: already present")]
    InvalidInsert { key: Key },

    /// An elementwise operation met a value of the wrong shape
    #[error("type mismatch at key {key}: expected {expected}, found {actual}")]
    TypeMismatch {
        key: Key,
        expected: &'static str,
        actual: &'static str,
    },

    /// A search pattern failed to compile as a regular expression
    #[error("invalid search pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl OdictError {
    /// Check if this error indicates a missing key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, OdictError::KeyNotFound { .. })
    }

    /// Check if this error indicates a key collision.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            OdictError::DuplicateKey { .. } | OdictError::InvalidInsert { .. }
        )
    }

    /// Check if this error indicates an out-of-range position.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, OdictError::IndexOutOfRange { .. })
    }

    /// Check if this error indicates mismatched lengths in a bulk operation.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            OdictError::LengthMismatch { .. } | OdictError::KeynameLengthMismatch { .. }
        )
    }

    /// Check if this error indicates a value of the wrong shape.
    pub fn is_type_error(&self) -> bool {
        matches!(self, OdictError::TypeMismatch { .. })
    }

    /// Check if this error indicates an unusable search pattern.
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, OdictError::InvalidPattern { .. })
    }

    /// Get the key involved, if this is a key-related error.
    pub fn key(&self) -> Option<&Key> {
        match self {
            OdictError::KeyNotFound { key }
            | OdictError::DuplicateKey { key }
            | OdictError::InvalidInsert { key }
            | OdictError::TypeMismatch { key, .. } => Some(key),
            _ => None,
        }
    }
}

// Conversion from OdictError to the main Error type
impl From<OdictError> for crate::Error {
    fn from(err: OdictError) -> Self {
        crate::Error::Odict(err)
    }
}
