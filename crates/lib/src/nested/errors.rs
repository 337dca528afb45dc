//! Error types for nested tree traversal.

use thiserror::Error;

/// Structured error types for nested tree operations.
///
/// Keys are reported in their string form so the errors stay independent
/// of the concrete tree's key type.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum NestedError {
    /// A path was empty where at least one key is required
    #[error("empty path: at least one key is required")]
    EmptyPath,

    /// A key along the path was missing
    #[error("path not found: no key '{key}' at depth {depth}")]
    PathNotFound { key: String, depth: usize },

    /// A path tried to descend through a leaf value
    #[error("not a branch: '{key}' at depth {depth} holds a leaf value")]
    NotABranch { key: String, depth: usize },

    /// A traversal or path exceeded the depth bound that guards against
    /// cyclic structures
    #[error("recursion limit of {limit} levels exceeded")]
    RecursionLimitExceeded { limit: usize },
}

impl NestedError {
    /// Check if this error indicates a missing level.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NestedError::PathNotFound { .. })
    }

    /// Check if this error indicates a leaf where a branch was required.
    pub fn is_type_error(&self) -> bool {
        matches!(self, NestedError::NotABranch { .. })
    }

    /// Check if this error indicates the depth bound was hit.
    pub fn is_recursion_limit(&self) -> bool {
        matches!(self, NestedError::RecursionLimitExceeded { .. })
    }
}

// Conversion from NestedError to the main Error type
impl From<NestedError> for crate::Error {
    fn from(err: NestedError) -> Self {
        crate::Error::Nested(err)
    }
}
