//!
//! Ordict: ordered dictionaries addressable by key, by position, and by
//! inclusive span, with recursive helpers for nested mapping trees.
//!
//! ## Core Concepts
//!
//! * **Odict (`odict::Odict`)**: an insertion-ordered mapping with unique keys that is
//!   simultaneously a sequence: every key has exactly one integer position and the
//!   bidirectional index stays consistent across every mutation.
//! * **Addresses (`odict::Address`)**: every accessor resolves its argument to a tagged
//!   address once at the API boundary - a key, a signed position, an inclusive
//!   [`Span`](odict::Span), or a pick list - and dispatches by pattern matching.
//! * **Inclusive spans**: range addresses include both endpoints, a deliberate departure
//!   from half-open slicing, because "include the last element" is the common case.
//! * **Facilities**: bulk constructors (`make*`, over the [`KeyedSource`] capability),
//!   key/value search (`find*`, `filter*`), and elementwise operations over list-valued
//!   entries (`map`, `from_each`, `to_each`) are inherent methods on [`Odict`].
//! * **Nested helpers (`nested`)**: get/set/make/iterate over arbitrary-depth trees of
//!   key-addressable collaborators through the [`nested::KeyedTree`] capability - generic
//!   over the tree type, not tied to [`Odict`].
//!
//! Derivations (`sorted`, `reversed`, `filter`, `map`) return new instances and leave the
//! original untouched; in-place bulk mutations validate fully before the first write.

pub mod nested;
pub mod odict;

/// Re-export the core container types for easier access.
pub use odict::{
    Address, EachIndex, Entry, Key, KeyedSource, Locator, MatchMethod, Odict, OdictError,
    Selector, Span, Spread, Value,
};

/// Result type used throughout the ordict library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the ordict library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured container errors from the odict module
    #[error(transparent)]
    Odict(odict::OdictError),

    /// Structured traversal errors from the nested module
    #[error(transparent)]
    Nested(nested::NestedError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Odict(_) => "odict",
            Error::Nested(_) => "nested",
        }
    }

    /// Check if this error indicates a missing key or path level.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Odict(err) => err.is_not_found(),
            Error::Nested(err) => err.is_not_found(),
        }
    }

    /// Check if this error indicates a key collision.
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Odict(err) => err.is_duplicate(),
            _ => false,
        }
    }

    /// Check if this error indicates an out-of-range position.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::Odict(err) => err.is_out_of_range(),
            _ => false,
        }
    }

    /// Check if this error indicates mismatched lengths in a bulk operation.
    pub fn is_length_error(&self) -> bool {
        match self {
            Error::Odict(err) => err.is_length_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a value of the wrong shape.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Odict(err) => err.is_type_error(),
            Error::Nested(err) => err.is_type_error(),
        }
    }

    /// Check if this error indicates an unusable search pattern.
    pub fn is_pattern_error(&self) -> bool {
        match self {
            Error::Odict(err) => err.is_pattern_error(),
            _ => false,
        }
    }

    /// Check if this error indicates the nested depth bound was hit.
    pub fn is_recursion_limit(&self) -> bool {
        match self {
            Error::Nested(err) => err.is_recursion_limit(),
            _ => false,
        }
    }
}
