//! Address types for dual key/position access.
//!
//! Every public accessor on the ordered dictionary resolves its argument to
//! a tagged [`Address`] once at the API boundary and dispatches by pattern
//! matching. A [`Locator`] names a single entry by key or signed position;
//! a [`Span`] names a contiguous run of entries, inclusive of both bounds.

use super::Key;

/// A single-entry address: an exact key, or a signed position.
///
/// Negative positions count from the end, so `-1` is the last entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Address by exact key
    Key(Key),
    /// Address by position, negative counting from the end
    Index(i64),
}

impl From<Key> for Locator {
    fn from(value: Key) -> Self {
        Locator::Key(value)
    }
}

impl From<&Key> for Locator {
    fn from(value: &Key) -> Self {
        Locator::Key(value.clone())
    }
}

impl From<&str> for Locator {
    fn from(value: &str) -> Self {
        Locator::Key(Key::from(value))
    }
}

impl From<String> for Locator {
    fn from(value: String) -> Self {
        Locator::Key(Key::from(value))
    }
}

// Integers address positions, not integer keys. Use
// `Locator::Key(Key::Int(n))` to address an integer key.
impl From<i64> for Locator {
    fn from(value: i64) -> Self {
        Locator::Index(value)
    }
}

impl From<i32> for Locator {
    fn from(value: i32) -> Self {
        Locator::Index(value as i64)
    }
}

/// A contiguous run of entries, inclusive of both bounds.
///
/// Bounds may be keys or positions, and either may be omitted: a missing
/// start means the first entry, a missing stop means the last. This is a
/// deliberate departure from half-open ranges, because "include the last
/// element" is the common case when slicing by key.
///
/// ```
/// # use ordict::{Odict, Span, Value};
/// let od = Odict::try_from_pairs([("a", 1), ("b", 2), ("c", 3)])?;
/// assert_eq!(od.get(Span::new(0, 1))?, Value::list([1, 2]));
/// assert_eq!(od.get(Span::new("b", "c"))?, Value::list([2, 3]));
/// assert_eq!(od.get(Span::all())?, Value::list([1, 2, 3]));
/// # Ok::<(), ordict::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    /// First entry of the run; `None` means the start of the dictionary.
    pub start: Option<Locator>,
    /// Last entry of the run, included; `None` means the end.
    pub stop: Option<Locator>,
}

impl Span {
    /// Span between two bounds, both included.
    pub fn new(start: impl Into<Locator>, stop: impl Into<Locator>) -> Self {
        Span {
            start: Some(start.into()),
            stop: Some(stop.into()),
        }
    }

    /// Span covering every entry.
    pub fn all() -> Self {
        Span::default()
    }

    /// Span from `start` (included) through the last entry.
    pub fn starting_at(start: impl Into<Locator>) -> Self {
        Span {
            start: Some(start.into()),
            stop: None,
        }
    }

    /// Span from the first entry through `stop` (included).
    pub fn ending_at(stop: impl Into<Locator>) -> Self {
        Span {
            start: None,
            stop: Some(stop.into()),
        }
    }
}

/// A fully resolved address: one entry, an inclusive span, or an explicit
/// list of individually addressed entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    /// A single entry
    One(Locator),
    /// A contiguous inclusive run
    Span(Span),
    /// Individually addressed entries, in the order given
    Picks(Vec<Locator>),
}

impl From<Locator> for Address {
    fn from(value: Locator) -> Self {
        Address::One(value)
    }
}

impl From<Span> for Address {
    fn from(value: Span) -> Self {
        Address::Span(value)
    }
}

impl From<Vec<Locator>> for Address {
    fn from(value: Vec<Locator>) -> Self {
        Address::Picks(value)
    }
}

impl From<Key> for Address {
    fn from(value: Key) -> Self {
        Address::One(Locator::Key(value))
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Address::One(Locator::from(value))
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        Address::One(Locator::from(value))
    }
}

impl From<i64> for Address {
    fn from(value: i64) -> Self {
        Address::One(Locator::Index(value))
    }
}

impl From<i32> for Address {
    fn from(value: i32) -> Self {
        Address::One(Locator::Index(value as i64))
    }
}

/// Resolves a signed position against a length, returning `None` when it
/// falls outside `0..len` after negative wrap-around.
pub(crate) fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        index + len as i64
    } else {
        index
    };
    if resolved < 0 || resolved >= len as i64 {
        return None;
    }
    Some(resolved as usize)
}
