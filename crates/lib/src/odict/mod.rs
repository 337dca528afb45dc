//! Ordered dictionaries addressable by key and by position.
//!
//! An [`Odict`] is an insertion-ordered mapping with unique keys that also
//! behaves as a sequence: every key maps to exactly one integer position
//! (0..n-1) and vice versa, and the bidirectional index stays consistent
//! across every mutation. Entries can be addressed by exact key, by signed
//! position, by an inclusive [`Span`] of either, or by an explicit list of
//! individual addresses.
//!
//! # Core Types
//!
//! - [`Odict`] - The ordered, dual-addressed container
//! - [`Key`] - Text, integer, or composite keys
//! - [`Value`] - Null/bool/int/text/list/dict payloads
//! - [`Address`] / [`Locator`] / [`Span`] - The tagged address forms
//!
//! # Facilities
//!
//! Bulk constructors (`make*`), key/value search (`find*`, `filter*`), and
//! elementwise operations over list-valued entries (`map`, `from_each`,
//! `to_each`) live in sibling files and are all inherent methods on
//! [`Odict`].

// First declare the key and value modules to break circular dependencies
pub mod key;
pub mod value;

// Then other modules that depend on them
pub mod address;
pub mod each;
pub mod errors;
pub mod find;
pub mod make;


pub use address::{Address, Locator, Span};
pub use each::{EachIndex, Spread};
pub use errors::OdictError;
pub use find::{MatchMethod, Selector};
pub use key::Key;
pub use make::KeyedSource;
pub use value::Value;

use std::collections::HashMap;
use std::fmt;

use crate::Result;
use address::normalize_index;

/// A single (key, value) pair of an ordered dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: Key,
    value: Value,
}

impl Entry {
    /// The entry's key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The entry's value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the entry, returning its (key, value) pair.
    pub fn into_pair(self) -> (Key, Value) {
        (self.key, self.value)
    }
}

/// An insertion-ordered dictionary addressable by key and by position.
///
/// # Examples
///
/// ```
/// # use ordict::{Odict, Span, Value};
/// let od = Odict::try_from_pairs([("ah", 3), ("boo", 4), ("cough", 6), ("dill", 8)])?;
///
/// // One container, three addressing styles
/// assert_eq!(od.get("boo")?, 4);
/// assert_eq!(od.get(1)?, 4);
/// assert_eq!(od.get(Span::new("cough", "dill"))?, Value::list([6, 8]));
/// # Ok::<(), ordict::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Odict {
    entries: Vec<Entry>,
    index: HashMap<Key, usize>,
}

impl Odict {
    /// Creates an empty ordered dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from an ordered source of (key, value) pairs.
    ///
    /// Source order is preserved. A repeated key fails with
    /// [`OdictError::DuplicateKey`] and nothing is built.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let mut od = Odict::new();
        for (key, value) in pairs {
            let key = key.into();
            if od.index.contains_key(&key) {
                return Err(OdictError::DuplicateKey { key }.into());
            }
            od.append_unchecked(key, value.into());
        }
        Ok(od)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.index.contains_key(&key.into())
    }

    /// The position of a key, if present.
    pub fn position(&self, key: &Key) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// The key at a position, if in range.
    pub fn key_at(&self, pos: usize) -> Option<&Key> {
        self.entries.get(pos).map(|e| &e.key)
    }

    /// Direct value lookup by key, without address resolution.
    pub fn lookup(&self, key: &Key) -> Option<&Value> {
        self.index.get(key).map(|&pos| &self.entries[pos].value)
    }

    /// Mutable value lookup by key.
    pub fn lookup_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match self.index.get(key) {
            Some(&pos) => Some(&mut self.entries[pos].value),
            None => None,
        }
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|e| &e.key)
    }

    /// Values in order.
    ///
    /// This is the plain ordered-value extraction used by presentation
    /// collaborators; `get(Span::all())` returns the same values as clones.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|e| &e.value)
    }

    /// (key, value) pairs in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Fetches a clone of the addressed value(s).
    ///
    /// A single locator yields the value itself; a [`Span`] or a pick list
    /// yields a [`Value::List`] in address order. Spans are inclusive of
    /// both bounds.
    ///
    /// ```
    /// # use ordict::{Locator, Odict, Span, Value};
    /// let od = Odict::try_from_pairs([("a", 1), ("b", 2), ("c", 3)])?;
    /// assert_eq!(od.get("b")?, 2);
    /// assert_eq!(od.get(-1)?, 3);
    /// assert_eq!(od.get(Span::new("a", "b"))?, Value::list([1, 2]));
    /// assert_eq!(od.get(vec![Locator::from(2), Locator::from("a")])?, Value::list([3, 1]));
    /// # Ok::<(), ordict::Error>(())
    /// ```
    pub fn get(&self, addr: impl Into<Address>) -> Result<Value> {
        match addr.into() {
            Address::One(loc) => Ok(self.entries[self.locate(&loc)?].value.clone()),
            Address::Span(span) => {
                let values = self
                    .span_positions(&span)?
                    .into_iter()
                    .map(|pos| self.entries[pos].value.clone())
                    .collect();
                Ok(Value::List(values))
            }
            Address::Picks(locators) => self.get_many(locators).map(Value::List),
        }
    }

    /// Borrows the value addressed by a single locator.
    pub fn get_ref(&self, loc: impl Into<Locator>) -> Result<&Value> {
        let pos = self.locate(&loc.into())?;
        Ok(&self.entries[pos].value)
    }

    /// Mutably borrows the value addressed by a single locator.
    pub fn get_mut(&mut self, loc: impl Into<Locator>) -> Result<&mut Value> {
        let pos = self.locate(&loc.into())?;
        Ok(&mut self.entries[pos].value)
    }

    /// Fetches clones of individually addressed values, in address order.
    ///
    /// Unlike a [`Span`], the addressed entries need not be contiguous.
    pub fn get_many<I>(&self, locators: I) -> Result<Vec<Value>>
    where
        I: IntoIterator,
        I::Item: Into<Locator>,
    {
        locators
            .into_iter()
            .map(|loc| {
                let pos = self.locate(&loc.into())?;
                Ok(self.entries[pos].value.clone())
            })
            .collect()
    }

    /// Assigns to the addressed entry or entries.
    ///
    /// A key locator upserts: an unknown key appends a new entry, preserving
    /// order. A position must resolve. Assigning to a span or pick list
    /// requires a [`Value::List`] of matching length, applied element-wise
    /// in address order; the whole assignment is validated before the first
    /// write, so a failure never leaves the dictionary partially mutated.
    pub fn set(&mut self, addr: impl Into<Address>, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match addr.into() {
            Address::One(Locator::Key(key)) => {
                self.put(key, value);
                Ok(())
            }
            Address::One(Locator::Index(index)) => {
                let pos = self.locate(&Locator::Index(index))?;
                self.entries[pos].value = value;
                Ok(())
            }
            Address::Span(span) => {
                let positions = self.span_positions(&span)?;
                self.write_positions(&positions, value)
            }
            Address::Picks(locators) => {
                let positions = locators
                    .iter()
                    .map(|loc| self.locate(loc))
                    .collect::<Result<Vec<_>>>()?;
                self.write_positions(&positions, value)
            }
        }
    }

    /// Inserts or replaces a single keyed entry, returning the displaced
    /// value if the key was already present. New keys append at the end.
    pub fn put(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].value, value)),
            None => {
                self.append_unchecked(key, value);
                None
            }
        }
    }

    /// Appends a bare value under an auto-generated key (`key<n>`, where n
    /// is the current length), returning the generated key.
    ///
    /// Fails with [`OdictError::InvalidInsert`] if the generated key is
    /// already taken.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<Key> {
        let key = Key::Text(format!("key{}", self.entries.len()));
        if self.index.contains_key(&key) {
            return Err(OdictError::InvalidInsert { key }.into());
        }
        self.append_unchecked(key.clone(), value.into());
        Ok(key)
    }

    /// Inserts an entry at an explicit position with an explicit key,
    /// shifting later entries.
    ///
    /// `pos` may equal the current length (append). Fails with
    /// [`OdictError::InvalidInsert`] if the key already exists.
    pub fn insert(&mut self, pos: usize, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        if pos > self.entries.len() {
            return Err(OdictError::IndexOutOfRange {
                index: pos as i64,
                len: self.entries.len(),
            }
            .into());
        }
        if self.index.contains_key(&key) {
            return Err(OdictError::InvalidInsert { key }.into());
        }
        self.entries.insert(
            pos,
            Entry {
                key,
                value: value.into(),
            },
        );
        self.reindex_from(pos);
        Ok(())
    }

    /// Renames an entry in place, preserving its position and value.
    pub fn rename(&mut self, old: impl Into<Key>, new: impl Into<Key>) -> Result<()> {
        let old = old.into();
        let new = new.into();
        let Some(&pos) = self.index.get(&old) else {
            return Err(OdictError::KeyNotFound { key: old }.into());
        };
        if new != old {
            if self.index.contains_key(&new) {
                return Err(OdictError::DuplicateKey { key: new }.into());
            }
            self.index.remove(&old);
            self.index.insert(new.clone(), pos);
            self.entries[pos].key = new;
        }
        Ok(())
    }

    /// Removes an entry by key, returning its value. The order of the
    /// surviving entries is preserved.
    pub fn remove(&mut self, key: impl Into<Key>) -> Result<Value> {
        let key = key.into();
        let Some(pos) = self.index.remove(&key) else {
            return Err(OdictError::KeyNotFound { key }.into());
        };
        let entry = self.entries.remove(pos);
        self.reindex_from(pos);
        Ok(entry.value)
    }

    /// Returns a new dictionary reordered by key; the original is untouched.
    pub fn sorted(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Self::from_entries(entries)
    }

    /// Returns a new dictionary reordered by value; the original is
    /// untouched. Values order by variant rank, then contents.
    pub fn sorted_by_value(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.value.cmp(&b.value));
        Self::from_entries(entries)
    }

    /// Returns a new dictionary with the entry order reversed.
    pub fn reversed(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.reverse();
        Self::from_entries(entries)
    }

    /// Resolves a locator to a position.
    fn locate(&self, loc: &Locator) -> Result<usize> {
        match loc {
            Locator::Key(key) => self
                .index
                .get(key)
                .copied()
                .ok_or_else(|| OdictError::KeyNotFound { key: key.clone() }.into()),
            Locator::Index(index) => normalize_index(*index, self.entries.len()).ok_or_else(|| {
                OdictError::IndexOutOfRange {
                    index: *index,
                    len: self.entries.len(),
                }
                .into()
            }),
        }
    }

    /// Resolves an inclusive span to the positions it covers, in order.
    /// A span whose resolved start lies past its stop is empty.
    fn span_positions(&self, span: &Span) -> Result<Vec<usize>> {
        let start = match &span.start {
            Some(loc) => self.locate(loc)?,
            None => 0,
        };
        let stop = match &span.stop {
            Some(loc) => self.locate(loc)?,
            None => {
                if self.entries.is_empty() {
                    return Ok(Vec::new());
                }
                self.entries.len() - 1
            }
        };
        if start > stop {
            return Ok(Vec::new());
        }
        Ok((start..=stop).collect())
    }

    /// Element-wise bulk write, fully validated before the first mutation.
    fn write_positions(&mut self, positions: &[usize], value: Value) -> Result<()> {
        let Value::List(values) = value else {
            return Err(OdictError::InvalidAddress {
                reason: "assigning to a span or pick list requires a list of values".to_string(),
            }
            .into());
        };
        if values.len() != positions.len() {
            return Err(OdictError::LengthMismatch {
                expected: positions.len(),
                actual: values.len(),
            }
            .into());
        }
        for (&pos, value) in positions.iter().zip(values) {
            self.entries[pos].value = value;
        }
        Ok(())
    }

    fn append_unchecked(&mut self, key: Key, value: Value) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Entry { key, value });
    }

    /// Rebuilds index slots for entries at and after `pos`.
    fn reindex_from(&mut self, pos: usize) {
        for i in pos..self.entries.len() {
            self.index.insert(self.entries[i].key.clone(), i);
        }
    }

    /// Builds a dictionary from entries already known to have unique keys.
    fn from_entries(entries: Vec<Entry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key.clone(), i))
            .collect();
        Self { entries, index }
    }
}

impl PartialEq for Odict {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Odict {}

impl fmt::Display for Odict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// Borrowing iterator over (key, value) pairs in order.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Odict {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over (key, value) pairs in order.
pub struct IntoIter {
    inner: std::vec::IntoIter<Entry>,
}

impl Iterator for IntoIter {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl IntoIterator for Odict {
    type Item = (Key, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

// Custom serde implementation: an Odict round-trips as an ordered sequence
// of (key, value) pairs, and deserialization rejects duplicate keys.
impl serde::Serialize for Odict {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(&(&entry.key, &entry.value))?;
        }
        seq.end()
    }
}

impl<'de> serde::Deserialize<'de> for Odict {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error as DeError, SeqAccess, Visitor};

        struct OdictVisitor;

        impl<'de> Visitor<'de> for OdictVisitor {
            type Value = Odict;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of (key, value) pairs with unique keys")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut od = Odict::new();
                while let Some((key, value)) = seq.next_element::<(Key, Value)>()? {
                    if od.index.contains_key(&key) {
                        return Err(A::Error::custom(format!("duplicate key: {key}")));
                    }
                    od.append_unchecked(key, value);
                }
                Ok(od)
            }
        }

        deserializer.deserialize_seq(OdictVisitor)
    }
}
