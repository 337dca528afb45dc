//! Bulk constructors for ordered dictionaries.
//!
//! The `make*` family extends a dictionary with many entries at once:
//! auto-keyed placeholders, shared defaults, zipped key/value runs, and
//! arbitrarily deep nested grids. `make_from` pulls entries out of any
//! collaborator implementing the [`KeyedSource`] capability. Every bulk
//! constructor validates its whole batch before the first write, so a
//! failure never leaves the target partially extended.

use std::collections::{BTreeMap, HashSet};

use super::{Key, Odict, OdictError, Spread, Value};
use crate::Result;

/// A collaborator that can enumerate its own keys in order and fetch a
/// value by key. [`Odict::make_from`] accepts any implementor: mappings,
/// positional sequences, or domain objects exposing named fields.
pub trait KeyedSource {
    /// Keys this source exposes, in its own order.
    fn source_keys(&self) -> Vec<Key>;

    /// Fetch a value by key.
    fn fetch(&self, key: &Key) -> Option<Value>;
}

impl KeyedSource for Odict {
    fn source_keys(&self) -> Vec<Key> {
        self.keys().cloned().collect()
    }

    fn fetch(&self, key: &Key) -> Option<Value> {
        self.lookup(key).cloned()
    }
}

impl KeyedSource for BTreeMap<String, Value> {
    fn source_keys(&self) -> Vec<Key> {
        self.keys().map(Key::from).collect()
    }

    fn fetch(&self, key: &Key) -> Option<Value> {
        self.get(key.as_text()?).cloned()
    }
}

// Positional sequences expose integer keys 0..len.
impl KeyedSource for Vec<Value> {
    fn source_keys(&self) -> Vec<Key> {
        (0..self.len() as i64).map(Key::Int).collect()
    }

    fn fetch(&self, key: &Key) -> Option<Value> {
        let pos = usize::try_from(key.as_int()?).ok()?;
        self.get(pos).cloned()
    }
}

impl KeyedSource for [(Key, Value)] {
    fn source_keys(&self) -> Vec<Key> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn fetch(&self, key: &Key) -> Option<Value> {
        self.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }
}

impl Odict {
    /// Appends `n` entries under auto-generated keys (`key<i>`, numbered
    /// from the current length), all valued [`Value::Null`].
    ///
    /// ```
    /// # use ordict::Odict;
    /// let mut od = Odict::new();
    /// od.make(3)?;
    /// let keys: Vec<String> = od.keys().map(|k| k.to_string()).collect();
    /// assert_eq!(keys, ["key0", "key1", "key2"]);
    /// # Ok::<(), ordict::Error>(())
    /// ```
    pub fn make(&mut self, n: usize) -> Result<()> {
        let start = self.len();
        let batch: Vec<(Key, Value)> = (start..start + n)
            .map(|i| (Key::Text(format!("key{i}")), Value::Null))
            .collect();
        self.extend_checked(batch)
    }

    /// Appends one entry per key, each valued with its own clone of
    /// `default`, so later mutation of one entry never leaks into another.
    pub fn make_with<I>(&mut self, keys: I, default: Value) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let batch: Vec<(Key, Value)> = keys
            .into_iter()
            .map(|k| (k.into(), default.clone()))
            .collect();
        self.extend_checked(batch)
    }

    /// Zips keys with values. [`Spread::Each`] pairs one value per key and
    /// fails with [`OdictError::LengthMismatch`] when the counts differ;
    /// [`Spread::All`] broadcasts a single value to every key.
    ///
    /// ```
    /// # use ordict::{Odict, Spread};
    /// let mut od = Odict::new();
    /// od.make_zip(["a", "b"], Spread::each([1, 2]))?;
    /// assert_eq!(od.get("b")?, 2);
    /// # Ok::<(), ordict::Error>(())
    /// ```
    pub fn make_zip<I>(&mut self, keys: I, vals: Spread) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let keys: Vec<Key> = keys.into_iter().map(Into::into).collect();
        let vals = match vals {
            Spread::All(value) => vec![value; keys.len()],
            Spread::Each(values) => {
                if values.len() != keys.len() {
                    return Err(OdictError::LengthMismatch {
                        expected: keys.len(),
                        actual: values.len(),
                    }
                    .into());
                }
                values
            }
        };
        self.extend_checked(keys.into_iter().zip(vals))
    }

    /// Builds a nested grid of dictionaries: one level per key list in
    /// `levels`, every leaf a clone of `leaf`.
    ///
    /// ```
    /// # use ordict::{Key, Odict, Value};
    /// let mut od = Odict::new();
    /// let rows: Vec<Key> = ["a", "b"].map(Key::from).to_vec();
    /// let cols: Vec<Key> = ["x", "y"].map(Key::from).to_vec();
    /// od.make_grid(&[rows, cols], Value::Int(0))?;
    /// let inner = od.get("b")?;
    /// assert_eq!(inner.as_dict().unwrap().get("y")?, 0);
    /// # Ok::<(), ordict::Error>(())
    /// ```
    pub fn make_grid(&mut self, levels: &[Vec<Key>], leaf: Value) -> Result<()> {
        let Some((first, rest)) = levels.split_first() else {
            return Ok(());
        };
        if rest.is_empty() {
            return self.make_with(first.iter().cloned(), leaf);
        }
        let mut sub = Odict::new();
        sub.make_grid(rest, leaf)?;
        self.make_with(first.iter().cloned(), Value::Dict(sub))
    }

    /// Pulls entries out of a [`KeyedSource`].
    ///
    /// Omitting `keys` pulls every key the source exposes, under its
    /// existing name and in the source's own order. Supplying `keynames`
    /// renames the pulled keys positionally; mismatched lengths fail with
    /// [`OdictError::KeynameLengthMismatch`] before anything is pulled.
    /// A requested key the source cannot fetch fails with
    /// [`OdictError::KeyNotFound`].
    pub fn make_from<S>(
        &mut self,
        source: &S,
        keys: Option<&[Key]>,
        keynames: Option<&[Key]>,
    ) -> Result<()>
    where
        S: KeyedSource + ?Sized,
    {
        let pulled: Vec<Key> = match keys {
            Some(keys) => keys.to_vec(),
            None => source.source_keys(),
        };
        if let Some(names) = keynames {
            if names.len() != pulled.len() {
                return Err(OdictError::KeynameLengthMismatch {
                    keys: pulled.len(),
                    keynames: names.len(),
                }
                .into());
            }
        }
        tracing::debug!(count = pulled.len(), "pulling entries from keyed source");
        let mut batch = Vec::with_capacity(pulled.len());
        for (i, key) in pulled.iter().enumerate() {
            let value = source
                .fetch(key)
                .ok_or_else(|| OdictError::KeyNotFound { key: key.clone() })?;
            let name = match keynames {
                Some(names) => names[i].clone(),
                None => key.clone(),
            };
            batch.push((name, value));
        }
        self.extend_checked(batch)
    }

    /// Appends a batch of pairs after checking every key against the
    /// existing entries and the rest of the batch. On any collision the
    /// target is left untouched.
    fn extend_checked<I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        let batch: Vec<(Key, Value)> = pairs.into_iter().collect();
        let mut seen = HashSet::new();
        for (key, _) in &batch {
            if self.index.contains_key(key) || !seen.insert(key) {
                return Err(OdictError::DuplicateKey { key: key.clone() }.into());
            }
        }
        tracing::trace!(count = batch.len(), "extending ordered dictionary");
        for (key, value) in batch {
            self.append_unchecked(key, value);
        }
        Ok(())
    }
}
