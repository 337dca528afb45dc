//! Elementwise operations over list-valued entries.
//!
//! These operations assume every value in the dictionary is itself
//! positionally addressable (a [`Value::List`]); the first entry of the
//! wrong shape fails with [`OdictError::TypeMismatch`] naming its key.

use super::address::normalize_index;
use super::{Entry, Key, Odict, OdictError, Value};
use crate::Result;

/// One or several positions to extract from every entry's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EachIndex {
    /// A single position, negative counting from the end of each list
    One(i64),
    /// Several positions; the extracted elements are gathered per entry
    Many(Vec<i64>),
}

impl From<i64> for EachIndex {
    fn from(value: i64) -> Self {
        EachIndex::One(value)
    }
}

impl From<i32> for EachIndex {
    fn from(value: i32) -> Self {
        EachIndex::One(value as i64)
    }
}

impl From<Vec<i64>> for EachIndex {
    fn from(value: Vec<i64>) -> Self {
        EachIndex::Many(value)
    }
}

impl From<&[i64]> for EachIndex {
    fn from(value: &[i64]) -> Self {
        EachIndex::Many(value.to_vec())
    }
}

/// A right-hand side for elementwise writes: one value broadcast to every
/// entry, or one value per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spread {
    /// Broadcast a single value to all addressed entries
    All(Value),
    /// One value per entry, in key order
    Each(Vec<Value>),
}

impl Spread {
    /// Broadcast a single value to every entry.
    pub fn all(value: impl Into<Value>) -> Self {
        Spread::All(value.into())
    }

    /// One value per entry, in key order.
    pub fn each(values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Spread::Each(values.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for Spread {
    fn from(value: Value) -> Self {
        Spread::All(value)
    }
}

impl From<i64> for Spread {
    fn from(value: i64) -> Self {
        Spread::All(Value::Int(value))
    }
}

impl From<i32> for Spread {
    fn from(value: i32) -> Self {
        Spread::All(Value::Int(value as i64))
    }
}

impl From<bool> for Spread {
    fn from(value: bool) -> Self {
        Spread::All(Value::Bool(value))
    }
}

impl From<&str> for Spread {
    fn from(value: &str) -> Self {
        Spread::All(Value::from(value))
    }
}

/// Extracts the element at `ind` from a list-valued entry.
fn pluck(key: &Key, value: &Value, ind: i64) -> Result<Value> {
    let Value::List(items) = value else {
        return Err(OdictError::TypeMismatch {
            key: key.clone(),
            expected: "list",
            actual: value.type_name(),
        }
        .into());
    };
    let pos = normalize_index(ind, items.len()).ok_or(OdictError::IndexOutOfRange {
        index: ind,
        len: items.len(),
    })?;
    Ok(items[pos].clone())
}

fn extract(key: &Key, value: &Value, ind: &EachIndex) -> Result<Value> {
    match ind {
        EachIndex::One(i) => pluck(key, value, *i),
        EachIndex::Many(inds) => Ok(Value::List(
            inds.iter()
                .map(|i| pluck(key, value, *i))
                .collect::<Result<Vec<_>>>()?,
        )),
    }
}

impl Odict {
    /// Returns a new dictionary with the same keys, each value replaced by
    /// `f(value)`. The source is untouched.
    ///
    /// ```
    /// # use ordict::{Odict, Value};
    /// let od = Odict::try_from_pairs([("a", Value::list([1, 2])), ("b", Value::list([3, 4]))])?;
    /// let doubled = od.map(|v| match v {
    ///     Value::List(items) => Value::list(items.iter().filter_map(Value::as_int).map(|n| n * 2)),
    ///     other => other.clone(),
    /// });
    /// assert_eq!(doubled.get("b")?, Value::list([6, 8]));
    /// assert_eq!(od.get("b")?, Value::list([3, 4]));
    /// # Ok::<(), ordict::Error>(())
    /// ```
    pub fn map<F>(&self, f: F) -> Odict
    where
        F: Fn(&Value) -> Value,
    {
        Odict::from_entries(
            self.entries
                .iter()
                .map(|e| Entry {
                    key: e.key.clone(),
                    value: f(&e.value),
                })
                .collect(),
        )
    }

    /// Extracts the element(s) at `ind` from every entry's list, as a flat
    /// sequence in key order. With [`EachIndex::Many`], each entry yields a
    /// [`Value::List`] of its extracted elements, in the order given.
    pub fn from_each(&self, ind: impl Into<EachIndex>) -> Result<Vec<Value>> {
        let ind = ind.into();
        self.entries
            .iter()
            .map(|e| extract(&e.key, &e.value, &ind))
            .collect()
    }

    /// Like [`Odict::from_each`], but keyed like the original dictionary.
    pub fn from_each_dict(&self, ind: impl Into<EachIndex>) -> Result<Odict> {
        let ind = ind.into();
        let entries = self
            .entries
            .iter()
            .map(|e| {
                Ok(Entry {
                    key: e.key.clone(),
                    value: extract(&e.key, &e.value, &ind)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Odict::from_entries(entries))
    }

    /// Writes into position `ind` of every entry's list, in key order,
    /// mutating in place. [`Spread::All`] broadcasts one value to every
    /// entry; [`Spread::Each`] supplies one value per entry and fails with
    /// [`OdictError::LengthMismatch`] when the counts differ. Every slot is
    /// validated before the first write.
    ///
    /// ```
    /// # use ordict::{Odict, Spread, Value};
    /// let mut od = Odict::try_from_pairs([
    ///     ("a", Value::list([1, 2, 3, 4])),
    ///     ("b", Value::list([5, 6, 7, 8])),
    /// ])?;
    /// od.to_each(2, Spread::each([10, 20]))?;
    /// od.to_each(3, 666)?;
    /// assert_eq!(od.get("a")?, Value::list([1, 2, 10, 666]));
    /// assert_eq!(od.get("b")?, Value::list([5, 6, 20, 666]));
    /// # Ok::<(), ordict::Error>(())
    /// ```
    pub fn to_each(&mut self, ind: i64, val: impl Into<Spread>) -> Result<()> {
        let values: Vec<Value> = match val.into() {
            Spread::All(value) => vec![value; self.entries.len()],
            Spread::Each(values) => {
                if values.len() != self.entries.len() {
                    return Err(OdictError::LengthMismatch {
                        expected: self.entries.len(),
                        actual: values.len(),
                    }
                    .into());
                }
                values
            }
        };
        let mut slots = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let Value::List(items) = &entry.value else {
                return Err(OdictError::TypeMismatch {
                    key: entry.key.clone(),
                    expected: "list",
                    actual: entry.value.type_name(),
                }
                .into());
            };
            let pos = normalize_index(ind, items.len()).ok_or(OdictError::IndexOutOfRange {
                index: ind,
                len: items.len(),
            })?;
            slots.push(pos);
        }
        for ((entry, pos), value) in self.entries.iter_mut().zip(slots).zip(values) {
            if let Value::List(items) = &mut entry.value {
                items[pos] = value;
            }
        }
        Ok(())
    }
}
