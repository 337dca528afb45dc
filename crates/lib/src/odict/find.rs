//! Key and value search for ordered dictionaries.
//!
//! Keys are matched against their canonical string form (`Display`), so
//! composite tuple keys match on the combined `(a, b)` rendering. A pattern
//! beginning with the `^` anchor is always compiled as a regular
//! expression, whatever the requested method.

use regex::Regex;

use super::{Key, Odict, OdictError, Value};
use crate::Result;

/// How a search pattern is matched against a key's string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMethod {
    /// Substring containment (the default)
    #[default]
    Contains,
    /// The key starts with the pattern
    Prefix,
    /// The key ends with the pattern
    Suffix,
    /// The pattern is a regular expression
    Regex,
    /// The key equals the pattern exactly
    Exact,
}

/// What `filter`/`reject` select on: one key, a list of keys, or a search
/// pattern matched with the default method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// One exact key
    Key(Key),
    /// Several exact keys
    Keys(Vec<Key>),
    /// A pattern, matched like [`Odict::find_keys`] with the default method
    Pattern(String),
}

impl From<Key> for Selector {
    fn from(value: Key) -> Self {
        Selector::Key(value)
    }
}

impl From<Vec<Key>> for Selector {
    fn from(value: Vec<Key>) -> Self {
        Selector::Keys(value)
    }
}

impl From<&[Key]> for Selector {
    fn from(value: &[Key]) -> Self {
        Selector::Keys(value.to_vec())
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Selector::Pattern(value.to_string())
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        Selector::Pattern(value)
    }
}

enum Matcher {
    Regex(Regex),
    Contains(String),
    Prefix(String),
    Suffix(String),
    Exact(String),
}

impl Matcher {
    fn compile(pattern: &str, method: MatchMethod) -> Result<Self> {
        match method {
            MatchMethod::Regex => Self::regex(pattern),
            // An anchored pattern is a regex no matter the method
            _ if pattern.starts_with('^') => Self::regex(pattern),
            MatchMethod::Contains => Ok(Matcher::Contains(pattern.to_string())),
            MatchMethod::Prefix => Ok(Matcher::Prefix(pattern.to_string())),
            MatchMethod::Suffix => Ok(Matcher::Suffix(pattern.to_string())),
            MatchMethod::Exact => Ok(Matcher::Exact(pattern.to_string())),
        }
    }

    fn regex(pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|source| OdictError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Matcher::Regex(re))
    }

    fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Regex(re) => re.is_match(text),
            Matcher::Contains(p) => text.contains(p.as_str()),
            Matcher::Prefix(p) => text.starts_with(p.as_str()),
            Matcher::Suffix(p) => text.ends_with(p.as_str()),
            Matcher::Exact(p) => text == p,
        }
    }
}

impl Odict {
    /// Returns the keys matching a pattern, in entry order.
    ///
    /// `None` returns every key. Matching is against each key's string
    /// form; a pattern starting with `^` is treated as a regex regardless
    /// of `method`.
    ///
    /// ```
    /// # use ordict::{MatchMethod, Odict};
    /// let od = Odict::try_from_pairs([("foo", 1), ("bar", 2)])?;
    /// let hits = od.find_keys(Some("oo"), MatchMethod::default())?;
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].to_string(), "foo");
    /// # Ok::<(), ordict::Error>(())
    /// ```
    pub fn find_keys(&self, pattern: Option<&str>, method: MatchMethod) -> Result<Vec<Key>> {
        let Some(pattern) = pattern else {
            return Ok(self.keys().cloned().collect());
        };
        let matcher = Matcher::compile(pattern, method)?;
        Ok(self
            .keys()
            .filter(|key| matcher.matches(&key.to_string()))
            .cloned()
            .collect())
    }

    /// Alias of [`Odict::find_keys`] with the default method.
    pub fn find_by_key(&self, pattern: &str) -> Result<Vec<Key>> {
        self.find_keys(Some(pattern), MatchMethod::default())
    }

    /// Returns the keys whose value is structurally equal to `value`.
    pub fn find_by_value(&self, value: &Value) -> Vec<Key> {
        self.entries
            .iter()
            .filter(|e| e.value == *value)
            .map(|e| e.key.clone())
            .collect()
    }

    /// Returns a new dictionary holding the entries the selector matches.
    pub fn filter(&self, selector: impl Into<Selector>) -> Result<Odict> {
        self.filter_inner(selector.into(), false)
    }

    /// Returns a new dictionary holding the entries the selector does NOT
    /// match. For any selector, `filter` and `reject` partition the
    /// entries.
    pub fn reject(&self, selector: impl Into<Selector>) -> Result<Odict> {
        self.filter_inner(selector.into(), true)
    }

    /// Returns a new dictionary holding the entries whose value equals
    /// `value`.
    pub fn filter_values(&self, value: &Value) -> Odict {
        Odict::from_entries(
            self.entries
                .iter()
                .filter(|e| e.value == *value)
                .cloned()
                .collect(),
        )
    }

    /// Complement of [`Odict::filter_values`].
    pub fn reject_values(&self, value: &Value) -> Odict {
        Odict::from_entries(
            self.entries
                .iter()
                .filter(|e| e.value != *value)
                .cloned()
                .collect(),
        )
    }

    fn filter_inner(&self, selector: Selector, exclude: bool) -> Result<Odict> {
        let wanted: Vec<bool> = match &selector {
            Selector::Key(key) => self.entries.iter().map(|e| e.key == *key).collect(),
            Selector::Keys(keys) => self.entries.iter().map(|e| keys.contains(&e.key)).collect(),
            Selector::Pattern(pattern) => {
                let matcher = Matcher::compile(pattern, MatchMethod::default())?;
                self.entries
                    .iter()
                    .map(|e| matcher.matches(&e.key.to_string()))
                    .collect()
            }
        };
        Ok(Odict::from_entries(
            self.entries
                .iter()
                .zip(&wanted)
                .filter(|&(_, &keep)| keep != exclude)
                .map(|(e, _)| e.clone())
                .collect(),
        ))
    }
}
