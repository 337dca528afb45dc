//! Shared helpers for the integration tests.

use ordict::{Odict, Value};

/// The four-entry dictionary used throughout the addressing tests.
pub fn menagerie() -> Odict {
    Odict::try_from_pairs([("ah", 3), ("boo", 4), ("cough", 6), ("dill", 8)])
        .expect("keys are unique")
}

/// Two entries with four-element list values, for elementwise tests.
pub fn list_pair() -> Odict {
    Odict::try_from_pairs([
        ("a", Value::list([1, 2, 3, 4])),
        ("b", Value::list([5, 6, 7, 8])),
    ])
    .expect("keys are unique")
}

/// Keys rendered to their canonical string form, in order.
pub fn key_strings(od: &Odict) -> Vec<String> {
    od.keys().map(|k| k.to_string()).collect()
}
