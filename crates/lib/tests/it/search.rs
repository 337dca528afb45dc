//! Key and value search: match methods, anchors, filtering.

use ordict::{Key, MatchMethod, Odict, Selector, Value};

use crate::helpers::key_strings;

/// Mirrors the search examples: two text keys plus a composite key.
fn sample() -> Odict {
    Odict::try_from_pairs([
        (Key::from("foo"), Value::list([1, 2, 3, 4])),
        (Key::from("bar"), Value::list([5, 6, 7, 8])),
        (Key::tuple(["cat", "dog"]), Value::list([5, 6, 7, 8])),
    ])
    .unwrap()
}

fn strings(keys: &[Key]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[test]
fn no_pattern_returns_every_key_in_order() {
    let od = sample();
    let keys = od.find_keys(None, MatchMethod::default()).unwrap();
    assert_eq!(strings(&keys), ["foo", "bar", "(cat, dog)"]);
}

#[test]
fn default_method_matches_substrings() {
    let od = sample();
    let keys = od.find_keys(Some("oo"), MatchMethod::default()).unwrap();
    assert_eq!(strings(&keys), ["foo"]);
}

#[test]
fn anchored_patterns_are_regexes_regardless_of_method() {
    let od = sample();
    // "oo" is a substring of foo, but "^oo" anchors and matches nothing
    let keys = od.find_keys(Some("^oo"), MatchMethod::default()).unwrap();
    assert!(keys.is_empty());
    // the anchor wins even when a plain method is requested
    let keys = od.find_keys(Some("^f"), MatchMethod::Suffix).unwrap();
    assert_eq!(strings(&keys), ["foo"]);
}

#[test]
fn prefix_suffix_and_exact_methods() {
    let od = sample();
    let keys = od.find_keys(Some("oo"), MatchMethod::Suffix).unwrap();
    assert_eq!(strings(&keys), ["foo"]);
    let keys = od.find_keys(Some("ba"), MatchMethod::Prefix).unwrap();
    assert_eq!(strings(&keys), ["bar"]);
    let keys = od.find_keys(Some("bar"), MatchMethod::Exact).unwrap();
    assert_eq!(strings(&keys), ["bar"]);
    let keys = od.find_keys(Some("ba"), MatchMethod::Exact).unwrap();
    assert!(keys.is_empty());
}

#[test]
fn composite_keys_match_on_their_combined_form() {
    let od = sample();
    let keys = od.find_keys(Some("cat"), MatchMethod::default()).unwrap();
    assert_eq!(strings(&keys), ["(cat, dog)"]);
}

#[test]
fn invalid_regex_is_reported() {
    let od = sample();
    let err = od.find_keys(Some("^("), MatchMethod::default()).unwrap_err();
    assert!(err.is_pattern_error());
}

#[test]
fn find_by_key_uses_the_default_method() {
    let od = sample();
    let keys = od.find_by_key("ar").unwrap();
    assert_eq!(strings(&keys), ["bar"]);
}

#[test]
fn find_by_value_matches_structurally() {
    let od = sample();
    let keys = od.find_by_value(&Value::list([5, 6, 7, 8]));
    assert_eq!(strings(&keys), ["bar", "(cat, dog)"]);
    assert!(od.find_by_value(&Value::Int(99)).is_empty());
}

#[test]
fn filter_and_reject_partition_the_entries() {
    let od = sample();
    let hits = od.filter("a").unwrap();
    let misses = od.reject("a").unwrap();
    assert_eq!(key_strings(&hits), ["bar", "(cat, dog)"]);
    assert_eq!(key_strings(&misses), ["foo"]);
    assert_eq!(hits.len() + misses.len(), od.len());
}

#[test]
fn filter_by_key_list() {
    let od = sample();
    let picked = od
        .filter(vec![Key::from("foo"), Key::from("bar")])
        .unwrap();
    assert_eq!(key_strings(&picked), ["foo", "bar"]);
}

#[test]
fn filter_by_single_key() {
    let od = sample();
    let picked = od.filter(Selector::Key(Key::tuple(["cat", "dog"]))).unwrap();
    assert_eq!(key_strings(&picked), ["(cat, dog)"]);
}

#[test]
fn filter_values_selects_by_equality() {
    let od = sample();
    let picked = od.filter_values(&Value::list([1, 2, 3, 4]));
    assert_eq!(key_strings(&picked), ["foo"]);
    let rest = od.reject_values(&Value::list([1, 2, 3, 4]));
    assert_eq!(key_strings(&rest), ["bar", "(cat, dog)"]);
}
