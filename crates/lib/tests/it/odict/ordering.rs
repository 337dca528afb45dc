//! Order round-trips and re-sorting derivations.

use ordict::{Odict, Span, Value};

use crate::helpers::{key_strings, menagerie};

#[test]
fn construction_preserves_source_order() {
    let od = Odict::try_from_pairs([("zebra", 1), ("apple", 2), ("mango", 3)]).unwrap();
    assert_eq!(key_strings(&od), ["zebra", "apple", "mango"]);
}

#[test]
fn duplicate_keys_fail_construction() {
    let err = Odict::try_from_pairs([("a", 1), ("b", 2), ("a", 3)]).unwrap_err();
    assert!(err.is_conflict());
}

#[test]
fn sorted_returns_a_new_instance_by_key() {
    let od = Odict::try_from_pairs([("zebra", 1), ("apple", 2), ("mango", 3)]).unwrap();
    let sorted = od.sorted();
    assert_eq!(key_strings(&sorted), ["apple", "mango", "zebra"]);
    assert_eq!(key_strings(&od), ["zebra", "apple", "mango"]);
}

#[test]
fn sorted_by_value_orders_on_contents() {
    let od = Odict::try_from_pairs([("c", 30), ("a", 10), ("b", 20)]).unwrap();
    let sorted = od.sorted_by_value();
    assert_eq!(key_strings(&sorted), ["a", "b", "c"]);
    assert_eq!(sorted.get(Span::all()).unwrap(), Value::list([10, 20, 30]));
}

#[test]
fn reversed_twice_is_identity() {
    let od = menagerie();
    assert_eq!(key_strings(&od.reversed()), ["dill", "cough", "boo", "ah"]);
    assert_eq!(od.reversed().reversed(), od);
}

#[test]
fn iteration_matches_key_and_value_order() {
    let od = menagerie();
    let pairs: Vec<(String, Value)> = od
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("ah".to_string(), Value::Int(3)),
            ("boo".to_string(), Value::Int(4)),
            ("cough".to_string(), Value::Int(6)),
            ("dill".to_string(), Value::Int(8)),
        ]
    );
    let values: Vec<Value> = od.values().cloned().collect();
    assert_eq!(values, vec![Value::Int(3), Value::Int(4), Value::Int(6), Value::Int(8)]);
}

#[test]
fn display_renders_entries_in_order() {
    let od = menagerie();
    assert_eq!(od.to_string(), "{ah: 3, boo: 4, cough: 6, dill: 8}");
}
