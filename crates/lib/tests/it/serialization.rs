//! Serde round-trips: an Odict is an ordered sequence of (key, value) pairs.

use ordict::{Key, Odict, Value};

use crate::helpers::{key_strings, menagerie};

#[test]
fn round_trip_preserves_order_and_content() {
    let od = menagerie();
    let json = serde_json::to_string(&od).unwrap();
    let back: Odict = serde_json::from_str(&json).unwrap();
    assert_eq!(back, od);
    assert_eq!(key_strings(&back), ["ah", "boo", "cough", "dill"]);
}

#[test]
fn round_trip_covers_every_key_and_value_shape() {
    let mut inner = Odict::new();
    inner.set("deep", Value::Bool(true)).unwrap();

    let od = Odict::try_from_pairs([
        (Key::from("text"), Value::from("hello")),
        (Key::Int(7), Value::list([1, 2])),
        (Key::tuple(["cat", "dog"]), Value::Dict(inner)),
        (Key::from("none"), Value::Null),
    ])
    .unwrap();

    let json = serde_json::to_string(&od).unwrap();
    let back: Odict = serde_json::from_str(&json).unwrap();
    assert_eq!(back, od);
}

#[test]
fn deserialization_rejects_duplicate_keys() {
    let json = r#"[[{"Text":"a"},{"Int":1}],[{"Text":"a"},{"Int":2}]]"#;
    let err = serde_json::from_str::<Odict>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate key"));
}

#[test]
fn serialized_form_is_a_sequence_of_pairs() {
    let od = Odict::try_from_pairs([("a", 1), ("b", 2)]).unwrap();
    let json: serde_json::Value = serde_json::to_value(&od).unwrap();
    assert_eq!(
        json,
        serde_json::json!([[{"Text": "a"}, {"Int": 1}], [{"Text": "b"}, {"Int": 2}]])
    );
}
