//! Dual addressing: keys, signed positions, inclusive spans, pick lists.

use ordict::{Locator, Odict, Span, Value};

use crate::helpers::menagerie;

#[test]
fn key_and_position_address_the_same_entry() {
    let od = menagerie();
    let n = od.len() as i64;
    let keys: Vec<_> = od.keys().cloned().collect();
    for (i, key) in keys.into_iter().enumerate() {
        let by_key = od.get(key).expect("key present");
        assert_eq!(by_key, od.get(i as i64).expect("position in range"));
        assert_eq!(by_key, od.get(i as i64 - n).expect("negative position in range"));
    }
}

#[test]
fn spans_include_both_endpoints() {
    let od = menagerie();
    let n = od.len() as i64;
    for i in 0..n {
        for j in i..n {
            let Value::List(values) = od.get(Span::new(i, j)).expect("span in range") else {
                panic!("span must yield a list");
            };
            assert_eq!(values.len() as i64, j - i + 1, "span {i}..={j}");
        }
    }
}

#[test]
fn sorted_dictionary_answers_every_address_form() {
    let bar = menagerie().sorted();
    assert_eq!(bar.get("boo").unwrap(), 4);
    assert_eq!(bar.get(1).unwrap(), 4);
    assert_eq!(bar.get(Span::new(0, 1)).unwrap(), Value::list([3, 4]));
    assert_eq!(bar.get(Span::new("cough", "dill")).unwrap(), Value::list([6, 8]));
    assert_eq!(bar.get(Span::all()).unwrap(), Value::list([3, 4, 6, 8]));
    assert_eq!(bar.get(Span::starting_at(2)).unwrap(), Value::list([6, 8]));
    assert_eq!(bar.get(Span::ending_at(1)).unwrap(), Value::list([3, 4]));
    let picks = bar
        .get(vec![Locator::from(2), Locator::from(1)])
        .unwrap();
    assert_eq!(picks, Value::list([6, 4]));
}

#[test]
fn mixed_key_and_position_span_bounds() {
    let od = menagerie();
    assert_eq!(od.get(Span::new("boo", 3)).unwrap(), Value::list([4, 6, 8]));
    assert_eq!(od.get(Span::new(-3, "cough")).unwrap(), Value::list([4, 6]));
}

#[test]
fn get_many_addresses_entries_individually() {
    let od = menagerie();
    let values = od
        .get_many(vec![Locator::from("dill"), Locator::from(0)])
        .unwrap();
    assert_eq!(values, vec![Value::Int(8), Value::Int(3)]);
}

#[test]
fn missing_key_is_reported_by_name() {
    let od = menagerie();
    let err = od.get("nope").unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("nope"));
}

#[test]
fn out_of_range_positions_are_reported() {
    let od = menagerie();
    assert!(od.get(9).unwrap_err().is_out_of_range());
    assert!(od.get(-9).unwrap_err().is_out_of_range());
}

#[test]
fn span_with_start_past_stop_is_empty() {
    let od = menagerie();
    assert_eq!(od.get(Span::new(2, 0)).unwrap(), Value::List(vec![]));
}

#[test]
fn unbounded_span_on_empty_dictionary_is_empty() {
    let od = Odict::new();
    assert_eq!(od.get(Span::all()).unwrap(), Value::List(vec![]));
}

#[test]
fn missing_span_bound_key_is_reported() {
    let od = menagerie();
    let err = od.get(Span::new("boo", "zebra")).unwrap_err();
    assert!(err.is_not_found());
}
