//! Recursive tree helpers over the KeyedTree capability.

use ordict::nested::{MAX_DEPTH, get_nested, iter_nested, make_nested, peek_nested, set_nested};
use ordict::{Key, Odict, Value};

fn path(parts: &[&str]) -> Vec<Key> {
    parts.iter().map(|p| Key::from(*p)).collect()
}

/// The reference tree: {'a': {'x', 'y', 'z'}, 'b': {'a': {'x', 'y'}}}.
fn reference_tree() -> Odict {
    let mut root = Odict::new();
    for twig in [
        &["a", "x"][..],
        &["a", "y"],
        &["a", "z"],
        &["b", "a", "x"],
        &["b", "a", "y"],
    ] {
        make_nested(&mut root, &path(twig), Value::Null).unwrap();
    }
    root
}

#[test]
fn make_nested_creates_missing_levels_then_get_reads_back() {
    let mut root = Odict::new();
    make_nested(&mut root, &path(&["b", "a", "x"]), Value::Int(5)).unwrap();
    assert_eq!(*get_nested(&root, &path(&["b", "a", "x"])).unwrap(), Value::Int(5));

    // intermediate levels materialized as branches
    assert!(get_nested(&root, &path(&["b", "a"])).unwrap().as_dict().is_some());
}

#[test]
fn set_nested_requires_existing_intermediates() {
    let mut root = Odict::new();
    let err = set_nested(&mut root, &path(&["b", "a", "x"]), Value::Int(5)).unwrap_err();
    assert!(err.is_not_found());

    make_nested(&mut root, &path(&["b", "a", "x"]), Value::Null).unwrap();
    // the final key may be fresh, the levels above it may not
    set_nested(&mut root, &path(&["b", "a", "y"]), Value::Int(7)).unwrap();
    assert_eq!(*get_nested(&root, &path(&["b", "a", "y"])).unwrap(), Value::Int(7));
}

#[test]
fn descending_through_a_leaf_is_a_type_error() {
    let mut root = Odict::new();
    make_nested(&mut root, &path(&["a", "x"]), Value::Int(1)).unwrap();
    let err = get_nested(&root, &path(&["a", "x", "deeper"])).unwrap_err();
    assert!(err.is_type_error());
    let err = make_nested(&mut root, &path(&["a", "x", "deeper"]), Value::Null).unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn peek_nested_turns_failures_into_none() {
    let root = reference_tree();
    assert!(peek_nested(&root, &path(&["a", "y"])).is_some());
    assert!(peek_nested(&root, &path(&["a", "w"])).is_none());
    assert!(peek_nested(&root, &path(&["a", "y", "deeper"])).is_none());
}

#[test]
fn iter_nested_yields_twig_paths_in_level_order() {
    let root = reference_tree();
    let twigs: Vec<Vec<Key>> = iter_nested(&root).map(|p| p.unwrap()).collect();
    let expected: Vec<Vec<Key>> = [
        &["a", "x"][..],
        &["a", "y"],
        &["a", "z"],
        &["b", "a", "x"],
        &["b", "a", "y"],
    ]
    .iter()
    .map(|twig| path(twig))
    .collect();
    assert_eq!(twigs, expected);
}

#[test]
fn iter_nested_restarts_from_scratch() {
    let root = reference_tree();
    let first: Vec<_> = iter_nested(&root).map(|p| p.unwrap()).collect();
    let second: Vec<_> = iter_nested(&root).map(|p| p.unwrap()).collect();
    assert_eq!(first, second);
}

#[test]
fn numbering_twigs_via_set_nested() {
    let mut root = reference_tree();
    let twigs: Vec<Vec<Key>> = iter_nested(&root).map(|p| p.unwrap()).collect();
    for (count, twig) in twigs.iter().enumerate() {
        set_nested(&mut root, twig, Value::Int(count as i64 + 1)).unwrap();
    }
    assert_eq!(*get_nested(&root, &path(&["b", "a", "y"])).unwrap(), Value::Int(5));
}

#[test]
fn empty_branches_yield_no_twigs() {
    let mut root = Odict::new();
    make_nested(&mut root, &path(&["a"]), Value::Dict(Odict::new())).unwrap();
    assert_eq!(iter_nested(&root).count(), 0);
}

#[test]
fn over_deep_paths_hit_the_recursion_limit() {
    let mut root = Odict::new();
    let long: Vec<Key> = (0..=MAX_DEPTH as i64).map(Key::Int).collect();
    let err = make_nested(&mut root, &long, Value::Null).unwrap_err();
    assert!(err.is_recursion_limit());
    let err = get_nested(&root, &long).unwrap_err();
    assert!(err.is_recursion_limit());
}

#[test]
fn json_object_trees_traverse_the_same_way() {
    let mut map = serde_json::Map::new();
    let user_path = ["user".to_string(), "profile".to_string(), "name".to_string()];
    make_nested(&mut map, &user_path, serde_json::json!("Alice")).unwrap();
    make_nested(
        &mut map,
        &["user".to_string(), "active".to_string()],
        serde_json::json!(true),
    )
    .unwrap();

    assert_eq!(
        *get_nested(&map, &user_path).unwrap(),
        serde_json::json!("Alice")
    );

    let twigs: Vec<Vec<String>> = iter_nested(&map).map(|p| p.unwrap()).collect();
    assert_eq!(
        twigs,
        vec![
            vec!["user".to_string(), "active".to_string()],
            vec!["user".to_string(), "profile".to_string(), "name".to_string()],
        ]
    );
}
