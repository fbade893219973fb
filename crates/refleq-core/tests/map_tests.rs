//! Map comparison: key-by-key matching, missing and extra entries.

use std::collections::{BTreeMap, HashMap};

use refleq_core::{DifferenceKind, ReflectionComparator};

fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_equal_maps() {
    let comparator = ReflectionComparator::new();
    let left = env(&[("HOME", "/root"), ("SHELL", "/bin/sh")]);
    let right = env(&[("SHELL", "/bin/sh"), ("HOME", "/root")]);
    assert!(comparator.is_equal(&left, &right));
}

#[test]
fn test_changed_value_is_scoped_to_its_key() {
    let comparator = ReflectionComparator::new();
    let diff = comparator
        .compare(
            &env(&[("HOME", "/root"), ("SHELL", "/bin/sh")]),
            &env(&[("HOME", "/home/ada"), ("SHELL", "/bin/sh")]),
        )
        .unwrap();
    let leaves = diff.leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].kind(), DifferenceKind::ValueMismatch);
    assert_eq!(leaves[0].path_string(), "[\"HOME\"]");
}

#[test]
fn test_missing_and_extra_entries() {
    let comparator = ReflectionComparator::new();
    let diff = comparator
        .compare(&env(&[("A", "1"), ("B", "2")]), &env(&[("B", "2"), ("C", "3")]))
        .unwrap();
    assert_eq!(diff.kind(), DifferenceKind::Nested);
    let leaves = diff.leaves();
    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves[0].kind(), DifferenceKind::MissingEntry);
    assert_eq!(leaves[0].path_string(), "[\"A\"]");
    assert_eq!(leaves[1].kind(), DifferenceKind::ExtraEntry);
    assert_eq!(leaves[1].path_string(), "[\"C\"]");
}

#[test]
fn test_hash_and_btree_maps_interchange() {
    let comparator = ReflectionComparator::new();
    let hashed: HashMap<String, i32> = [("x".to_string(), 1), ("y".to_string(), 2)]
        .into_iter()
        .collect();
    let ordered: BTreeMap<String, i32> = [("y".to_string(), 2), ("x".to_string(), 1)]
        .into_iter()
        .collect();
    assert!(comparator.is_equal(&hashed, &ordered));
}

#[test]
fn test_nested_map_values() {
    let comparator = ReflectionComparator::new();
    let mut left = BTreeMap::new();
    left.insert("rows".to_string(), vec![1, 2, 3]);
    let mut right = BTreeMap::new();
    right.insert("rows".to_string(), vec![1, 9, 3]);
    let diff = comparator.compare(&left, &right).unwrap();
    let leaves = diff.leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].path_string(), "[\"rows\"][1]");
}

#[test]
fn test_map_vs_sequence_is_type_mismatch() {
    let comparator = ReflectionComparator::new();
    let map = env(&[("A", "1")]);
    let seq = vec!["1".to_string()];
    let diff = comparator.compare(&map, &seq).unwrap();
    assert_eq!(diff.kind(), DifferenceKind::TypeMismatch);
}
