//! Property tests over dynamically generated JSON values.

use proptest::prelude::*;
use refleq_core::{Mode, ReflectionComparator};
use serde_json::Value;

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_comparison_is_reflexive(value in json_value()) {
        let clone = value.clone();
        prop_assert!(ReflectionComparator::new().is_equal(&value, &clone));
    }

    #[test]
    fn prop_strict_equality_is_symmetric(a in json_value(), b in json_value()) {
        let comparator = ReflectionComparator::new();
        prop_assert_eq!(comparator.is_equal(&a, &b), comparator.is_equal(&b, &a));
    }

    #[test]
    fn prop_lenient_accepts_permutations(items in prop::collection::vec(any::<i64>(), 0..8)) {
        let reversed: Vec<i64> = items.iter().rev().copied().collect();
        let comparator = ReflectionComparator::with_modes(&[Mode::LenientOrder]).unwrap();
        prop_assert!(comparator.is_equal(&items, &reversed));
    }

    #[test]
    fn prop_unequal_integers_always_report(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        prop_assert!(ReflectionComparator::new().compare(&a, &b).is_some());
    }
}
