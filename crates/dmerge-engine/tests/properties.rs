//! Structural properties of the merge walk, checked over generated trees.

use std::collections::BTreeSet;

use dmerge_engine::{merge, Merger};
use dmerge_resolve::{KeepFirst, KeepSecond, ResolverChain};
use indexmap::IndexMap;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z]{1,3}", arb_value(), 0..6)
        .prop_map(|m| m.into_iter().collect())
}

fn prefixed(map: &Map<String, Value>, prefix: &str) -> Map<String, Value> {
    map.iter()
        .map(|(k, v)| (format!("{prefix}{k}"), v.clone()))
        .collect()
}

fn key_set(map: &Map<String, Value>) -> BTreeSet<String> {
    map.keys().cloned().collect()
}

proptest! {
    #[test]
    fn self_merge_is_identity(a in arb_object()) {
        let merged = merge(&a, &a, &ResolverChain::new()).unwrap();
        prop_assert_eq!(merged, a);
    }

    #[test]
    fn disjoint_keys_give_ordered_union(a in arb_object(), b in arb_object()) {
        let left = prefixed(&a, "l_");
        let right = prefixed(&b, "r_");

        for chain in [ResolverChain::new(), ResolverChain::new().with(KeepSecond)] {
            let merged = merge(&left, &right, &chain).unwrap();
            let keys: Vec<&String> = merged.keys().collect();
            let expected: Vec<&String> = left.keys().chain(right.keys()).collect();
            prop_assert_eq!(keys, expected);

            for (k, v) in left.iter().chain(right.iter()) {
                prop_assert_eq!(merged.get(k), Some(v));
            }
        }
    }

    #[test]
    fn key_set_is_union_and_exclusive_values_survive(a in arb_object(), b in arb_object()) {
        let merged = merge(&a, &b, &ResolverChain::new().with(KeepFirst)).unwrap();

        let expected: BTreeSet<String> = key_set(&a).union(&key_set(&b)).cloned().collect();
        prop_assert_eq!(key_set(&merged), expected);

        for (k, v) in &a {
            if !b.contains_key(k) {
                prop_assert_eq!(merged.get(k), Some(v));
            }
        }
        for (k, v) in &b {
            if !a.contains_key(k) {
                prop_assert_eq!(merged.get(k), Some(v));
            }
        }
    }

    #[test]
    fn keep_first_merge_is_stable(a in arb_object(), b in arb_object()) {
        let merger = Merger::new(ResolverChain::new().with(KeepFirst));
        let merged = merger.merge(&a, &b).unwrap();
        let back = merger.merge(&merged, &a).unwrap();
        prop_assert_eq!(back, merged);
    }

    #[test]
    fn index_map_roots_merge_like_json_objects(a in arb_object(), b in arb_object()) {
        let chain = ResolverChain::new().with(KeepSecond);
        let ia: IndexMap<String, Value> = a.clone().into_iter().collect();
        let ib: IndexMap<String, Value> = b.clone().into_iter().collect();

        let from_index = merge(&ia, &ib, &chain).unwrap();
        let from_json = merge(&a, &b, &chain).unwrap();

        let from_index: Map<String, Value> = from_index.into_iter().collect();
        prop_assert_eq!(from_index, from_json);
    }
}
