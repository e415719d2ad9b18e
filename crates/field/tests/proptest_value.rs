//! Property-based tests for the value order, equality and hashing

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use nebula_field::{Blob, GeoPoint, Object, Timestamp, Value};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn any_double() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>(),
        any::<i64>().prop_map(|i| i as f64),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(-0.0),
        Just(9_223_372_036_854_775_808.0),
        Just(-9_223_372_036_854_775_808.0),
    ]
}

fn any_integer() -> impl Strategy<Value = i64> {
    prop_oneof![
        any::<i64>(),
        Just(i64::MAX),
        Just(i64::MIN),
        (-1_000_i64..1_000).prop_map(|d| (1_i64 << 53) + d),
    ]
}

fn any_timestamp() -> impl Strategy<Value = Timestamp> {
    (-62_135_596_800_i64..=253_402_300_799, 0_i32..=999_999_999)
        .prop_map(|(s, n)| Timestamp::new(s, n).unwrap())
}

fn any_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::null()),
        any::<bool>().prop_map(Value::boolean),
        any_integer().prop_map(Value::integer),
        any_double().prop_map(Value::double),
        any_timestamp().prop_map(Value::timestamp),
        (any_timestamp(), any_timestamp()).prop_map(|(l, p)| Value::server_timestamp(l, p)),
        "[a-c]{0,3}".prop_map(Value::string),
        prop::collection::vec(any::<u8>(), 0..4).prop_map(|b| Value::blob(Blob::new(b))),
        (-90.0..=90.0_f64, -180.0..=180.0_f64)
            .prop_map(|(lat, lng)| Value::geo_point(GeoPoint::new(lat, lng).unwrap())),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    any_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::array),
            prop::collection::vec(("[a-c]{1,2}", inner), 0..4)
                .prop_map(|pairs| Value::object(pairs.into_iter().collect::<Object>())),
        ]
    })
}

fn hash_of(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Reference comparison in `i128`, independent of the library routine.
fn oracle_integer_double(i: i64, d: f64) -> Ordering {
    if d.is_nan() {
        return Ordering::Greater;
    }
    if d.is_infinite() {
        return if d > 0.0 { Ordering::Less } else { Ordering::Greater };
    }
    // |d| < 2^127 for every finite f64 in play after the range check below.
    if d.abs() >= 1.0e38 {
        return if d > 0.0 { Ordering::Less } else { Ordering::Greater };
    }
    let whole = d.trunc() as i128;
    match i128::from(i).cmp(&whole) {
        Ordering::Equal => 0.0_f64.partial_cmp(&d.fract()).unwrap_or(Ordering::Equal),
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn trichotomy(a in any_value(), b in any_value()) {
        let outcomes = [a < b, a == b, b < a];
        prop_assert_eq!(outcomes.iter().filter(|x| **x).count(), 1);
    }

    #[test]
    fn antisymmetry(a in any_value(), b in any_value()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn transitivity(a in any_value(), b in any_value(), c in any_value()) {
        let mut sorted = [a, b, c];
        sorted.sort();
        prop_assert!(sorted[0] <= sorted[1]);
        prop_assert!(sorted[1] <= sorted[2]);
        prop_assert!(sorted[0] <= sorted[2]);
    }

    #[test]
    fn repeated_comparison_is_stable(a in any_value(), b in any_value()) {
        let first = a.cmp(&b);
        for _ in 0..3 {
            prop_assert_eq!(a.cmp(&b), first);
        }
    }

    #[test]
    fn equal_values_hash_alike(a in any_value(), b in any_value()) {
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
        prop_assert_eq!(hash_of(&a), hash_of(&a.clone()));
    }

    #[test]
    fn clone_is_equal(a in any_value()) {
        prop_assert_eq!(a.clone(), a);
    }

    #[test]
    fn integer_double_matches_exact_math(i in any_integer(), d in any_double()) {
        let expected = oracle_integer_double(i, d);
        prop_assert_eq!(Value::integer(i).cmp(&Value::double(d)), expected);
        prop_assert_eq!(Value::double(d).cmp(&Value::integer(i)), expected.reverse());
    }

    #[test]
    fn integral_doubles_equal_their_integer(i in -(1_i64 << 53)..(1_i64 << 53)) {
        let as_double = Value::double(i as f64);
        prop_assert_eq!(Value::integer(i), as_double.clone());
        prop_assert_eq!(hash_of(&Value::integer(i)), hash_of(&as_double));
    }

    #[test]
    fn object_insertion_order_irrelevant(
        pairs in prop::collection::btree_map("[a-e]{1,2}", any_scalar(), 0..6)
    ) {
        let forward: Object = pairs.clone().into_iter().collect();
        let backward: Object = pairs.into_iter().rev().collect();
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(hash_of(&Value::object(forward)), hash_of(&Value::object(backward)));
    }

    #[test]
    fn mutating_a_copy_leaves_original(items in prop::collection::vec(any_scalar(), 1..5)) {
        let original = Value::array(items);
        let snapshot = original.as_array().unwrap().to_vec();
        let mut copy = original.clone();
        copy.as_array_mut().unwrap().push(Value::string("extra"));
        *copy.as_array_mut().unwrap().get_mut(0).unwrap() = Value::object(Object::new());

        prop_assert_eq!(original.as_array().unwrap().to_vec(), snapshot);
        prop_assert!(original < copy);
    }
}
