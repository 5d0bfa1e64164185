//! Property-based tests: operations never panic on arbitrary input, and
//! the null-implies-default guarantee holds across every path.

use nullity::prelude::*;
use proptest::prelude::*;

// -----------------------------------------------------------------------
// Helpers: arbitrary driver values
// -----------------------------------------------------------------------

fn arb_sql_value() -> impl Strategy<Value = SqlValue> {
    prop_oneof![
        Just(SqlValue::Null),
        any::<bool>().prop_map(SqlValue::Bool),
        any::<i64>().prop_map(SqlValue::Int),
        any::<f64>().prop_map(SqlValue::Float),
        ".*".prop_map(SqlValue::Text),
        proptest::collection::vec(any::<u8>(), 0..64).prop_map(SqlValue::Bytes),
    ]
}

fn null_holds_default<V: Default + Clone + PartialEq>(n: &Nullable<V>) -> bool {
    !n.is_null() || n.value_or_zero() == V::default()
}

// -----------------------------------------------------------------------
// Scan: never panics, failure always resets
// -----------------------------------------------------------------------

proptest! {
    #[test]
    fn scan_i64_never_panics(src in arb_sql_value()) {
        let mut n = Nullable::<i64>::null();
        let result = n.scan(src);
        prop_assert!(null_holds_default(&n));
        if result.is_err() {
            prop_assert!(n.is_null());
        }
    }

    #[test]
    fn scan_f64_never_panics(src in arb_sql_value()) {
        let mut n = Nullable::<f64>::null();
        let _ = n.scan(src);
        prop_assert!(null_holds_default(&n));
    }

    #[test]
    fn scan_string_never_panics(src in arb_sql_value()) {
        let mut n = Nullable::<String>::null();
        let _ = n.scan(src);
        prop_assert!(null_holds_default(&n));
    }

    #[test]
    fn scan_bool_never_panics(src in arb_sql_value()) {
        let mut n = Nullable::<bool>::null();
        let _ = n.scan(src);
        prop_assert!(null_holds_default(&n));
    }

    #[test]
    fn failed_scan_resets_previous_value(prev in any::<i64>(), src in arb_sql_value()) {
        let mut n = Nullable::from(prev);
        match n.scan(src.clone()) {
            Ok(()) => prop_assert_eq!(n.is_null(), src.is_null()),
            Err(_) => {
                prop_assert!(n.is_null());
                prop_assert_eq!(n.value_or_zero(), 0);
            }
        }
    }
}

// -----------------------------------------------------------------------
// JSON: never panics, failure always resets, round trips hold
// -----------------------------------------------------------------------

proptest! {
    #[test]
    fn from_json_never_panics(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut n = Nullable::<i64>::null();
        let _ = n.from_json(&data);
        prop_assert!(null_holds_default(&n));

        let mut s = Nullable::<String>::null();
        let _ = s.from_json(&data);
        prop_assert!(null_holds_default(&s));
    }

    #[test]
    fn json_round_trip_i64(v in any::<i64>()) {
        let original = Nullable::from(v);
        let bytes = original.to_json().unwrap();
        let mut decoded = Nullable::<i64>::null();
        decoded.from_json(&bytes).unwrap();
        prop_assert!(decoded.equal(&original));
        prop_assert_eq!(decoded, original);
    }

    #[test]
    fn json_round_trip_string(v in ".*") {
        let original = Nullable::from(v);
        let bytes = original.to_json().unwrap();
        let mut decoded = Nullable::<String>::null();
        decoded.from_json(&bytes).unwrap();
        prop_assert!(decoded.equal(&original));
    }

    #[test]
    fn serde_round_trip_matches_option(opt in proptest::option::of(any::<i64>())) {
        let n = Nullable::from_option(opt);
        let json = serde_json::to_string(&n).unwrap();
        let expected = serde_json::to_string(&opt).unwrap();
        prop_assert_eq!(&json, &expected);

        let back: Nullable<i64> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, n);
    }
}

// -----------------------------------------------------------------------
// Value semantics
// -----------------------------------------------------------------------

proptest! {
    #[test]
    fn copies_are_independent(a in any::<i64>(), b in any::<i64>()) {
        let original = Nullable::from(a);
        let mut copy = original;
        copy.scan(SqlValue::Int(b)).unwrap();
        prop_assert_eq!(original.value_or_zero(), a);
        prop_assert_eq!(copy.value_or_zero(), b);
    }

    #[test]
    fn structural_eq_matches_option_view(
        a in proptest::option::of(any::<i64>()),
        b in proptest::option::of(any::<i64>()),
    ) {
        let na = Nullable::from_option(a);
        let nb = Nullable::from_option(b);
        prop_assert_eq!(na == nb, a == b);
        prop_assert_eq!(na.equal(&nb), a == b);
    }

    #[test]
    fn to_option_copies_are_independent(v in ".*") {
        let n = Nullable::from(v.clone());
        let mut first = n.to_option().unwrap();
        first.push('x');
        prop_assert_eq!(n.to_option().unwrap(), v);
    }

    #[test]
    fn bind_round_trip_i64(opt in proptest::option::of(any::<i64>())) {
        let n = Nullable::from_option(opt);
        let driver = n.value().unwrap();
        let mut back = Nullable::<i64>::null();
        back.scan(driver).unwrap();
        prop_assert_eq!(back, n);
    }
}
