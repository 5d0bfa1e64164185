#![cfg(feature = "chrono")]

use chrono::{DateTime, TimeZone, Utc};
use nullity::prelude::*;

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn scan_timestamp_into_datetime() {
    let when = ts(2012, 12, 21, 21, 21, 21);
    let mut t = Nullable::<DateTime<Utc>>::null();
    t.scan(SqlValue::Timestamp(when)).unwrap();
    assert!(!t.is_null());
    assert_eq!(t.value_or_zero(), when);
}

#[test]
fn scan_integer_into_datetime_fails_and_resets() {
    let mut t = Nullable::<DateTime<Utc>>::from(ts(2012, 12, 21, 0, 0, 0));
    let err = t.scan(SqlValue::Int(42)).unwrap_err();
    assert_eq!(err.key(), "unsupported_coercion");
    assert_eq!(err.src_type(), "int64");
    assert!(t.is_null());
    assert_eq!(t.value_or_zero(), DateTime::<Utc>::default());
}

#[test]
fn timestamp_binds_as_itself() {
    let when = ts(2020, 1, 2, 3, 4, 5);
    assert_eq!(
        Nullable::from(when).value().unwrap(),
        SqlValue::Timestamp(when)
    );
}

#[test]
fn scan_timestamp_into_string_formats_rfc3339() {
    let when = ts(2012, 12, 21, 21, 21, 21);
    let mut s = Nullable::<String>::null();
    s.scan(SqlValue::Timestamp(when)).unwrap();
    assert_eq!(s.value_or_zero(), "2012-12-21T21:21:21+00:00");
}

// ---------------------------------------------------------------------------
// Equality across representations of the same instant
// ---------------------------------------------------------------------------

#[test]
fn same_instant_in_different_offsets_is_equal() {
    use chrono::FixedOffset;

    // 2012-12-21T04:00:00Z and 2012-12-21T06:00:00+02:00
    let utc = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2012, 12, 21, 4, 0, 0)
        .unwrap();
    let plus2 = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2012, 12, 21, 6, 0, 0)
        .unwrap();

    let a = Nullable::from(utc);
    let b = Nullable::from(plus2);
    assert!(a.equal(&b));
    assert!(b.equal(&a));
}

#[test]
fn distinct_instants_are_not_equal() {
    let a = Nullable::from(ts(2012, 12, 21, 4, 0, 0));
    let b = Nullable::from(ts(2012, 12, 21, 21, 21, 21));
    assert!(!a.equal(&b));
}

// ---------------------------------------------------------------------------
// JSON round trips for timestamps
// ---------------------------------------------------------------------------

#[test]
fn datetime_json_round_trip() {
    let original = Nullable::from(ts(2012, 12, 21, 21, 21, 21));
    let bytes = original.to_json().unwrap();
    let mut decoded = Nullable::<DateTime<Utc>>::null();
    decoded.from_json(&bytes).unwrap();
    assert!(decoded.equal(&original));
}

#[test]
fn datetime_null_round_trip() {
    let null = Nullable::<DateTime<Utc>>::null();
    assert_eq!(null.to_json().unwrap(), b"null".to_vec());

    let mut decoded = Nullable::from(ts(2020, 1, 1, 0, 0, 0));
    decoded.from_json(b"null").unwrap();
    assert!(decoded.equal(&null));
}
