use chrono::DateTime;
use lodge_types::{Error, Timestamp};
use proptest::prelude::*;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn now_roundtrips_through_text() {
    let ts = Timestamp::now();
    let parsed = Timestamp::parse(&ts.to_string()).unwrap();
    assert_eq!(parsed, ts);
}

#[test]
fn from_datetime_truncates_to_microseconds() {
    let dt = DateTime::from_timestamp(1_640_995_200, 123_456_789).unwrap();
    let ts = Timestamp::from(dt);
    assert_eq!(ts.to_string(), "2022-01-01T00:00:00.123456");
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parses_canonical_form() {
    let ts = Timestamp::parse("2022-01-01T00:00:00.000000").unwrap();
    assert_eq!(ts.to_string(), "2022-01-01T00:00:00.000000");
}

#[test]
fn parses_nonzero_microseconds() {
    let ts = Timestamp::parse("2024-06-15T13:45:30.123456").unwrap();
    assert_eq!(ts.to_string(), "2024-06-15T13:45:30.123456");
}

#[test]
fn parses_short_fraction() {
    // Stored files sometimes carry fewer than six fraction digits
    let ts = Timestamp::parse("2022-01-01T00:00:00.5").unwrap();
    assert_eq!(ts.to_string(), "2022-01-01T00:00:00.500000");
}

#[test]
fn rejects_month_out_of_range() {
    let err = Timestamp::parse("2022-13-01T00:00:00.000000").unwrap_err();
    assert!(matches!(err, Error::MalformedTimestamp { .. }));
}

#[test]
fn rejects_garbage() {
    assert!(Timestamp::parse("not a timestamp").is_err());
}

#[test]
fn rejects_date_only() {
    assert!(Timestamp::parse("2022-01-01").is_err());
}

#[test]
fn rejects_space_separator() {
    assert!(Timestamp::parse("2022-01-01 00:00:00.000000").is_err());
}

#[test]
fn rejects_text_without_a_fraction() {
    let err = Timestamp::parse("2022-01-01T00:00:00").unwrap_err();
    assert!(matches!(err, Error::MalformedTimestamp { .. }));
}

#[test]
fn rejects_a_bare_trailing_dot() {
    assert!(Timestamp::parse("2022-01-01T00:00:00.").is_err());
}

#[test]
fn rejects_a_fraction_beyond_microseconds() {
    // the text form never carries more than six fraction digits
    let err = Timestamp::parse("2022-01-01T00:00:00.123456789").unwrap_err();
    assert!(matches!(err, Error::MalformedTimestamp { .. }));
}

#[test]
fn parsed_values_equal_their_own_text_form() {
    let ts = Timestamp::parse("2024-06-15T13:45:30.5").unwrap();
    assert_eq!(Timestamp::parse(&ts.to_string()).unwrap(), ts);
}

#[test]
fn error_names_the_offending_text() {
    let err = Timestamp::parse("2022-13-01T00:00:00.000000").unwrap_err();
    assert!(err.to_string().contains("2022-13-01T00:00:00.000000"));
}

#[test]
fn from_str_matches_parse() {
    let a: Timestamp = "2022-01-01T00:00:00.000000".parse().unwrap();
    let b = Timestamp::parse("2022-01-01T00:00:00.000000").unwrap();
    assert_eq!(a, b);
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn ordering_follows_time() {
    let a = Timestamp::parse("2022-01-01T00:00:00.000000").unwrap();
    let b = Timestamp::parse("2022-01-01T00:00:00.000001").unwrap();
    assert!(a < b);
}

#[test]
fn equal_text_forms_are_equal() {
    let a = Timestamp::parse("2023-05-05T05:05:05.050505").unwrap();
    let b = Timestamp::parse("2023-05-05T05:05:05.050505").unwrap();
    assert_eq!(a, b);
}

// ── tick ─────────────────────────────────────────────────────────

#[test]
fn tick_is_strictly_later() {
    let ts = Timestamp::now();
    assert!(ts.tick() > ts);
}

#[test]
fn tick_advances_one_microsecond() {
    let ts = Timestamp::parse("2022-01-01T00:00:00.000000").unwrap();
    assert_eq!(ts.tick().to_string(), "2022-01-01T00:00:00.000001");
}

#[test]
fn tick_carries_into_seconds() {
    let ts = Timestamp::parse("2022-01-01T00:00:00.999999").unwrap();
    assert_eq!(ts.tick().to_string(), "2022-01-01T00:00:01.000000");
}

// ── Display ──────────────────────────────────────────────────────

#[test]
fn display_always_prints_six_fraction_digits() {
    let ts = Timestamp::parse("2022-01-01T00:00:00.000000").unwrap();
    assert!(ts.to_string().ends_with(".000000"));
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_canonical_string() {
    let ts = Timestamp::parse("2022-01-01T00:00:00.000000").unwrap();
    let json = serde_json::to_string(&ts).unwrap();
    assert_eq!(json, "\"2022-01-01T00:00:00.000000\"");
}

#[test]
fn serde_roundtrip() {
    let ts = Timestamp::now();
    let json = serde_json::to_string(&ts).unwrap();
    let parsed: Timestamp = serde_json::from_str(&json).unwrap();
    assert_eq!(ts, parsed);
}

#[test]
fn deserialize_rejects_malformed_text() {
    let result: Result<Timestamp, _> =
        serde_json::from_str("\"2022-13-01T00:00:00.000000\"");
    assert!(result.is_err());
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn text_form_roundtrips(secs in 0i64..4_102_444_800i64, micros in 0u32..1_000_000u32) {
        let dt = DateTime::from_timestamp(secs, micros * 1000).unwrap();
        let ts = Timestamp::from(dt);
        let parsed = Timestamp::parse(&ts.to_string()).unwrap();
        prop_assert_eq!(parsed, ts);
    }

    #[test]
    fn text_form_orders_like_values(
        a in 0i64..4_102_444_800i64,
        b in 0i64..4_102_444_800i64,
    ) {
        let ta = Timestamp::from(DateTime::from_timestamp(a, 0).unwrap());
        let tb = Timestamp::from(DateTime::from_timestamp(b, 0).unwrap());
        prop_assert_eq!(ta.cmp(&tb), ta.to_string().cmp(&tb.to_string()));
    }
}
