//! The free functions read the system clock and evaluate in the local zone.

use std::cmp::Ordering;

use chrono::{Duration, Utc};
use date_comparison::{
    compare, compare_with_unit, is_in_future, is_in_past, is_not_in_future, is_not_in_past,
    is_not_today, is_not_today_or_in_future, is_not_today_or_in_past, is_today,
    is_today_or_in_future, is_today_or_in_past, is_valid_date_representation, ComparisonError,
    ComparisonUnit, DateFormats, DateRepresentation,
};
use serde_json::json;

fn now_string() -> DateRepresentation {
    DateRepresentation::Text(Utc::now().to_rfc3339())
}

#[test]
fn test_current_instant_is_today() {
    let now = now_string();
    assert!(!is_in_future(&now));
    assert!(is_not_in_future(&now));
    assert!(is_today_or_in_future(&now));
    assert!(!is_not_today_or_in_future(&now));
    assert!(!is_in_past(&now));
    assert!(is_not_in_past(&now));
    assert!(is_today_or_in_past(&now));
    assert!(!is_not_today_or_in_past(&now));
    assert!(is_today(&now));
    assert!(!is_not_today(&now));
}

#[test]
fn test_far_dates() {
    let past = DateRepresentation::Instant(Utc::now() - Duration::days(100));
    let future = DateRepresentation::Instant(Utc::now() + Duration::days(100));
    assert!(is_in_past(&past));
    assert!(is_not_today(&past));
    assert!(is_in_future(&future));
    assert!(is_not_today_or_in_past(&future));
}

#[test]
fn test_invalid_input() {
    let invalid = DateRepresentation::from("notadate");
    assert!(!is_valid_date_representation(&invalid));
    assert!(!is_in_future(&invalid));
    assert!(!is_not_in_future(&invalid));
    assert!(matches!(
        compare(&invalid, &"__TODAY__".into()),
        Err(ComparisonError::InvalidDate(_))
    ));
}

#[test]
fn test_compare_against_tokens() {
    let now = now_string();
    assert_eq!(compare(&now, &"__TODAY__".into()), Ok(Ordering::Equal));
    assert_eq!(compare(&now, &"__YESTERDAY__".into()), Ok(Ordering::Greater));
    assert_eq!(compare(&now, &"__TOMORROW__".into()), Ok(Ordering::Less));
    assert_eq!(
        compare_with_unit(&now, &"__TODAY__".into(), ComparisonUnit::Year),
        Ok(Ordering::Equal)
    );
}

#[test]
fn test_formats_with_system_clock() {
    let formats = DateFormats::system();
    let now = json!(Utc::now().to_rfc3339());
    assert_eq!(formats.validate_named("isToday", &now), Some(true));
    assert_eq!(formats.validate_named("isInFuture", &now), Some(false));
    assert_eq!(formats.validate_named("compareDates", &json!(true)), Some(false));
    assert_eq!(
        formats.compare(&json!("2020-06-18"), &json!("__TODAY__")),
        Some(Ordering::Less)
    );
}
