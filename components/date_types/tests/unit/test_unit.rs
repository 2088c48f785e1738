//! Unit tests for the TimeUnit validation gate

use date_types::{ErrorKind, TimeUnit};
use serde_json::json;

#[test]
fn test_every_member_is_valid() {
    for name in [
        "milliseconds",
        "seconds",
        "minutes",
        "hours",
        "days",
        "weeks",
        "months",
        "years",
    ] {
        assert!(TimeUnit::is_valid_time_unit(name), "{} should be valid", name);
    }
}

#[test]
fn test_unknown_string_is_rejected() {
    let error = "unsupported".parse::<TimeUnit>().unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnsupportedUnit);
    assert_eq!(error.message, "Unsupported time unit: unsupported");
}

#[test]
fn test_json_null_is_rejected() {
    let error = TimeUnit::try_from(&serde_json::Value::Null).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnsupportedUnit);
    assert_eq!(error.message, "Unsupported time unit: null");
}

#[test]
fn test_json_number_is_rejected() {
    let error = TimeUnit::try_from(&json!(7)).unwrap_err();
    assert_eq!(error.message, "Unsupported time unit: 7");
}

#[test]
fn test_json_string_is_accepted() {
    assert_eq!(TimeUnit::try_from(&json!("hours")), Ok(TimeUnit::Hours));
}

#[test]
fn test_deserialize_uses_gate() {
    let unit: TimeUnit = serde_json::from_str("\"months\"").unwrap();
    assert_eq!(unit, TimeUnit::Months);

    let error = serde_json::from_str::<TimeUnit>("\"INVALID_UNIT\"").unwrap_err();
    assert!(error.to_string().contains("Unsupported time unit: INVALID_UNIT"));
}

#[test]
fn test_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&TimeUnit::Weeks).unwrap(), "\"weeks\"");
}

#[test]
fn test_display_matches_name() {
    assert_eq!(TimeUnit::Milliseconds.to_string(), "milliseconds");
}
