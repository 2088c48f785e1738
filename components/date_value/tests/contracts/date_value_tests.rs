//! Contract tests for DateValue

use chrono::{TimeZone, Utc};
use date_types::{DateComponents, DateFormat, ErrorKind, TimeUnit};
use date_value::{DateInput, DateOptions, DateValue, FixedClock, Zone};

fn utc_options() -> DateOptions {
    DateOptions::new().with_zone(Zone::utc())
}

#[test]
fn test_constructor_parses_wall_time_components() {
    let date = utc_options().parse("2024-01-15T12:30:45.123").unwrap();
    assert_eq!(
        date.get_components(),
        DateComponents {
            year: 2024,
            month: 1,
            day: 15,
            hours: 12,
            minutes: 30,
            seconds: 45,
            milliseconds: 123,
        }
    );
}

#[test]
fn test_constructor_rejects_unparseable_input() {
    let error = DateValue::new("not a date").unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidDate);
    assert!(error.message.starts_with("Failed to parse date:"));
}

#[test]
fn test_constructor_rejects_nan() {
    let error = DateValue::new(f64::NAN).unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidDate);
}

#[test]
fn test_constructor_without_input_uses_clock() {
    let instant = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    let date = utc_options().with_clock(FixedClock(instant)).build(None).unwrap();
    assert_eq!(date.to_date(), instant);
    assert_eq!(date.format(), &DateFormat::Iso);
}

#[test]
fn test_constructor_accepts_every_input_kind() {
    let expected = 1_704_067_200_000; // 2024-01-01T00:00:00Z
    let options = utc_options();
    assert_eq!(options.parse("2024-01-01").unwrap().timestamp_millis(), expected);
    assert_eq!(options.parse(expected).unwrap().timestamp_millis(), expected);
    assert_eq!(options.parse(expected as f64).unwrap().timestamp_millis(), expected);
    assert_eq!(
        options
            .parse(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .unwrap()
            .timestamp_millis(),
        expected
    );
    let system_time = std::time::UNIX_EPOCH + std::time::Duration::from_millis(expected as u64);
    assert_eq!(options.parse(system_time).unwrap().timestamp_millis(), expected);
    assert_eq!(
        options.build(Some(DateInput::Millis(0.0))).unwrap().timestamp_millis(),
        0
    );
}

#[test]
fn test_format_presets() {
    let cases = [
        (DateFormat::Iso, "2024-01-01"),
        (DateFormat::Us, "01/01/2024"),
        (DateFormat::Eu, "01.01.2024"),
        (DateFormat::Verbose, "January 01, 2024"),
        (DateFormat::custom("DD-MM-YYYY"), "01-01-2024"),
    ];
    for (format, expected) in cases {
        let date = utc_options().with_format(format).parse("2024-01-01").unwrap();
        assert_eq!(date.format_date(), expected);
    }
}

#[test]
fn test_with_format_leaves_original_untouched() {
    let date = utc_options().parse("2024-01-15").unwrap();
    let us = date.with_format(DateFormat::Us);

    assert_eq!(us.format_date(), "01/15/2024");
    assert_eq!(date.with_format(DateFormat::Eu).format_date(), "15.01.2024");
    assert_eq!(date.with_format("DD-MM-YYYY").format_date(), "15-01-2024");
    assert_eq!(date.format_date(), "2024-01-15");
    assert_eq!(us.to_date(), date.to_date());
}

#[test]
fn test_format_depends_only_on_new_format() {
    let iso = utc_options().parse("2024-09-03").unwrap();
    let verbose = iso.with_format(DateFormat::Verbose);
    assert_eq!(
        iso.with_format("YYYY.MM").format_date(),
        verbose.with_format("YYYY.MM").format_date()
    );
}

#[test]
fn test_to_date_is_a_copy() {
    let date = utc_options().parse("2024-01-15").unwrap();
    let mut copy = date.to_date();
    copy += chrono::TimeDelta::days(3);
    assert_eq!(date.format_date(), "2024-01-15");
    assert_ne!(copy, date.to_date());
}

#[test]
fn test_is_valid_after_construction() {
    assert!(utc_options().parse("2024-01-15").unwrap().is_valid());
    assert!(DateValue::now().unwrap().is_valid());
}

#[test]
fn test_truncate_keeps_format() {
    let date = utc_options()
        .with_format(DateFormat::Verbose)
        .parse("2024-08-17T10:00:00")
        .unwrap();
    let month_start = date.truncate(TimeUnit::Months).unwrap();
    assert_eq!(month_start.format_date(), "August 01, 2024");
    assert_eq!(month_start.get_components().hours, 0);
}

#[test]
fn test_zone_is_carried_through_operations() {
    let zone = Zone::fixed(9 * 3600).unwrap();
    let date = DateOptions::new()
        .with_zone(zone)
        .parse("2024-01-31T23:30:00Z")
        .unwrap();

    // 23:30Z is 08:30 on Feb 1 at UTC+9
    assert_eq!(date.format_date(), "2024-02-01");
    let next = date.add(1, TimeUnit::Months).unwrap();
    assert_eq!(next.zone(), zone);
    assert_eq!(next.format_date(), "2024-03-01");
}
