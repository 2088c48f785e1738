//! Unit tests for DateFormat

use date_types::{DateComponents, DateFormat, MONTH_NAMES};

fn parts(year: i32, month: u32, day: u32) -> DateComponents {
    DateComponents {
        year,
        month,
        day,
        hours: 0,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
    }
}

#[test]
fn test_verbose_uses_month_table() {
    for (index, name) in MONTH_NAMES.iter().enumerate() {
        let rendered = DateFormat::Verbose.render(&parts(2024, index as u32 + 1, 15));
        assert_eq!(rendered, format!("{} 15, 2024", name));
    }
}

#[test]
fn test_custom_template() {
    assert_eq!(
        DateFormat::custom("DD-MM-YYYY").render(&parts(2024, 1, 15)),
        "15-01-2024"
    );
}

#[test]
fn test_unmatched_tokens_left_verbatim() {
    assert_eq!(
        DateFormat::custom("YYYY-MM-DD hh:mm").render(&parts(2024, 12, 5)),
        "2024-12-05 hh:mm"
    );
}

#[test]
fn test_default_is_iso() {
    assert_eq!(DateFormat::default(), DateFormat::Iso);
    assert_eq!(DateFormat::default().template(), "YYYY-MM-DD");
}

#[test]
fn test_serde_uses_template_string() {
    assert_eq!(serde_json::to_string(&DateFormat::Eu).unwrap(), "\"DD.MM.YYYY\"");

    let format: DateFormat = serde_json::from_str("\"MMMM DD, YYYY\"").unwrap();
    assert_eq!(format, DateFormat::Verbose);

    let format: DateFormat = serde_json::from_str("\"YYYY/MM\"").unwrap();
    assert_eq!(format, DateFormat::Custom("YYYY/MM".to_string()));
}

#[test]
fn test_components_serialize() {
    let value = serde_json::to_value(parts(2024, 1, 15)).unwrap();
    assert_eq!(value["year"], 2024);
    assert_eq!(value["month"], 1);
    assert_eq!(value["milliseconds"], 0);
}
