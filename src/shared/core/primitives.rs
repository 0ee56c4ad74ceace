use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Formats an instant the way stored records carry it: RFC 3339, millisecond precision, `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses the timestamp shapes found in stored records into epoch milliseconds.
///
/// Accepts full RFC 3339, `datetime-local` input values (`2024-03-01T10:30`) and
/// plain dates (`2024-03-01`, read as midnight UTC). Anything else yields `None`.
pub fn timestamp_millis(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.timestamp_millis());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(parsed.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp_millis())
}

pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Returns the value when it carries any non-whitespace content.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn it_should_format_with_millis_and_zulu_suffix() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-03-01T10:30:00.000Z");
    }

    #[rstest]
    #[case("2024-03-01T10:30:00.000Z", Some(1_709_289_000_000))]
    #[case("2024-03-01T10:30", Some(1_709_289_000_000))]
    #[case("2024-03-01", Some(1_709_251_200_000))]
    #[case("yesterday", None)]
    #[case("", None)]
    fn it_should_parse_known_timestamp_shapes(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(timestamp_millis(input), expected);
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(""), true)]
    #[case(Some("   "), true)]
    #[case(Some(" x "), false)]
    fn it_should_detect_blank_values(#[case] input: Option<&str>, #[case] expected: bool) {
        assert_eq!(is_blank(input), expected);
    }
}
