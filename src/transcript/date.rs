use super::Row;
use regex::Regex;
use std::sync::LazyLock;

/// Columns searched for a meeting date, in order
pub const DATE_FIELDS: [&str; 8] = [
    "date_ymd",
    "date",
    "createdTime",
    "created_time",
    "created_at",
    "start_time",
    "startTime",
    "meeting_date",
];

/// Only this many leading characters are inspected
const DATE_SCAN_CHARS: usize = 50;

static NUMERIC_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})[./-]([0-9]{1,2})[./-]([0-9]{1,2})").unwrap());

static KOREAN_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})\s*년\s*([0-9]{1,2})\s*월\s*([0-9]{1,2})\s*일").unwrap()
});

/// Find a `YYYY-MM-DD` date for a row: the date columns first, then the
/// meeting name.
pub fn extract_date_ymd(row: &Row, meeting_name: &str) -> Option<String> {
    DATE_FIELDS
        .iter()
        .filter_map(|field| row.get(*field))
        .find_map(|value| normalize_date_string(value))
        .or_else(|| normalize_date_string(meeting_name))
}

/// Normalize `2024-3-5`, `2024.03.05`, `2024/3/5`, `2024년 3월 5일` or an
/// ISO-like timestamp to `YYYY-MM-DD`.
pub fn normalize_date_string(value: &str) -> Option<String> {
    let value: String = value.trim().chars().take(DATE_SCAN_CHARS).collect();
    if value.is_empty() {
        return None;
    }

    for pattern in [&*NUMERIC_DATE, &*KOREAN_DATE] {
        if let Some(caps) = pattern.captures(&value) {
            let year = &caps[1];
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            return Some(format!("{}-{:02}-{:02}", year, month, day));
        }
    }

    let chars: Vec<char> = value.chars().collect();
    if chars.len() >= 10 && chars[4] == '-' && chars[7] == '-' {
        return Some(chars[..10].iter().collect());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_formats() {
        assert_eq!(normalize_date_string("2024-3-5"), Some("2024-03-05".into()));
        assert_eq!(normalize_date_string("2024.03.05 10:00"), Some("2024-03-05".into()));
        assert_eq!(
            normalize_date_string("2024-11-02T09:30:00Z"),
            Some("2024-11-02".into())
        );
    }

    #[test]
    fn test_korean_format() {
        assert_eq!(
            normalize_date_string("2024년 3월 5일 주간회의"),
            Some("2024-03-05".into())
        );
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(normalize_date_string(""), None);
        assert_eq!(normalize_date_string("next tuesday"), None);
    }

    #[test]
    fn test_field_order_and_name_fallback() {
        let row: Row = [
            ("date".to_string(), "garbage".to_string()),
            ("created_at".to_string(), "2023/12/01".to_string()),
            ("start_time".to_string(), "2022-01-01".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(extract_date_ymd(&row, ""), Some("2023-12-01".into()));

        let empty = Row::new();
        assert_eq!(
            extract_date_ymd(&empty, "Retro 2024.02.09"),
            Some("2024-02-09".into())
        );
        assert_eq!(extract_date_ymd(&empty, "Retro"), None);
    }
}
