//! Timestamp formatting for records coming back from the API.
//!
//! The API returns `createdAt` either as an RFC 3339 string or as epoch
//! milliseconds serialized to a string.

use chrono::{DateTime, Utc};

const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Parse an API timestamp in either supported representation.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// Format an API timestamp as `DD.MM.YYYY HH:MM` (UTC).
/// Unparseable input is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(format_timestamp("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
    }

    #[test]
    fn test_format_epoch_millis() {
        // 2024-03-15T14:02:26Z
        assert_eq!(format_timestamp("1710511346000"), "15.03.2024 14:02");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert!(parse_timestamp("").is_none());
    }
}
