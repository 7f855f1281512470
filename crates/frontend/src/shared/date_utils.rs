/// Utilities for date formatting
///
/// The backend sends dates either as ISO strings or, when a warehouse DATE
/// column goes through the JSON encoder, as RFC 2822 timestamps.
use chrono::{DateTime, NaiveDate, Utc};

/// Format a date string to DD/MM/YYYY
/// Example: "2024-03-15", "2024-03-15T14:02:26Z" or
/// "Fri, 15 Mar 2024 00:00:00 GMT" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Same as [`format_date`] for optional values; `None` stays empty
pub fn format_date_opt(date_str: Option<&str>) -> String {
    date_str.map(format_date).unwrap_or_default()
}

/// Parse any of the date spellings the backend produces
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc2822(trimmed)
        .map(|dt| dt.date_naive())
        .ok()
}

/// Today's date as YYYY-MM-DD, used in export filenames
pub fn today_stamp() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date("2024-03-15 00:00:00"), "15/03/2024");
    }

    #[test]
    fn test_format_rfc2822() {
        assert_eq!(format_date("Fri, 15 Mar 2024 00:00:00 GMT"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date_opt(None), "");
    }

    #[test]
    fn today_stamp_is_iso() {
        let stamp = today_stamp();
        assert_eq!(stamp.len(), 10);
        assert!(parse_date(&stamp).is_some());
    }
}
