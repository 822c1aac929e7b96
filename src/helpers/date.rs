//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown in place of a date when a post has none
pub const MISSING_DATE_LABEL: &str = "Draft date";

/// Parse a post date in the formats authors actually write.
///
/// Returns None for anything else; such dates sort below every parseable
/// date.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // Try RFC 3339 / ISO 8601 with an offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}

/// Format a post date for display (like "14 November 2025").
///
/// An empty date becomes [`MISSING_DATE_LABEL`]; a date that does not
/// parse is shown as written.
pub fn display_date(date: &str, format: &str) -> String {
    if date.trim().is_empty() {
        return MISSING_DATE_LABEL.to_string();
    }
    match parse_date(date) {
        Some(dt) => dt.format(format).to_string(),
        None => date.to_string(),
    }
}
