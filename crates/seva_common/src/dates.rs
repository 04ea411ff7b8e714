//! Date handling for application records.
//!
//! Backends send either plain dates (`2024-01-15`) or timestamps
//! (`2024-01-15T10:30:00Z`, `2024-01-15T10:30:00.000`). Display is always
//! date-only `YYYY-MM-DD`.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// Days from submission to the expected completion of a pending application
pub const PROCESSING_DAYS: i64 = 15;

/// Parse a record date, keeping the calendar day it was written in.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DISPLAY_FORMAT) {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(stamp.date());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(stamp.date());
    }
    None
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Reformat a raw record date for display, `None` when it does not parse.
pub fn display_date(raw: Option<&str>) -> Option<String> {
    raw.and_then(parse_date).map(format_date)
}

/// Submission date plus the standard processing window.
pub fn expected_by(submitted: NaiveDate) -> Option<NaiveDate> {
    submitted.checked_add_signed(Duration::days(PROCESSING_DAYS))
}
