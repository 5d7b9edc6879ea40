//! Match date normalization
//!
//! Results files mix day-first, ISO and occasionally month-first dates, with
//! dots, slashes or dashes as separators. Dots are folded into slashes, then
//! formats are tried day-first before month-first. Two-digit years are tried
//! before four-digit ones because `%Y` happily reads "20" as the year 20.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &[
    "%d/%m/%y", "%d/%m/%Y", "%d-%m-%y", "%d-%m-%Y", "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%y",
    "%m/%d/%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a raw date cell, `None` when no known format matches
pub fn parse_match_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.trim().replace('.', "/");
    if cleaned.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(&cleaned, format).ok())
                .map(|datetime| datetime.date())
        })
}
