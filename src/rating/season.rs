//! Season resolution

use crate::types::Season;
use chrono::{Datelike, NaiveDate};

/// First month of a season
pub const SEASON_START_MONTH: u32 = 7;

/// Season key for a match date
///
/// Seasons run July through June and are keyed by the year they start in.
pub fn season_of(date: NaiveDate) -> Season {
    if date.month() >= SEASON_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}
