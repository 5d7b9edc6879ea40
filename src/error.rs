//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

use chrono::NaiveDate;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum MmrError {
    #[error("Input missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Row {row}: required field '{field}' is empty")]
    MissingField { row: usize, field: String },

    #[error("Row {row}: invalid goal count '{value}' in column {column}")]
    InvalidGoals {
        row: usize,
        column: String,
        value: String,
    },

    #[error("No matches to process: {reason}")]
    EmptyInput { reason: String },

    #[error("Match on {date} ({home} vs {away}) precedes previously processed match on {previous}")]
    OutOfOrder {
        date: NaiveDate,
        previous: NaiveDate,
        home: String,
        away: String,
    },

    #[error(
        "Match on {date} ({home} vs {away}): rating update is not finite \
         (ratings {home_rating} / {away_rating}, goal factor {factor})"
    )]
    NonFiniteUpdate {
        date: NaiveDate,
        home: String,
        away: String,
        home_rating: f64,
        away_rating: f64,
        factor: f64,
    },

    #[error("Team not found in ledger: {team}")]
    TeamNotFound { team: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
