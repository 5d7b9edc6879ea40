//! Division MMR - season-aware team ratings for football results
//!
//! This crate folds a chronological match history into per-team Elo-style
//! ratings, with goal-difference scaling, preseason regression toward the
//! division baseline, and promotion/relegation adjustments.

pub mod config;
pub mod error;
pub mod history;
pub mod io;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{MmrError, Result};
pub use types::*;

// Re-export key components
pub use rating::{CompetitionTaxonomy, InMemoryRatingLedger, MatchProcessor, RatingLedger};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
