//! Rating update engine
//!
//! This module provides the division taxonomy, season resolution, the
//! Elo-style outcome model, the per-team ledger, and the processor that
//! folds an ordered match history through them.

pub mod ledger;
pub mod outcome;
pub mod processor;
pub mod season;
pub mod taxonomy;

// Re-export commonly used types
pub use ledger::{
    InMemoryRatingLedger, Migration, MigrationPolicy, Placement, Preseason, RatingLedger,
    SeasonStamp, TeamRatingState, TierChange,
};
pub use outcome::{actual_home_score, expected_home_score, goal_diff_factor};
pub use processor::MatchProcessor;
pub use season::season_of;
pub use taxonomy::CompetitionTaxonomy;
