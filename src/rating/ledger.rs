//! Team rating ledger
//!
//! This module defines the interface for the per-team rating store and its
//! in-memory implementation. Every entry remembers the season and tier it was
//! last seen in, which drives the preseason migration: the first match of a
//! new season blends the rating toward the division baseline and applies the
//! promotion/relegation nudge when the tier changed.

use crate::config::RatingConfig;
use crate::error::MmrError;
use crate::types::{Season, StandingEntry, TeamName, Tier};
use std::collections::HashMap;

/// Season and tier a team was last processed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonStamp {
    pub season: Season,
    pub tier: Tier,
}

/// Where a team is playing in the match being processed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub season: Season,
    pub tier: Tier,
    /// Baseline rating of the team's current division
    pub baseline: f64,
}

/// Migration tunables taken from the rating configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MigrationPolicy {
    pub season_blend: f64,
    pub promotion_bonus: f64,
    pub relegation_nerf: f64,
}

impl From<&RatingConfig> for MigrationPolicy {
    fn from(config: &RatingConfig) -> Self {
        Self {
            season_blend: config.season_blend,
            promotion_bonus: config.promotion_bonus,
            relegation_nerf: config.relegation_nerf,
        }
    }
}

impl Default for MigrationPolicy {
    fn default() -> Self {
        Self::from(&RatingConfig::default())
    }
}

/// Tier movement between two seasons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierChange {
    Promotion { from: Tier, to: Tier },
    Relegation { from: Tier, to: Tier },
}

/// What `get_or_init` did to a team's entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Migration {
    /// First sighting, rating set to the division baseline
    Initialized,
    /// Season already seen, only the tier was refreshed
    SameSeason,
    /// First match of a new season
    NewSeason {
        previous_rating: f64,
        blended_rating: f64,
        tier_change: Option<TierChange>,
    },
}

/// Ledger entry for one team
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamRatingState {
    pub rating: f64,
    /// `None` only for an entry that has never been placed in a season
    pub last_seen: Option<SeasonStamp>,
}

impl TeamRatingState {
    /// Create the entry for a team seen for the first time
    pub fn new(placement: Placement) -> Self {
        Self {
            rating: placement.baseline,
            last_seen: Some(SeasonStamp {
                season: placement.season,
                tier: placement.tier,
            }),
        }
    }

    pub fn last_season(&self) -> Option<Season> {
        self.last_seen.map(|stamp| stamp.season)
    }

    pub fn last_tier(&self) -> Option<Tier> {
        self.last_seen.map(|stamp| stamp.tier)
    }

    /// Bring the entry into `placement`'s season
    ///
    /// Idempotent within a season: once the stamp carries the placement's
    /// season, repeated calls only refresh the tier.
    pub fn migrate(&mut self, placement: Placement, policy: &MigrationPolicy) -> Migration {
        if let Some(stamp) = self.last_seen.as_mut() {
            if stamp.season == placement.season {
                stamp.tier = placement.tier;
                return Migration::SameSeason;
            }
        }

        let previous_rating = self.rating;
        self.rating = (1.0 - policy.season_blend) * self.rating
            + policy.season_blend * placement.baseline;
        let blended_rating = self.rating;

        let tier_change = match self.last_tier() {
            Some(from) if placement.tier < from => Some(TierChange::Promotion {
                from,
                to: placement.tier,
            }),
            Some(from) if placement.tier > from => Some(TierChange::Relegation {
                from,
                to: placement.tier,
            }),
            _ => None,
        };

        if let Some(change) = tier_change {
            // The sign follows which side of the baseline the blended rating
            // sits on, for promotion and relegation alike.
            let direction = if placement.baseline - self.rating >= 0.0 {
                1.0
            } else {
                -1.0
            };
            match change {
                TierChange::Promotion { .. } => self.rating += direction * policy.promotion_bonus,
                TierChange::Relegation { .. } => self.rating -= direction * policy.relegation_nerf,
            }
        }

        self.last_seen = Some(SeasonStamp {
            season: placement.season,
            tier: placement.tier,
        });

        Migration::NewSeason {
            previous_rating,
            blended_rating,
            tier_change,
        }
    }
}

/// Result of fetching a team for a match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preseason {
    /// Entry after any migration, i.e. the pre-match state
    pub state: TeamRatingState,
    pub migration: Migration,
}

/// Trait for rating ledger operations
pub trait RatingLedger {
    /// Get a team's entry
    fn get(&self, team: &str) -> Option<&TeamRatingState>;

    /// Fetch a team's entry, creating it at the placement baseline or
    /// migrating it into the placement's season as needed
    fn get_or_init(&mut self, team: &str, placement: Placement) -> Preseason;

    /// Add a post-match delta to a team's rating, returning the new rating
    fn apply_delta(&mut self, team: &str, delta: f64) -> crate::error::Result<f64>;

    /// Number of teams with an entry
    fn team_count(&self) -> usize;

    /// All teams ordered by rating (descending), ties broken by name
    fn standings(&self) -> Vec<StandingEntry>;
}

/// In-memory rating ledger implementation
#[derive(Debug, Clone, Default)]
pub struct InMemoryRatingLedger {
    teams: HashMap<TeamName, TeamRatingState>,
    policy: MigrationPolicy,
}

impl InMemoryRatingLedger {
    /// Create a new in-memory ledger
    pub fn new(policy: MigrationPolicy) -> Self {
        Self {
            teams: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &MigrationPolicy {
        &self.policy
    }
}

impl RatingLedger for InMemoryRatingLedger {
    fn get(&self, team: &str) -> Option<&TeamRatingState> {
        self.teams.get(team)
    }

    fn get_or_init(&mut self, team: &str, placement: Placement) -> Preseason {
        match self.teams.get_mut(team) {
            Some(state) => {
                let migration = state.migrate(placement, &self.policy);
                Preseason {
                    state: *state,
                    migration,
                }
            }
            None => {
                let state = TeamRatingState::new(placement);
                self.teams.insert(team.to_string(), state);
                Preseason {
                    state,
                    migration: Migration::Initialized,
                }
            }
        }
    }

    fn apply_delta(&mut self, team: &str, delta: f64) -> crate::error::Result<f64> {
        let state = self
            .teams
            .get_mut(team)
            .ok_or_else(|| MmrError::TeamNotFound {
                team: team.to_string(),
            })?;

        state.rating += delta;
        Ok(state.rating)
    }

    fn team_count(&self) -> usize {
        self.teams.len()
    }

    fn standings(&self) -> Vec<StandingEntry> {
        let mut entries: Vec<StandingEntry> = self
            .teams
            .iter()
            .map(|(team, state)| StandingEntry {
                team: team.clone(),
                rating: state.rating,
                season: state.last_season(),
                tier: state.last_tier(),
            })
            .collect();

        entries.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.team.cmp(&b.team))
        });

        entries
    }
}
