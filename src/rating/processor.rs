//! Match processor
//!
//! Folds a chronologically ordered sequence of matches through the ledger:
//! resolve season and tier, run the preseason migration for both sides,
//! compute the Elo delta scaled by goal difference, apply it, and emit an
//! audit row. Reordering the input changes the result, so the processor
//! refuses a record dated before the one it processed last.

use crate::config::RatingConfig;
use crate::error::MmrError;
use crate::rating::ledger::{
    InMemoryRatingLedger, Migration, MigrationPolicy, Placement, Preseason, RatingLedger,
};
use crate::rating::outcome::{actual_home_score, expected_home_score, goal_diff_factor};
use crate::rating::season::season_of;
use crate::rating::taxonomy::CompetitionTaxonomy;
use crate::types::{MatchAuditRow, MatchRecord};
use crate::utils::{round_to, PROBABILITY_PRECISION, RATING_PRECISION};
use chrono::NaiveDate;
use tracing::{debug, info, trace};

/// Drives the rating update over a match sequence
#[derive(Debug)]
pub struct MatchProcessor<L: RatingLedger = InMemoryRatingLedger> {
    config: RatingConfig,
    taxonomy: CompetitionTaxonomy,
    ledger: L,
    last_date: Option<NaiveDate>,
    processed: usize,
}

impl MatchProcessor<InMemoryRatingLedger> {
    /// Create a processor over a fresh in-memory ledger
    pub fn new(config: RatingConfig, taxonomy: CompetitionTaxonomy) -> crate::error::Result<Self> {
        let ledger = InMemoryRatingLedger::new(MigrationPolicy::from(&config));
        Self::with_ledger(config, taxonomy, ledger)
    }
}

impl<L: RatingLedger> MatchProcessor<L> {
    /// Create a processor over an existing ledger
    pub fn with_ledger(
        config: RatingConfig,
        taxonomy: CompetitionTaxonomy,
        ledger: L,
    ) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            taxonomy,
            ledger,
            last_date: None,
            processed: 0,
        })
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn into_ledger(self) -> L {
        self.ledger
    }

    /// Number of matches processed so far
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Process one match and return its audit row
    pub fn process_match(&mut self, record: &MatchRecord) -> crate::error::Result<MatchAuditRow> {
        if let Some(previous) = self.last_date {
            if record.date < previous {
                return Err(MmrError::OutOfOrder {
                    date: record.date,
                    previous,
                    home: record.home_team.clone(),
                    away: record.away_team.clone(),
                }
                .into());
            }
        }

        let placement = Placement {
            season: season_of(record.date),
            tier: self.taxonomy.tier_of(&record.division),
            baseline: self.taxonomy.baseline_of(&record.division),
        };

        let home = self.ledger.get_or_init(&record.home_team, placement);
        log_migration(&record.home_team, &placement, &home);
        let away = self.ledger.get_or_init(&record.away_team, placement);
        log_migration(&record.away_team, &placement, &away);

        let home_before = home.state.rating;
        let away_before = away.state.rating;

        let expected_home = expected_home_score(home_before, away_before, self.config.home_advantage);
        let expected_away = 1.0 - expected_home;
        let actual_home = actual_home_score(record.home_goals, record.away_goals);
        let factor = goal_diff_factor(
            home_before,
            away_before,
            record.home_goals.abs_diff(record.away_goals),
        );

        let delta_home = self.config.k * factor * (actual_home - expected_home);
        let delta_away = -delta_home;

        // A rating gap at the dampener's pole must not reach the ledger
        if !factor.is_finite() || !delta_home.is_finite() {
            return Err(MmrError::NonFiniteUpdate {
                date: record.date,
                home: record.home_team.clone(),
                away: record.away_team.clone(),
                home_rating: home_before,
                away_rating: away_before,
                factor,
            }
            .into());
        }

        let home_after = self.ledger.apply_delta(&record.home_team, delta_home)?;
        let away_after = self.ledger.apply_delta(&record.away_team, delta_away)?;

        trace!(
            "{} {} {}-{} {}: {:.3} -> {:.3} / {:.3} -> {:.3}",
            record.date,
            record.home_team,
            record.home_goals,
            record.away_goals,
            record.away_team,
            home_before,
            home_after,
            away_before,
            away_after
        );

        self.last_date = Some(record.date);
        self.processed += 1;

        Ok(MatchAuditRow {
            date: record.date,
            division: record.division.clone(),
            home_team: record.home_team.clone(),
            away_team: record.away_team.clone(),
            home_goals: record.home_goals,
            away_goals: record.away_goals,
            home_rating_before: round_to(home_before, RATING_PRECISION),
            away_rating_before: round_to(away_before, RATING_PRECISION),
            home_rating_after: round_to(home_after, RATING_PRECISION),
            away_rating_after: round_to(away_after, RATING_PRECISION),
            delta_home: round_to(delta_home, RATING_PRECISION),
            delta_away: round_to(delta_away, RATING_PRECISION),
            expected_home: round_to(expected_home, PROBABILITY_PRECISION),
            expected_away: round_to(expected_away, PROBABILITY_PRECISION),
            k_used: self.config.k,
            goal_diff: record.goal_diff(),
        })
    }

    /// Process a whole ordered sequence
    pub fn process_all(&mut self, records: &[MatchRecord]) -> crate::error::Result<Vec<MatchAuditRow>> {
        if records.is_empty() {
            return Err(MmrError::EmptyInput {
                reason: "match sequence is empty".to_string(),
            }
            .into());
        }

        let rows = records
            .iter()
            .map(|record| self.process_match(record))
            .collect::<crate::error::Result<Vec<_>>>()?;

        info!(
            "Processed {} matches across {} teams",
            rows.len(),
            self.ledger.team_count()
        );

        Ok(rows)
    }
}

fn log_migration(team: &str, placement: &Placement, preseason: &Preseason) {
    match preseason.migration {
        Migration::Initialized => debug!(
            "{} enters season {} in tier {} at {:.1}",
            team, placement.season, placement.tier, preseason.state.rating
        ),
        Migration::NewSeason {
            previous_rating,
            blended_rating,
            tier_change,
        } => debug!(
            "{} season {} migration: {:.3} -> {:.3} (blended {:.3}, tier change {:?})",
            team,
            placement.season,
            previous_rating,
            preseason.state.rating,
            blended_rating,
            tier_change
        ),
        Migration::SameSeason => {}
    }
}
