//! Per-team views over an audit ledger

use crate::types::{MatchAuditRow, TeamName, Venue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One match in a team's rating history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub division: String,
    pub opponent: TeamName,
    pub venue: Venue,
    pub goals_for: u32,
    pub goals_against: u32,
    pub rating_before: f64,
    pub rating_after: f64,
}

/// Sorted, de-duplicated team names appearing in the ledger
pub fn teams(rows: &[MatchAuditRow]) -> Vec<TeamName> {
    rows.iter()
        .flat_map(|row| [row.home_team.as_str(), row.away_team.as_str()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Chronological rating history of one team
pub fn team_timeline(rows: &[MatchAuditRow], team: &str) -> Vec<TimelinePoint> {
    let mut points: Vec<TimelinePoint> = rows
        .iter()
        .filter_map(|row| {
            if row.home_team == team {
                Some(TimelinePoint {
                    date: row.date,
                    division: row.division.clone(),
                    opponent: row.away_team.clone(),
                    venue: Venue::Home,
                    goals_for: row.home_goals,
                    goals_against: row.away_goals,
                    rating_before: row.home_rating_before,
                    rating_after: row.home_rating_after,
                })
            } else if row.away_team == team {
                Some(TimelinePoint {
                    date: row.date,
                    division: row.division.clone(),
                    opponent: row.home_team.clone(),
                    venue: Venue::Away,
                    goals_for: row.away_goals,
                    goals_against: row.home_goals,
                    rating_before: row.away_rating_before,
                    rating_after: row.away_rating_after,
                })
            } else {
                None
            }
        })
        .collect();

    points.sort_by_key(|point| point.date);
    points
}
