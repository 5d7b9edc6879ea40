//! Common types used throughout the rating engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Free-form team name, the ledger key
pub type TeamName = String;

/// Season key: the calendar year the season started in
pub type Season = i32;

/// Competitive tier of a division, 1 = strongest
pub type Tier = u8;

/// Which side of a fixture a team played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

/// A single finished match, already normalized by the input boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub division: String,
    pub home_team: TeamName,
    pub away_team: TeamName,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl MatchRecord {
    pub fn new(
        date: NaiveDate,
        division: impl Into<String>,
        home_team: impl Into<TeamName>,
        away_team: impl Into<TeamName>,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        Self {
            date,
            division: division.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_goals,
            away_goals,
        }
    }

    /// Signed goal difference from the home side's perspective
    pub fn goal_diff(&self) -> i64 {
        i64::from(self.home_goals) - i64::from(self.away_goals)
    }
}

/// Per-match ledger row emitted by the processor
///
/// Field names on the wire follow the column layout of the football-data
/// style CSV files the tool is usually fed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAuditRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Div")]
    pub division: String,
    #[serde(rename = "HomeTeam")]
    pub home_team: TeamName,
    #[serde(rename = "AwayTeam")]
    pub away_team: TeamName,
    #[serde(rename = "FTHG")]
    pub home_goals: u32,
    #[serde(rename = "FTAG")]
    pub away_goals: u32,
    #[serde(rename = "HomeTeamMMRBefore")]
    pub home_rating_before: f64,
    #[serde(rename = "AwayTeamMMRBefore")]
    pub away_rating_before: f64,
    #[serde(rename = "HomeTeamMMRAfter")]
    pub home_rating_after: f64,
    #[serde(rename = "AwayTeamMMRAfter")]
    pub away_rating_after: f64,
    #[serde(rename = "DeltaHome")]
    pub delta_home: f64,
    #[serde(rename = "DeltaAway")]
    pub delta_away: f64,
    #[serde(rename = "ExpectedHome")]
    pub expected_home: f64,
    #[serde(rename = "ExpectedAway")]
    pub expected_away: f64,
    #[serde(rename = "KUsed")]
    pub k_used: f64,
    #[serde(rename = "GoalDiff")]
    pub goal_diff: i64,
}

/// One row of the final ratings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub team: TeamName,
    pub rating: f64,
    pub season: Option<Season>,
    pub tier: Option<Tier>,
}
