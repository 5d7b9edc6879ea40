//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use division_mmr::config::RatingConfig;
use division_mmr::types::MatchRecord;
use division_mmr::{CompetitionTaxonomy, MatchProcessor};

/// Two seasons of a small English pyramid: Leeds go up from E1, Fulham
/// come down from E0, and the rest stay put.
pub const TWO_SEASON_CSV: &str = "\
Div,Date,HomeTeam,AwayTeam,FTHG,FTAG,FTR
E1,15/02/2020,Leeds,Hull,4,0,H
E0,16/02/2020,Fulham,Arsenal,0,3,A
E1,22/02/2020,Hull,Leeds,1,1,D
E0,23/02/2020,Arsenal,Fulham,2,1,H
E0,12/09/2020,Leeds,Arsenal,1,2,A
E1,12/09/2020,Fulham,Hull,2,0,H
E0,19/09/2020,Arsenal,Leeds,0,0,D
E0,not-a-date,Arsenal,Leeds,9,9,H
E1,19/09/2020,Hull,Fulham,1,3,A
";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

pub fn record(
    date: NaiveDate,
    division: &str,
    home: &str,
    away: &str,
    home_goals: u32,
    away_goals: u32,
) -> MatchRecord {
    MatchRecord::new(date, division, home, away, home_goals, away_goals)
}

pub fn default_processor() -> MatchProcessor {
    processor_with(RatingConfig::default())
}

pub fn processor_with(config: RatingConfig) -> MatchProcessor {
    MatchProcessor::new(config, CompetitionTaxonomy::default()).expect("valid fixture config")
}
