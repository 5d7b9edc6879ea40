//! Property tests for the rating engine invariants

mod fixtures;

use chrono::Duration;
use division_mmr::rating::{expected_home_score, goal_diff_factor};
use division_mmr::types::MatchRecord;
use division_mmr::RatingLedger;
use proptest::prelude::*;

use fixtures::{date, default_processor};

const TEAMS: [&str; 6] = ["Arsenal", "Burnley", "Chelsea", "Derby", "Everton", "Fulham"];

/// Matches between six teams in one division, starting in August 2020, with
/// a gap of 0..=20 days between consecutive fixtures.
fn match_sequence(division: &'static str) -> impl Strategy<Value = Vec<MatchRecord>> {
    prop::collection::vec((0usize..6, 1usize..6, 0u32..6, 0u32..6, 0i64..=20), 1..60).prop_map(
        move |specs| {
            let mut day = date(2020, 8, 1);
            specs
                .into_iter()
                .map(|(home, offset, home_goals, away_goals, gap)| {
                    day += Duration::days(gap);
                    MatchRecord::new(
                        day,
                        division,
                        TEAMS[home],
                        TEAMS[(home + offset) % TEAMS.len()],
                        home_goals,
                        away_goals,
                    )
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_deltas_are_zero_sum(records in match_sequence("E0")) {
        let mut processor = default_processor();
        let rows = processor.process_all(&records).unwrap();

        prop_assert_eq!(rows.len(), records.len());
        for row in &rows {
            prop_assert_eq!(row.delta_home + row.delta_away, 0.0);
            prop_assert!((row.expected_home + row.expected_away - 1.0).abs() < 2e-5);
            prop_assert_eq!(row.goal_diff, i64::from(row.home_goals) - i64::from(row.away_goals));
        }
    }

    #[test]
    fn prop_rating_mass_conserved_within_a_season(records in match_sequence("E1")) {
        // Keep only fixtures before the season rolls over in July
        let season_end = date(2021, 6, 30);
        let records: Vec<MatchRecord> = records.into_iter().filter(|r| r.date <= season_end).collect();
        prop_assume!(!records.is_empty());

        let mut processor = default_processor();
        processor.process_all(&records).unwrap();

        let ledger = processor.ledger();
        let total: f64 = ledger.standings().iter().map(|entry| entry.rating).sum();
        let expected = 1500.0 * ledger.team_count() as f64;
        prop_assert!((total - expected).abs() < 1e-6);
    }

    #[test]
    fn prop_expected_score_in_unit_interval(
        home in 500.0f64..3000.0,
        away in 500.0f64..3000.0,
        advantage in 0.0f64..200.0,
    ) {
        let expected_home = expected_home_score(home, away, advantage);
        prop_assert!(expected_home > 0.0 && expected_home < 1.0);

        let expected_away = 1.0 - expected_home;
        prop_assert!((expected_home + expected_away - 1.0).abs() < 1e-12);
    }

    #[test]
    fn prop_draw_factor_is_one(home in -5000.0f64..5000.0, away in -5000.0f64..5000.0) {
        prop_assert_eq!(goal_diff_factor(home, away, 0), 1.0);
    }

    #[test]
    fn prop_margin_monotonic_for_equal_ratings(rating in 800.0f64..2400.0, margin in 1u32..15) {
        let smaller = goal_diff_factor(rating, rating, margin);
        let larger = goal_diff_factor(rating, rating, margin + 1);
        prop_assert!(larger >= smaller);
    }
}
