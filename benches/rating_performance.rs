//! Performance benchmarks for rating calculations

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use division_mmr::config::RatingConfig;
use division_mmr::rating::{expected_home_score, goal_diff_factor};
use division_mmr::types::MatchRecord;
use division_mmr::{CompetitionTaxonomy, MatchProcessor};

/// Double round robin for 20 teams per division over three divisions and
/// three seasons, with teams swapping divisions between seasons.
fn synthetic_history() -> Vec<MatchRecord> {
    let divisions = ["E0", "E1", "E2"];
    let mut records = Vec::new();

    for season in 0..3i32 {
        let mut day = NaiveDate::from_ymd_opt(2018 + season, 8, 1).unwrap();
        for round in 0..38u32 {
            for (slot, division) in divisions.iter().enumerate() {
                for pair in 0..10u32 {
                    // Rotate the pool by season so some teams move division
                    let base = (slot as u32 * 20 + season as u32 * 3) % 60;
                    let home = (base + pair + round) % 60;
                    let away = (base + 19 - pair + round) % 60;
                    records.push(MatchRecord::new(
                        day,
                        *division,
                        format!("Team {}", home),
                        format!("Team {}", away),
                        (home + round) % 4,
                        (away + pair) % 3,
                    ));
                }
            }
            day += Duration::days(7);
        }
    }

    records
}

fn bench_outcome_model(c: &mut Criterion) {
    c.bench_function("expected_and_factor", |b| {
        b.iter(|| {
            let expected = expected_home_score(black_box(1580.0), black_box(1510.0), 60.0);
            let factor = goal_diff_factor(black_box(1580.0), black_box(1510.0), black_box(3));
            black_box(expected * factor)
        })
    });
}

fn bench_full_history(c: &mut Criterion) {
    let records = synthetic_history();

    c.bench_function("process_three_seasons", |b| {
        b.iter(|| {
            let mut processor =
                MatchProcessor::new(RatingConfig::default(), CompetitionTaxonomy::default())
                    .unwrap();
            black_box(processor.process_all(&records).unwrap())
        })
    });
}

criterion_group!(benches, bench_outcome_model, bench_full_history);
criterion_main!(benches);
