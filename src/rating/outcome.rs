//! Outcome model: expected score and goal-difference scaling
//!
//! The logistic curve is the plain Elo one from the skillratings crate; home
//! advantage enters as a rating offset on the home side before comparison.

use skillratings::elo::{expected_score, EloRating};

/// Rating gap scale of the goal-difference dampener
const GAP_SCALE: f64 = 0.001;

/// Neutral point of the goal-difference dampener
const GAP_PIVOT: f64 = 2.2;

/// Probability that the home side wins, in (0, 1)
pub fn expected_home_score(rating_home: f64, rating_away: f64, home_advantage: f64) -> f64 {
    let home = EloRating {
        rating: rating_home + home_advantage,
    };
    let away = EloRating {
        rating: rating_away,
    };
    let (expected_home, _expected_away) = expected_score(&home, &away);
    expected_home
}

/// Multiplier on K for a result decided by `goal_diff_abs` goals
///
/// A draw keeps the base rate (1.0). Otherwise the margin grows the factor
/// logarithmically, damped when the favourite wins and boosted when the
/// underdog does. The dampener is not clamped: it is infinite when the home
/// side trails by exactly 2200 points and negative beyond that. Callers must
/// check the result is finite.
pub fn goal_diff_factor(rating_home: f64, rating_away: f64, goal_diff_abs: u32) -> f64 {
    if goal_diff_abs == 0 {
        return 1.0;
    }

    let margin = (f64::from(goal_diff_abs) + 1.0).log10();
    let dampener = GAP_PIVOT / ((rating_home - rating_away) * GAP_SCALE + GAP_PIVOT);
    margin * dampener
}

/// Actual score for the home side: 1 win, 0.5 draw, 0 loss
pub fn actual_home_score(home_goals: u32, away_goals: u32) -> f64 {
    match home_goals.cmp(&away_goals) {
        std::cmp::Ordering::Greater => 1.0,
        std::cmp::Ordering::Equal => 0.5,
        std::cmp::Ordering::Less => 0.0,
    }
}
