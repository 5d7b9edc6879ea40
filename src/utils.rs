//! Utility functions for the rating engine

/// Decimal places kept for ratings and deltas in audit rows
pub const RATING_PRECISION: u32 = 3;

/// Decimal places kept for expected-score probabilities in audit rows
pub const PROBABILITY_PRECISION: u32 = 5;

/// Round to a fixed number of decimal places
///
/// Rounds the exact binary value, so 1.0005 (stored as 1.000499...) goes
/// down. Symmetric under negation: `round_to(-x, p) == -round_to(x, p)`.
pub fn round_to(value: f64, places: u32) -> f64 {
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1607.92834, RATING_PRECISION), 1607.928);
        assert_eq!(round_to(0.584570123, PROBABILITY_PRECISION), 0.58457);
        assert_eq!(round_to(2.0, RATING_PRECISION), 2.0);
    }

    #[test]
    fn test_round_to_uses_stored_value() {
        // Both sit just below the tie once stored as f64
        assert_eq!(round_to(1.0005, 3), 1.0);
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(1.0006, 3), 1.001);
    }

    #[test]
    fn test_round_to_is_symmetric() {
        for value in [7.9284, 0.0005, 12.3455, 1e-9] {
            assert_eq!(round_to(-value, 3), -round_to(value, 3));
        }
    }
}
