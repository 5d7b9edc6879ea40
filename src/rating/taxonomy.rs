//! Competition taxonomy: division code to tier and baseline rating
//!
//! Known codes come from a fixed table. Anything else falls back to the
//! digits embedded in the code, clamped to the tier range, or tier 1 when the
//! code carries no digits at all.

use crate::config::taxonomy::{TaxonomyConfig, MAX_TIER};
use crate::types::Tier;
use std::collections::HashMap;

/// Lookup from division code to tier and tier baseline
#[derive(Debug, Clone)]
pub struct CompetitionTaxonomy {
    divisions: HashMap<String, Tier>,
    baselines: HashMap<Tier, f64>,
    fallback_baseline: f64,
}

impl CompetitionTaxonomy {
    pub fn new(config: &TaxonomyConfig) -> Self {
        Self {
            divisions: config.divisions.clone(),
            baselines: config
                .tiers
                .iter()
                .map(|entry| (entry.tier, entry.rating))
                .collect(),
            fallback_baseline: config.fallback_baseline,
        }
    }

    /// Tier of a division code
    pub fn tier_of(&self, division: &str) -> Tier {
        let division = division.trim();
        if let Some(tier) = self.divisions.get(division) {
            return *tier;
        }
        inferred_tier(division)
    }

    /// Baseline rating of a division code
    pub fn baseline_of(&self, division: &str) -> f64 {
        self.baseline_for_tier(self.tier_of(division))
    }

    /// Baseline rating of a tier, or the fallback for an unconfigured tier
    pub fn baseline_for_tier(&self, tier: Tier) -> f64 {
        self.baselines
            .get(&tier)
            .copied()
            .unwrap_or(self.fallback_baseline)
    }
}

impl Default for CompetitionTaxonomy {
    fn default() -> Self {
        Self::new(&TaxonomyConfig::default())
    }
}

/// Tier guessed from the digits of an unknown code
fn inferred_tier(division: &str) -> Tier {
    let digits: String = division.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 1;
    }

    // Digit runs too long for u64 are certainly past the weakest tier.
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    value.clamp(1, u64::from(MAX_TIER)) as Tier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        let taxonomy = CompetitionTaxonomy::default();
        assert_eq!(taxonomy.tier_of("E0"), 1);
        assert_eq!(taxonomy.tier_of("E1"), 2);
        assert_eq!(taxonomy.tier_of("E4"), 5);
        assert_eq!(taxonomy.tier_of("SP2"), 2);
        assert_eq!(taxonomy.tier_of("D1"), 1);
        assert_eq!(taxonomy.tier_of(" F2 "), 2);
    }

    #[test]
    fn test_unknown_codes_use_digits() {
        let taxonomy = CompetitionTaxonomy::default();
        assert_eq!(taxonomy.tier_of("N1"), 1);
        assert_eq!(taxonomy.tier_of("SC3"), 3);
        // Zero clamps up to tier 1
        assert_eq!(taxonomy.tier_of("X0"), 1);
        // "G12" reads as 12 and clamps to the weakest tier
        assert_eq!(taxonomy.tier_of("G12"), 5);
        assert_eq!(taxonomy.tier_of("Z99999999999999999999999"), 5);
    }

    #[test]
    fn test_unknown_codes_without_digits() {
        let taxonomy = CompetitionTaxonomy::default();
        assert_eq!(taxonomy.tier_of("MLS"), 1);
        assert_eq!(taxonomy.tier_of(""), 1);
    }

    #[test]
    fn test_baselines() {
        let taxonomy = CompetitionTaxonomy::default();
        assert_eq!(taxonomy.baseline_of("E0"), 1600.0);
        assert_eq!(taxonomy.baseline_of("E1"), 1500.0);
        assert_eq!(taxonomy.baseline_of("E2"), 1400.0);
        assert_eq!(taxonomy.baseline_of("E3"), 1300.0);
        assert_eq!(taxonomy.baseline_of("E4"), 1200.0);
        assert_eq!(taxonomy.baseline_of("SC3"), 1400.0);
    }

    #[test]
    fn test_fallback_baseline_for_unconfigured_tier() {
        let mut config = TaxonomyConfig::default();
        config.tiers.retain(|entry| entry.tier != 4);
        let taxonomy = CompetitionTaxonomy::new(&config);

        assert_eq!(taxonomy.baseline_of("E3"), 1500.0);
        assert_eq!(taxonomy.baseline_for_tier(1), 1600.0);
    }

    #[test]
    fn test_configured_divisions_take_precedence() {
        let mut config = TaxonomyConfig::default();
        config.divisions.insert("B1".to_string(), 3);
        let taxonomy = CompetitionTaxonomy::new(&config);

        assert_eq!(taxonomy.tier_of("B1"), 3);
        assert_eq!(taxonomy.baseline_of("B1"), 1400.0);
    }
}
