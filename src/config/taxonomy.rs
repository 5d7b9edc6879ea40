//! Division taxonomy configuration

use crate::types::Tier;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weakest tier the taxonomy knows about
pub const MAX_TIER: Tier = 5;

/// Baseline used for tiers without a configured entry
pub const DEFAULT_FALLBACK_BASELINE: f64 = 1500.0;

/// Baseline rating attached to a tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBaseline {
    pub tier: Tier,
    pub rating: f64,
}

/// Known division codes and tier baselines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Division code to tier
    pub divisions: HashMap<String, Tier>,
    /// Baseline rating per tier
    pub tiers: Vec<TierBaseline>,
    /// Baseline for a tier missing from `tiers`
    pub fallback_baseline: f64,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        let divisions = [
            // England
            ("E0", 1),
            ("E1", 2),
            ("E2", 3),
            ("E3", 4),
            ("E4", 5),
            // Spain
            ("SP1", 1),
            ("SP2", 2),
            // Italy
            ("I1", 1),
            ("I2", 2),
            // Germany
            ("D1", 1),
            ("D2", 2),
            // France
            ("F1", 1),
            ("F2", 2),
        ]
        .into_iter()
        .map(|(code, tier)| (code.to_string(), tier))
        .collect();

        let tiers = [(1, 1600.0), (2, 1500.0), (3, 1400.0), (4, 1300.0), (5, 1200.0)]
            .into_iter()
            .map(|(tier, rating)| TierBaseline { tier, rating })
            .collect();

        Self {
            divisions,
            tiers,
            fallback_baseline: DEFAULT_FALLBACK_BASELINE,
        }
    }
}

impl TaxonomyConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        for (code, tier) in &self.divisions {
            if !(1..=MAX_TIER).contains(tier) {
                return Err(crate::error::MmrError::ConfigurationError {
                    message: format!(
                        "Division {} maps to tier {}, expected 1..={}",
                        code, tier, MAX_TIER
                    ),
                }
                .into());
            }
        }

        for entry in &self.tiers {
            if !(1..=MAX_TIER).contains(&entry.tier) {
                return Err(crate::error::MmrError::ConfigurationError {
                    message: format!("Baseline for unknown tier {}", entry.tier),
                }
                .into());
            }
            if !entry.rating.is_finite() {
                return Err(crate::error::MmrError::ConfigurationError {
                    message: format!("Baseline for tier {} must be finite", entry.tier),
                }
                .into());
            }
        }

        if !self.fallback_baseline.is_finite() {
            return Err(crate::error::MmrError::ConfigurationError {
                message: "Fallback baseline must be finite".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TaxonomyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.divisions.len(), 13);
        assert_eq!(config.tiers.len(), 5);
    }

    #[test]
    fn test_out_of_range_tier_rejected() {
        let mut config = TaxonomyConfig::default();
        config.divisions.insert("X9".to_string(), 9);
        assert!(config.validate().is_err());

        let mut config = TaxonomyConfig::default();
        config.tiers.push(TierBaseline {
            tier: 0,
            rating: 1700.0,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_override() {
        let raw = r#"
            fallback_baseline = 1450.0

            [divisions]
            N1 = 1
            N2 = 2

            [[tiers]]
            tier = 1
            rating = 1650.0
        "#;
        let config: TaxonomyConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.divisions.get("N2"), Some(&2));
        assert_eq!(config.tiers.len(), 1);
        assert_eq!(config.fallback_baseline, 1450.0);
        assert!(config.validate().is_ok());
    }
}
