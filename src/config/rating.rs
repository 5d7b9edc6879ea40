//! Rating update configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_K: f64 = 40.0;
pub const DEFAULT_HOME_ADVANTAGE: f64 = 60.0;
pub const DEFAULT_SEASON_BLEND: f64 = 0.5;
pub const DEFAULT_PROMOTION_BONUS: f64 = 75.0;
pub const DEFAULT_RELEGATION_NERF: f64 = 75.0;

/// Tunables for the Elo update and the preseason migration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Base rating-change multiplier
    pub k: f64,
    /// Rating points added to the home side before computing expectations
    pub home_advantage: f64,
    /// Weight of the division baseline when a new season starts, in [0, 1]
    pub season_blend: f64,
    /// Rating nudge applied on promotion
    pub promotion_bonus: f64,
    /// Rating nudge applied on relegation, stored as a positive magnitude
    pub relegation_nerf: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            home_advantage: DEFAULT_HOME_ADVANTAGE,
            season_blend: DEFAULT_SEASON_BLEND,
            promotion_bonus: DEFAULT_PROMOTION_BONUS,
            relegation_nerf: DEFAULT_RELEGATION_NERF,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        let fields = [
            ("k", self.k),
            ("home_advantage", self.home_advantage),
            ("season_blend", self.season_blend),
            ("promotion_bonus", self.promotion_bonus),
            ("relegation_nerf", self.relegation_nerf),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(crate::error::MmrError::ConfigurationError {
                    message: format!("{} must be a finite number, got {}", name, value),
                }
                .into());
            }
        }

        if self.k < 0.0 {
            return Err(crate::error::MmrError::ConfigurationError {
                message: "K must be non-negative".to_string(),
            }
            .into());
        }

        if !(0.0..=1.0).contains(&self.season_blend) {
            return Err(crate::error::MmrError::ConfigurationError {
                message: format!(
                    "Season blend must be within [0, 1], got {}",
                    self.season_blend
                ),
            }
            .into());
        }

        if self.promotion_bonus < 0.0 || self.relegation_nerf < 0.0 {
            return Err(crate::error::MmrError::ConfigurationError {
                message: "Promotion bonus and relegation nerf are magnitudes and must be non-negative"
                    .to_string(),
            }
            .into());
        }

        Ok(())
    }
}
