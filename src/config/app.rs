//! Main application configuration
//!
//! This module defines the primary configuration structures for the rating
//! tool, including TOML/environment loading and validation.

use super::{RatingConfig, TaxonomyConfig};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingConfig,
    pub taxonomy: TaxonomyConfig,
}

/// Process-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "division-mmr".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        if let Ok(k) = env::var("MMR_K") {
            config.rating.k = k
                .parse()
                .map_err(|_| anyhow!("Invalid MMR_K value: {}", k))?;
        }
        if let Ok(home_adv) = env::var("MMR_HOME_ADVANTAGE") {
            config.rating.home_advantage = home_adv
                .parse()
                .map_err(|_| anyhow!("Invalid MMR_HOME_ADVANTAGE value: {}", home_adv))?;
        }
        if let Ok(blend) = env::var("MMR_SEASON_BLEND") {
            config.rating.season_blend = blend
                .parse()
                .map_err(|_| anyhow!("Invalid MMR_SEASON_BLEND value: {}", blend))?;
        }
        if let Ok(bonus) = env::var("MMR_PROMOTION_BONUS") {
            config.rating.promotion_bonus = bonus
                .parse()
                .map_err(|_| anyhow!("Invalid MMR_PROMOTION_BONUS value: {}", bonus))?;
        }
        if let Ok(nerf) = env::var("MMR_RELEGATION_NERF") {
            config.rating.relegation_nerf = nerf
                .parse()
                .map_err(|_| anyhow!("Invalid MMR_RELEGATION_NERF value: {}", nerf))?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    config.rating.validate()?;
    config.taxonomy.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.service.log_level, "info");
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AppConfig::default();
        config.service.log_level = "chatty".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_nested_rating_validation() {
        let mut config = AppConfig::default();
        config.rating.season_blend = 2.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "division-mmr-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"
            [service]
            log_level = "debug"

            [rating]
            k = 32.0
            promotion_bonus = 50.0
            "#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.rating.k, 32.0);
        assert_eq!(config.rating.promotion_bonus, 50.0);
        assert_eq!(config.rating.relegation_nerf, 75.0);
        assert_eq!(config.taxonomy, TaxonomyConfig::default());
    }

    #[test]
    fn test_from_file_missing() {
        let result = AppConfig::from_file(Path::new("/definitely/not/here.toml"));
        assert!(result.is_err());
    }
}
