//! Configuration management for the rating tool
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values for the rating engine.

pub mod app;
pub mod rating;
pub mod taxonomy;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use rating::RatingConfig;
pub use taxonomy::{TaxonomyConfig, TierBaseline};
