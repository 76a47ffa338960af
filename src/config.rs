use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringPoints;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub scoring: ScoringSettings,
    pub recommendations: RecommendationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub points: PointsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsConfig {
    #[serde(default = "default_category_points")]
    pub category_match: u32,
    #[serde(default = "default_activity_points")]
    pub activity_match: u32,
    #[serde(default = "default_budget_points")]
    pub budget_match: u32,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            category_match: default_category_points(),
            activity_match: default_activity_points(),
            budget_match: default_budget_points(),
        }
    }
}

impl From<PointsConfig> for ScoringPoints {
    fn from(points: PointsConfig) -> Self {
        Self {
            category_match: points.category_match,
            activity_match: points.activity_match,
            budget_match: points.budget_match,
        }
    }
}

fn default_category_points() -> u32 { 3 }
fn default_activity_points() -> u32 { 2 }
fn default_budget_points() -> u32 { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    pub alternatives: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with RUMBO_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with RUMBO_)
            // e.g., RUMBO_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RUMBO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RUMBO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
