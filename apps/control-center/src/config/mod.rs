//! Configuration module for the control center.
//!
//! Loads YAML configuration with `${VAR}` / `${VAR:-default}` environment
//! interpolation and validates it before use. Every section has defaults, so
//! an empty file is a valid configuration.
//!
//! # Usage
//!
//! ```rust,ignore
//! use control_center::config::load_config;
//!
//! let config = load_config(Some("control-center.yaml"))?;
//! println!("watchlist size: {}", config.watchlist.max_entries);
//! ```

mod data_source;
mod observability;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use data_source::DataSourceConfig;
pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};

use crate::domain::watchlist::WatchlistConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Watchlist scoring constants.
    #[serde(default)]
    pub watchlist: WatchlistConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// External database configuration.
    #[serde(default)]
    pub data_source: DataSourceConfig,
}

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "control-center.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("control-center.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Unset or empty
/// variables without a default become empty strings.
#[allow(clippy::expect_used)] // constant pattern
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let w = &config.watchlist;

    let non_negative = [
        ("itm_base", w.itm_base),
        ("itm_distance_weight", w.itm_distance_weight),
        ("high_delta_threshold", w.high_delta_threshold),
        ("high_delta_base", w.high_delta_base),
        ("high_delta_weight", w.high_delta_weight),
        ("near_strike_pct", w.near_strike_pct),
        ("near_strike_base", w.near_strike_base),
        ("near_strike_weight", w.near_strike_weight),
        ("expiring_min_delta", w.expiring_min_delta),
        ("expiring_base", w.expiring_base),
        ("expiring_weight", w.expiring_weight),
    ];
    if let Some((name, _)) = non_negative.iter().find(|(_, v)| *v < Decimal::ZERO) {
        return Err(ConfigError::ValidationError(format!(
            "watchlist.{name} must not be negative"
        )));
    }

    if w.fallback_price_multiplier <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "watchlist.fallback_price_multiplier must be positive".to_string(),
        ));
    }

    if w.max_entries == 0 {
        return Err(ConfigError::ValidationError(
            "watchlist.max_entries must be at least 1".to_string(),
        ));
    }

    if config.observability.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must not be empty".to_string(),
        ));
    }

    if config.data_source.positions_query.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "data_source.positions_query must not be empty".to_string(),
        ));
    }

    if let Some(connection) = &config.data_source.connection
        && (connection.host.trim().is_empty() || connection.database.trim().is_empty())
    {
        return Err(ConfigError::ValidationError(
            "data_source.connection needs a host and a database".to_string(),
        ));
    }

    Ok(())
}
