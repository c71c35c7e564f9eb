//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and asset paths are not here; they come from
//! `[package.metadata.leptos]` through `leptos::config::get_configuration`.

use thiserror::Error;
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid LOG_LEVEL `{0}`, expected one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
    #[error("invalid ENABLE_COMPRESSION `{0}`, expected a boolean")]
    InvalidBool(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum tracing level (`LOG_LEVEL`, default `info`)
    pub log_level: Level,

    /// Whether responses are brotli/gzip compressed (`ENABLE_COMPRESSION`, default on)
    pub enable_compression: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            enable_compression: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset or blank
    /// keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_level = match get("LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(raw))?,
            None => defaults.log_level,
        };

        let enable_compression = match get("ENABLE_COMPRESSION") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool(raw))?,
            None => defaults.enable_compression,
        };

        Ok(Self {
            log_level,
            enable_compression,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.enable_compression);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup(&[
            ("LOG_LEVEL", "debug"),
            ("ENABLE_COMPRESSION", "off"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, Level::DEBUG);
        assert!(!config.enable_compression);
    }

    #[test]
    fn test_config_blank_values_use_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("LOG_LEVEL", "   "),
            ("ENABLE_COMPRESSION", ""),
        ]))
        .unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_log_level_is_case_insensitive() {
        let config = Config::from_lookup(lookup(&[("LOG_LEVEL", " WARN ")])).unwrap();
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_config_rejects_bad_log_level() {
        let err = Config::from_lookup(lookup(&[("LOG_LEVEL", "loud")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogLevel("loud".to_string()));
    }

    #[test]
    fn test_config_rejects_bad_bool() {
        let err = Config::from_lookup(lookup(&[("ENABLE_COMPRESSION", "maybe")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBool("maybe".to_string()));
        assert!(err.to_string().contains("ENABLE_COMPRESSION"));
    }

    #[test]
    fn test_parse_bool_variants() {
        for raw in ["1", "true", "YES", "On"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "false", "No", "OFF"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
    }
}
