//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Server address and asset paths come from Leptos' own configuration.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Refuse to start when the product record fails validation
    /// Variable: CATALOG_STRICT (default: true)
    pub strict_catalog: bool,

    /// Compress responses with brotli/gzip
    /// Variable: COMPRESSION (default: true)
    pub compression: bool,
}

/// Malformed configuration values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false/1/0/yes/no), got '{value}'")]
    InvalidBool { name: &'static str, value: String },
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let strict_catalog = match lookup("CATALOG_STRICT") {
            Some(value) => parse_bool("CATALOG_STRICT", &value)?,
            None => defaults.strict_catalog,
        };

        let compression = match lookup("COMPRESSION") {
            Some(value) => parse_bool("COMPRESSION", &value)?,
            None => defaults.compression,
        };

        Ok(Self {
            strict_catalog,
            compression,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_catalog: true,
            compression: true,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.strict_catalog);
        assert!(config.compression);
    }

    #[test]
    fn test_all_fields_set() {
        let config = Config::from_lookup(lookup(&[
            ("CATALOG_STRICT", "false"),
            ("COMPRESSION", "0"),
        ]))
        .unwrap();

        assert!(!config.strict_catalog);
        assert!(!config.compression);
    }

    #[test]
    fn test_bool_spellings() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_bool("X", value), Ok(true), "{}", value);
        }
        for value in ["0", "false", "No", "off"] {
            assert_eq!(parse_bool("X", value), Ok(false), "{}", value);
        }
    }

    #[test]
    fn test_invalid_bool() {
        let err = Config::from_lookup(lookup(&[("COMPRESSION", "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                name: "COMPRESSION",
                value: "maybe".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "COMPRESSION must be a boolean (true/false/1/0/yes/no), got 'maybe'"
        );
    }
}
