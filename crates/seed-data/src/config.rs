//! Configuration for seeding runs.

use focusbuddy::ConfigError;
use serde::{Deserialize, Serialize};

use crate::fixture::Spelling;

/// Configuration for seeding operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Field spelling for the focus timer and summary documents.
    pub spelling: Spelling,

    /// Empty every seeded collection before writing. Off by default, so a
    /// second run duplicates the dataset.
    pub clear_first: bool,
}

impl SeedConfig {
    /// Reads `SEED_SPELLING` and `SEED_CLEAR_FIRST` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let spelling = match lookup("SEED_SPELLING") {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidValue("SEED_SPELLING".to_string(), e))?,
            None => Spelling::default(),
        };

        let clear_first = match lookup("SEED_CLEAR_FIRST") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "SEED_CLEAR_FIRST".to_string(),
                    format!("'{raw}' is not a boolean"),
                )
            })?,
            None => false,
        };

        Ok(Self {
            spelling,
            clear_first,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeedConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SeedConfig::default());
        assert_eq!(config.spelling, Spelling::Verbatim);
        assert!(!config.clear_first);
    }

    #[test]
    fn test_reads_values() {
        let config = SeedConfig::from_lookup(|key| match key {
            "SEED_SPELLING" => Some("corrected".to_string()),
            "SEED_CLEAR_FIRST" => Some("yes".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.spelling, Spelling::Corrected);
        assert!(config.clear_first);
    }

    #[test]
    fn test_rejects_bad_bool() {
        let err = SeedConfig::from_lookup(|key| {
            (key == "SEED_CLEAR_FIRST").then(|| "maybe".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key, _) if key == "SEED_CLEAR_FIRST"));
    }
}
