//! Configuration file loading
//!
//! Every table and field is optional:
//!
//! ```toml
//! [generator]
//! pool = "ABCDEFGHIJKLMNOPRSTUVWY"
//! max_attempts = 200
//!
//! [rules]
//! allow_letter_reuse = false
//!
//! [oracle]
//! timeout_ms = 5000
//! ```

use crate::dictionary::OracleConfig;
use crate::game::RulesConfig;
use crate::generator::GeneratorConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Everything a game needs besides the dictionary itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub generator: GeneratorConfig,
    pub rules: RulesConfig,
    pub oracle: OracleConfig,
}

impl GameConfig {
    /// Load a TOML config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(?config, "config loaded");
        Ok(config)
    }

    /// Parse a TOML config
    ///
    /// # Errors
    /// Returns `ConfigError` on malformed TOML, unknown keys, or settings no
    /// game could be played with.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.per_side == 0 {
            return Err(ConfigError::Invalid("generator.per_side must be at least 1"));
        }
        if self.generator.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "generator.max_attempts must be at least 1",
            ));
        }
        if self.rules.min_word_length == 0 {
            return Err(ConfigError::Invalid("rules.min_word_length must be at least 1"));
        }
        Ok(())
    }

    /// Load from `path` if given, defaults otherwise
    ///
    /// # Errors
    /// See [`GameConfig::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }
}
