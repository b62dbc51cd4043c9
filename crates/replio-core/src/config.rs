// Rust guideline compliant 2026-10-16

//! Configuration management for Replio.

use crate::options::SerializationOptions;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration shared by every builder created from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether builders validate the status and headers before sending.
    #[serde(default)]
    pub strict: bool,

    /// Formatting applied to response bodies.
    #[serde(default)]
    pub serialization: SerializationOptions,
}

impl Config {
    /// Loads configuration from a file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if it exists
    /// 3. Environment variables with `REPLIO_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - An environment variable or value fails validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `REPLIO_PRETTY_PRINT` - Pretty-print bodies (true/false)
    /// - `REPLIO_ESCAPE_SLASHES` - Escape `/` (true/false)
    /// - `REPLIO_ESCAPE_UNICODE` - Escape non-ASCII characters (true/false)
    /// - `REPLIO_MAX_DEPTH` - Maximum nesting depth (positive number)
    /// - `REPLIO_STRICT` - Validate status and headers (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(val) = env_bool("REPLIO_PRETTY_PRINT")? {
            self.serialization.pretty_print = val;
        }

        if let Some(val) = env_bool("REPLIO_ESCAPE_SLASHES")? {
            self.serialization.escape_slashes = val;
        }

        if let Some(val) = env_bool("REPLIO_ESCAPE_UNICODE")? {
            self.serialization.escape_unicode = val;
        }

        if let Ok(val) = std::env::var("REPLIO_MAX_DEPTH") {
            self.serialization.max_depth = val.parse().map_err(|_| {
                Error::InvalidConfig("REPLIO_MAX_DEPTH must be a positive number".to_string())
            })?;
        }

        if let Some(val) = env_bool("REPLIO_STRICT")? {
            self.strict = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_depth` is zero.
    fn validate(&self) -> Result<()> {
        if self.serialization.max_depth == 0 {
            return Err(Error::InvalidConfig(
                "max_depth must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Serialization fails
    /// - The file cannot be created or written
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn env_bool(name: &str) -> Result<Option<bool>> {
    match std::env::var(name) {
        Ok(val) => val
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidConfig(format!("{name} must be true or false"))),
        Err(_) => Ok(None),
    }
}
