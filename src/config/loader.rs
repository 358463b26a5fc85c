use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Narrowest terminal the sidebar layout is allowed to kick in at.
pub const MIN_WIDE_BREAKPOINT: u16 = 40;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `~/.config/mobifacil/config.toml` on Linux, the platform equivalent
    /// elsewhere, or `./mobifacil/config.toml` when there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("mobifacil").join("config.toml")
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Missing file → defaults. Unreadable, malformed or invalid → error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "timing.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.layout.wide_breakpoint < MIN_WIDE_BREAKPOINT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "layout.wide_breakpoint must be at least {} (got {})",
                    MIN_WIDE_BREAKPOINT, self.layout.wide_breakpoint
                ),
            });
        }

        Ok(())
    }
}
