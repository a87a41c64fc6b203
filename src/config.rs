//! Application configuration.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! reference behaviour: products load after 2000 ms, the terms modal appears after
//! 500 ms.
//!
//! ```toml
//! mailbox_capacity = 32
//! log_filter = "info"
//!
//! [timings]
//! load_delay_ms = 2000
//! modal_delay_ms = 500
//! ```
//!
//! Environment overrides: `WAITABLE_LOAD_DELAY_MS`, `WAITABLE_MODAL_DELAY_MS`,
//! `WAITABLE_LOG`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Mailbox capacity of the app actor. Must be non-zero.
    pub mailbox_capacity: usize,

    /// Default tracing filter, used when `RUST_LOG` is unset.
    pub log_filter: String,

    pub timings: Timings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            log_filter: "info".to_string(),
            timings: Timings::default(),
        }
    }
}

/// Simulated latencies, injected into the app actor at run time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub load_delay_ms: u64,
    pub modal_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            load_delay_ms: 2000,
            modal_delay_ms: 500,
        }
    }
}

impl Timings {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn modal_delay(&self) -> Duration {
        Duration::from_millis(self.modal_delay_ms)
    }
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file, then applies environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&raw)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, for running without a file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(v) = std::env::var("WAITABLE_LOAD_DELAY_MS") {
            self.timings.load_delay_ms = parse_millis("WAITABLE_LOAD_DELAY_MS", &v)?;
        }
        if let Ok(v) = std::env::var("WAITABLE_MODAL_DELAY_MS") {
            self.timings.modal_delay_ms = parse_millis("WAITABLE_MODAL_DELAY_MS", &v)?;
        }
        if let Ok(v) = std::env::var("WAITABLE_LOG") {
            self.log_filter = v;
        }
        Ok(())
    }

    /// Rejects values the app cannot start with. The fields are public, so a
    /// config built in code is checked again when the app starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: "mailbox_capacity".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_millis(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
