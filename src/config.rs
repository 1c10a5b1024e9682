use crate::manager::DEFAULT_PRIORITY_THRESHOLD;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tracker settings read from an optional TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Inclusive upper score bound of the urgent band
    pub priority_threshold: f64,
    /// Pin "today" instead of reading the system clock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            priority_threshold: DEFAULT_PRIORITY_THRESHOLD,
            today: None,
            log_filter: None,
        }
    }
}

impl TrackerConfig {
    /// Load the config, falling back to defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: TrackerConfig = toml::from_str(content)?;
        if !(1.0..=3.0).contains(&config.priority_threshold) {
            anyhow::bail!(
                "priority_threshold must be between 1.0 and 3.0, got {}",
                config.priority_threshold
            );
        }
        Ok(config)
    }
}
