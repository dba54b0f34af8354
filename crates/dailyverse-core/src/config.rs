//! Configuration for poem acquisition

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Orchestrator and store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on a remote poem or news fetch, in milliseconds
    pub fetch_timeout_ms: u64,

    /// Upper bound on a generation call, in milliseconds
    pub generation_timeout_ms: u64,

    /// Max history entries kept (oldest evicted)
    pub history_capacity: usize,

    /// Max keywords reported by an analysis
    pub max_keywords: usize,

    /// Whether the daily chain may fall back to generation
    pub ai_fallback_enabled: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            fetch_timeout_ms: 10_000,
            generation_timeout_ms: 30_000,
            history_capacity: 365,
            max_keywords: 5,
            ai_fallback_enabled: true,
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_millis(self.generation_timeout_ms)
    }

    /// Load from a JSON file. Missing file means defaults; missing fields too.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
