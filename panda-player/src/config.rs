//! Agent configuration.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Plies searched below each candidate move.
pub const DEFAULT_DEPTH: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Plies searched below the opponent's reply to each candidate move.
    pub depth: u32,
    /// Seed for the fallback move picker; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display(fmt = "cannot read config: {}", _0)]
    Io(io::Error),
    #[display(fmt = "cannot parse config: {}", _0)]
    Json(serde_json::Error),
}

impl AgentConfig {
    /// Parse a config from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
