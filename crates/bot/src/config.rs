//! Bot configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default search depth for a bot's first hop.
pub const DEFAULT_SEARCH_DEPTH: u8 = 4;
/// Default search depth for capture-chain continuations.
pub const DEFAULT_CHAIN_DEPTH: u8 = 3;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read bot config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse bot config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Search settings shared by every difficulty.
///
/// Only the hard bot searches; the others ignore the depths. `seed`
/// makes the easy bot reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Plies searched when choosing the first hop, counting the hop itself
    pub search_depth: u8,
    /// Plies searched for each further hop of a capture chain
    pub chain_depth: u8,
    /// Fixed random seed for the easy bot (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            chain_depth: DEFAULT_CHAIN_DEPTH,
            seed: None,
        }
    }
}

impl BotConfig {
    /// Config with the first-hop depth overridden, if given.
    pub fn with_depth(depth: Option<u8>) -> Self {
        let mut config = Self::default();
        if let Some(d) = depth {
            config.search_depth = d;
        }
        config
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Depth for the first hop; never below one ply.
    pub fn first_hop_depth(&self) -> u8 {
        self.search_depth.max(1)
    }

    /// Depth for chain continuations; never below one ply.
    pub fn continuation_depth(&self) -> u8 {
        self.chain_depth.max(1)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
