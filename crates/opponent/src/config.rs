//! TOML configuration for an opponent.
//!
//! ```toml
//! tier = "hard"
//! side = "white"
//! seed = 7
//! instant = false
//! ```

use std::fs;
use std::path::Path;

use chess_core::Color;
use serde::{Deserialize, Serialize};
use tiered_engine::Tier;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    pub tier: Tier,
    /// Side the engine plays.
    pub side: Color,
    /// Fixed seed for reproducible games; entropy when absent.
    pub seed: Option<u64>,
    /// Skip the thinking delay.
    pub instant: bool,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            tier: Tier::Medium,
            side: Color::Black,
            seed: None,
            instant: false,
        }
    }
}

impl OpponentConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
