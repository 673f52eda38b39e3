//! Arena configuration file.

use std::path::Path;

use gyroad_core::RulesConfig;
use negamax_engine::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::ArenaError;
use crate::match_runner::MatchConfig;

/// Everything the `arena` binary reads from its TOML file. Missing
/// sections and keys fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub rules: RulesConfig,
    pub search: SearchConfig,
    pub matches: MatchConfig,
}

impl ArenaConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ArenaError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let text = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
