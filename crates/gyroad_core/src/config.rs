use serde::{Deserialize, Serialize};

/// Tunable rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Points needed to win; reaching it ends the game at once.
    pub win_threshold: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self { win_threshold: 5 }
    }
}
