//! Arena for Gyroad engines.
//!
//! - Plays matches between engines with alternating sides
//! - Records every game (actions, plies, final scores)
//! - Loads rules, search and match settings from TOML
//!
//! # Usage
//!
//! ```bash
//! # Search engine against the random baseline
//! cargo run -p arena -- match search random --games 10
//!
//! # Suggest an action for player 2 after two turns
//! cargo run -p arena -- hint --player 2 --moves "a2a3; g7g6"
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;

use gyroad_core::Engine;
use negamax_engine::{NegamaxEngine, SearchConfig};
use random_engine::RandomEngine;

/// Build an engine from its command line name (`search` or `random`).
///
/// `random:<seed>` gives a reproducible random engine.
pub fn create_engine(text: &str, search: &SearchConfig) -> Result<Box<dyn Engine>, ArenaError> {
    let (name, arg) = match text.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (text, None),
    };
    match (name.to_lowercase().as_str(), arg) {
        ("search" | "negamax", None) => Ok(Box::new(NegamaxEngine::with_config(search.clone()))),
        ("random", None) => Ok(Box::new(RandomEngine::new())),
        ("random", Some(seed)) => {
            let seed = seed
                .parse()
                .map_err(|_| ArenaError::UnknownEngine(text.to_string()))?;
            Ok(Box::new(RandomEngine::seeded(seed)))
        }
        _ => Err(ArenaError::UnknownEngine(text.to_string())),
    }
}
