//! Gyroad rules core.
//!
//! Two players, a 7×8 board, seven rotating piece kinds and the chain rule:
//! a piece only reaches squares through friendly pieces standing on each
//! other's candidate squares. Pawns that reach the far row score a point;
//! the first player to the win threshold takes the game.

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notation;
pub mod path;
pub mod perft;
pub mod resolver;
pub mod squareset;
pub mod state;
pub mod time_control;
pub mod turn;
pub mod types;
pub mod zobrist;

pub use board::*;
pub use catalog::{candidate_offsets, candidate_squares, rotate_offset};
pub use config::RulesConfig;
pub use error::*;
pub use notation::*;
pub use path::{find_path, find_path_in};
pub use perft::{divide, perft};
pub use resolver::{Access, Layer, Reach, resolve, resolve_layers};
pub use squareset::SquareSet;
pub use state::*;
pub use time_control::*;
pub use turn::*;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait, implemented by every automated opponent
// =============================================================================

/// Result of a search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best action found (None if the side to move has no legal action)
    pub best_action: Option<Action>,
    /// Evaluation from the searching side's perspective
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether the search was cut short by the deadline
    pub stopped: bool,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self {
            best_action: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Trait that all engines implement.
///
/// Engines only read the state they are given; the caller applies the
/// chosen action through [`TurnEngine::play_action`].
pub trait Engine: Send {
    /// Search for the side to move of `state` within `limits`.
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult;

    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "Gyroad"
    }

    /// Reset internal state for a new game (clear hash tables, etc.)
    fn new_game(&mut self) {}

    /// Set a named option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
