//! Negamax opponent for Gyroad.
//!
//! Iterative deepening with alpha-beta pruning, a Zobrist transposition
//! table and beam pruning. Each node considers a handful of rotation plans
//! per turn before the move itself.

pub mod background;
pub mod config;
pub mod eval;
pub mod ordering;
pub mod search;
pub mod tt;

use std::time::Duration;

use gyroad_core::{Action, Engine, GameState, Player, SearchLimits, SearchResult};
use tracing::{info, warn};

pub use background::SearchTask;
pub use config::{EvalWeights, SearchConfig};
pub use eval::{WIN_BOUND, WIN_SCORE, evaluate};
use search::Searcher;
use tt::TranspositionTable;

/// Negamax engine with a transposition table kept across searches.
#[derive(Debug, Clone)]
pub struct NegamaxEngine {
    config: SearchConfig,
    tt: TranspositionTable,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        let tt = TranspositionTable::new(config.tt_capacity);
        Self { config, tt }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Positions currently held in the transposition table.
    pub fn tt_entries(&self) -> usize {
        self.tt.len()
    }

    /// Limits built from the configured depth and time budget.
    pub fn default_limits(&self) -> SearchLimits {
        SearchLimits::from_budget_ms(self.config.max_depth, self.config.time_budget_ms)
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for NegamaxEngine {
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult {
        limits.start();
        let mut searcher = Searcher::new(&self.config, &mut self.tt, &limits.time_control);
        let outcome = searcher.search_root(state, limits.depth);
        let nodes = searcher.nodes();

        SearchResult {
            score: outcome.best.as_ref().map_or(0, |(_, s)| *s),
            best_action: outcome.best.map(|(action, _)| action),
            depth: outcome.depth,
            nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Gyroad Negamax"
    }

    fn new_game(&mut self) {
        self.tt.clear();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        let parsed = match name {
            "MaxDepth" => value.parse().map(|v| self.config.max_depth = v).is_ok(),
            "TimeBudgetMs" => value.parse().map(|v| self.config.time_budget_ms = v).is_ok(),
            "BeamWidth" => value.parse().map(|v| self.config.beam_width = v).is_ok(),
            "RotationCandidates" => value
                .parse()
                .map(|v| self.config.rotation_candidate_count = v)
                .is_ok(),
            _ => return false,
        };
        if parsed {
            // Stored values were searched under the old settings.
            self.tt.clear();
        } else {
            warn!(option = name, value, "ignoring unparsable option value");
        }
        parsed
    }
}

/// Pick an action for `player` from `state` within `time_budget`.
///
/// `player` does not have to be the side to move: the search runs on a copy
/// of the state handed to `player` with a fresh turn, which lets a caller ask
/// for a hint for either side. Returns None when `player` has no legal move
/// or the game is already decided.
pub fn choose_action(
    state: &GameState,
    player: Player,
    time_budget: Duration,
    max_depth: u8,
    config: &SearchConfig,
) -> Option<Action> {
    if state.is_game_over() {
        return None;
    }
    let view = state.as_turn_of(player);
    let mut engine = NegamaxEngine::with_config(config.clone());
    let result = engine.search(&view, SearchLimits::depth_and_time(max_depth, time_budget));
    info!(
        player = %player,
        depth = result.depth,
        score = result.score,
        nodes = result.nodes,
        stopped = result.stopped,
        "chose action"
    );
    result.best_action
}
