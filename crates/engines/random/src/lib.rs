//! Random Gyroad opponent.
//!
//! Picks a legal move uniformly at random, sometimes after spending a
//! rotation on a random piece. Any real engine should beat it easily.

use gyroad_core::{Action, Engine, GameState, Rotate, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};


/// Chance in percent of rotating a piece before moving.
const ROTATE_PERCENT: u32 = 25;

#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible games for tests and arena runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    fn random_rotation(&mut self, state: &GameState) -> Option<(Rotate, GameState)> {
        let rotatable: Vec<_> = state
            .board()
            .pieces_of(state.side_to_move())
            .filter(|p| state.check_rotation(p.id).is_ok())
            .map(|p| p.id)
            .collect();
        let &piece = rotatable.choose(&mut self.rng)?;
        let rotate = Rotate::new(piece, self.rng.gen_range(1..=3));
        let mut rotated = state.clone();
        rotated.apply_rotation(rotate).ok()?;
        Some((rotate, rotated))
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState, _limits: SearchLimits) -> SearchResult {
        self.nodes = 1;
        if state.is_game_over() {
            return SearchResult::empty();
        }

        let mut rotations = Vec::new();
        let mut moves = state.legal_moves();
        if self.rng.gen_ratio(ROTATE_PERCENT, 100)
            && let Some((rotate, rotated)) = self.random_rotation(state)
        {
            let after = rotated.legal_moves();
            if !after.is_empty() {
                rotations.push(rotate);
                moves = after;
            }
        }

        let best_action = moves
            .choose(&mut self.rng)
            .map(|&mv| Action::with_rotations(rotations, mv));

        SearchResult {
            best_action,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Gyroad Random"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
