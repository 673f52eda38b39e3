use serde::{Deserialize, Serialize};

use gyroad_core::Kind;

/// Search strength and speed settings. None of them affect rule
/// correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub time_budget_ms: u64,
    pub max_depth: u8,
    /// Children kept per node after one-ply pre-scoring.
    pub beam_width: usize,
    /// Rotatable pieces considered when building rotation plans.
    pub rotation_candidate_count: usize,
    /// Transposition table entries kept before new positions are dropped.
    pub tt_capacity: usize,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: 1500,
            max_depth: 3,
            beam_width: 8,
            rotation_candidate_count: 2,
            tt_capacity: 1 << 16,
            weights: EvalWeights::default(),
        }
    }
}

/// Static evaluation weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per point of score difference.
    pub score: i32,
    /// Per piece on the board, indexed like `Kind::ALL`.
    pub piece_values: [i32; 7],
    /// Per row a pawn has advanced from the far edge.
    pub advance: i32,
    /// Per accessible square of difference in total mobility.
    pub mobility: i32,
    /// Per step of closeness to the centre file.
    pub centrality: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            score: 10_000,
            piece_values: [100, 100, 120, 140, 150, 140, 160],
            advance: 40,
            mobility: 2,
            centrality: 3,
        }
    }
}

impl EvalWeights {
    pub fn piece_value(&self, kind: Kind) -> i32 {
        self.piece_values[kind.idx()]
    }
}
