use gyroad_core::{BOARD_HEIGHT, BOARD_WIDTH, GameState, Outcome, Piece};

use crate::config::EvalWeights;

/// Score of a decided game, before the distance adjustment.
pub const WIN_SCORE: i32 = 1_000_000;
/// Scores beyond this are decided games.
pub const WIN_BOUND: i32 = WIN_SCORE - 1_000;

/// Static evaluation from the side to move's perspective.
pub fn evaluate(state: &GameState, weights: &EvalWeights) -> i32 {
    evaluate_at(state, weights, 0)
}

/// Like [`evaluate`], preferring quicker wins and slower losses.
pub fn evaluate_at(state: &GameState, weights: &EvalWeights, ply: u32) -> i32 {
    let us = state.side_to_move();
    match state.outcome() {
        Some(Outcome::Winner(p)) if p == us => return WIN_SCORE - ply as i32,
        Some(Outcome::Winner(_)) => return -(WIN_SCORE - ply as i32),
        Some(Outcome::Draw) => return 0,
        None => {}
    }

    let them = us.other();
    let mut score = weights.score * (state.score(us) as i32 - state.score(them) as i32);

    for piece in state.board().pieces() {
        let value = piece_term(piece, weights);
        if piece.player == us {
            score += value;
        } else {
            score -= value;
        }
    }

    if weights.mobility != 0 {
        score += weights.mobility * (state.mobility(us) as i32 - state.mobility(them) as i32);
    }
    score
}

fn piece_term(piece: &Piece, weights: &EvalWeights) -> i32 {
    let mut value = weights.piece_value(piece.kind);
    if piece.kind.promotes() {
        let progress = (BOARD_HEIGHT - 1 - piece.player.rows_to_promotion(piece.square.y())) as i32;
        value += weights.advance * progress;
    }
    value + weights.centrality * centrality(piece.square.x())
}

/// 3 on the centre file, 0 on the edges.
pub fn centrality(x: u8) -> i32 {
    let centre = (BOARD_WIDTH / 2) as i32;
    centre - (x as i32 - centre).abs()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
