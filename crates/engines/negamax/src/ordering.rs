//! Candidate generation: rotation plans and heuristic move ordering.
//!
//! The full action space (up to two rotations then a move) is too wide to
//! search, so each node only considers a handful of rotation plans built
//! from the rotatable pieces whose rotation changes their own reach the
//! most, and for every plan the `beam_width` best moves by a cheap
//! heuristic.

use std::cmp::Reverse;

use gyroad_core::{Action, GameState, Move, PieceId, Rotate};

use crate::config::SearchConfig;
use crate::eval::centrality;

const PROMOTION_BONUS: i32 = 10_000;
const ENEMY_SWAP_BONUS: i32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationCandidate {
    pub piece: PieceId,
    /// Reach change after a quarter turn plus after a half turn.
    pub delta: i32,
}

/// Rotatable pieces of the side to move ranked by mobility delta, best
/// `count` kept. Ties keep piece id order.
pub fn rotation_candidates(state: &GameState, count: usize) -> Vec<RotationCandidate> {
    let side = state.side_to_move();
    let mut ranked: Vec<RotationCandidate> = state
        .board()
        .pieces_of(side)
        .filter(|p| state.check_rotation(p.id).is_ok())
        .map(|p| {
            let base = state.reach(p.id).len() as i32;
            let delta = [1u8, 2]
                .into_iter()
                .filter_map(|steps| {
                    let mut sim = state.clone();
                    sim.apply_rotation(Rotate::new(p.id, steps)).ok()?;
                    Some(sim.reach(p.id).len() as i32 - base)
                })
                .sum();
            RotationCandidate { piece: p.id, delta }
        })
        .collect();
    ranked.sort_by_key(|c| Reverse(c.delta));
    ranked.truncate(count);
    ranked
}

/// The fixed plan set: no rotation, best ×1, best ×2, second ×1, best ×1
/// plus second ×1.
pub fn rotation_plans(candidates: &[RotationCandidate]) -> Vec<Vec<Rotate>> {
    let mut plans = vec![Vec::new()];
    if let Some(best) = candidates.first() {
        plans.push(vec![Rotate::new(best.piece, 1)]);
        plans.push(vec![Rotate::new(best.piece, 2)]);
        if let Some(second) = candidates.get(1) {
            plans.push(vec![Rotate::new(second.piece, 1)]);
            plans.push(vec![Rotate::new(best.piece, 1), Rotate::new(second.piece, 1)]);
        }
    }
    plans
}

/// Cheap ordering score: promotions first, enemy swaps next, then
/// centre files and forward progress.
pub fn move_heuristic(state: &GameState, mv: Move) -> i32 {
    let board = state.board();
    let Some(piece) = board.piece(mv.piece) else {
        return i32::MIN;
    };
    if piece.kind.promotes() && mv.to.y() == piece.player.promotion_row() {
        return PROMOTION_BONUS;
    }
    let mut score = 0;
    if let Some(occupant) = board.piece_at(mv.to)
        && occupant.player != piece.player
    {
        score += ENEMY_SWAP_BONUS;
    }
    score += 10 * centrality(mv.to.x());
    if piece.kind.promotes() {
        let before = piece.player.rows_to_promotion(piece.square.y()) as i32;
        let after = piece.player.rows_to_promotion(mv.to.y()) as i32;
        score += 20 * (before - after);
    }
    score
}

/// Candidate actions for the side to move: every plan, each with its best
/// `beam_width` moves. Plans that turn out illegal are skipped.
pub fn candidate_actions(state: &GameState, config: &SearchConfig) -> Vec<Action> {
    let candidates = rotation_candidates(state, config.rotation_candidate_count);
    let mut actions = Vec::new();

    for plan in rotation_plans(&candidates) {
        let mut sim = state.clone();
        if plan.iter().any(|&r| sim.apply_rotation(r).is_err()) {
            continue;
        }
        let mut moves: Vec<(i32, Move)> = sim
            .legal_moves()
            .into_iter()
            .map(|mv| (move_heuristic(&sim, mv), mv))
            .collect();
        moves.sort_by_key(|&(score, _)| Reverse(score));
        moves.truncate(config.beam_width.max(1));
        actions.extend(
            moves
                .into_iter()
                .map(|(_, mv)| Action::with_rotations(plan.clone(), mv)),
        );
    }
    actions
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
