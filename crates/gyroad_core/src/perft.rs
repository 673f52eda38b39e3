use crate::state::{GameState, Move};

/// Count move/swap sequences of `depth` turns, rotations excluded.
/// A player without moves passes, which counts as a single line.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 || state.is_game_over() {
        return 1;
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        let mut next = state.clone();
        next.end_turn();
        return perft(&next, depth - 1);
    }

    moves
        .into_iter()
        .filter_map(|mv| child(state, mv))
        .map(|next| perft(&next, depth - 1))
        .sum()
}

/// Per-root-move node counts, in legal move order.
pub fn divide(state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    state
        .legal_moves()
        .into_iter()
        .filter_map(|mv| child(state, mv).map(|next| (mv, perft(&next, depth - 1))))
        .collect()
}

fn child(state: &GameState, mv: Move) -> Option<GameState> {
    let mut next = state.clone();
    next.apply_move(mv).ok()?;
    next.end_turn();
    Some(next)
}
