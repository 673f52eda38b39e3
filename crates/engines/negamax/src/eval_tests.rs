use super::*;
use gyroad_core::{Board, Move, Player, RulesConfig, Square};

#[test]
fn start_position_is_balanced() {
    let state = GameState::default();
    let weights = EvalWeights::default();
    assert_eq!(evaluate(&state, &weights), 0);
    assert_eq!(evaluate(&state.as_turn_of(Player::Two), &weights), 0);
}

#[test]
fn score_lead_dominates() {
    let weights = EvalWeights::default();
    let state = GameState::default().with_scores([1, 0]);
    let v = evaluate(&state, &weights);
    assert!(v >= weights.score / 2);
    assert_eq!(evaluate(&state.as_turn_of(Player::Two), &weights), -v);
}

#[test]
fn decided_games_use_the_win_score() {
    let weights = EvalWeights::default();
    let board = Board::from_layout("......./.R...../..P..../......./.....p./.....p./......./.......").unwrap();
    let mut state = GameState::from_board(board, Player::One, RulesConfig::default()).with_scores([4, 0]);
    state.apply_move(Move::new(gyroad_core::PieceId(0), Square::new(2, 0).unwrap())).unwrap();
    assert_eq!(evaluate(&state, &weights), WIN_SCORE);
    state.end_turn();
    assert_eq!(evaluate_at(&state, &weights, 3), -(WIN_SCORE - 3));
}

#[test]
fn centrality_peaks_in_the_middle() {
    assert_eq!(centrality(3), 3);
    assert_eq!(centrality(0), 0);
    assert_eq!(centrality(6), 0);
    assert_eq!(centrality(2), centrality(4));
}
