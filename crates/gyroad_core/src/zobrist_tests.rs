use super::*;
use crate::types::Square;
use crate::{GameState, Move, PieceId, RulesConfig};

#[test]
fn keys_are_distinct() {
    let a = ZOBRIST.piece_key(0, 0, 0);
    let b = ZOBRIST.piece_key(0, 0, 1);
    let c = ZOBRIST.piece_key(1, 0, 0);
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(ZOBRIST.side_to_move, 0);
    assert_ne!(ZOBRIST.score_key(Player::One, 1), ZOBRIST.score_key(Player::Two, 1));
}

#[test]
fn hash_is_stable_for_equal_states() {
    let a = GameState::default();
    let b = GameState::default();
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn hash_tracks_moves_and_side_to_move() {
    let start = GameState::default();
    let pawn = start.board().id_at(Square::new(0, 6).unwrap()).unwrap();
    let mut next = start.clone();
    next.apply_move(Move::new(pawn, Square::new(0, 5).unwrap())).unwrap();
    assert_ne!(start.hash(), next.hash());

    let mut flipped = start.clone();
    flipped.end_turn();
    assert_ne!(start.hash(), flipped.hash());
}

#[test]
fn hash_distinguishes_rotation() {
    let start = GameState::default();
    let mut rotated = start.clone();
    rotated
        .apply_rotation(crate::Rotate::new(PieceId(0), 1))
        .unwrap();
    assert_ne!(start.hash(), rotated.hash());
}

#[test]
fn scores_past_the_table_hash_apart() {
    let keys: Vec<u64> = (0..64).map(|s| ZOBRIST.score_key(Player::One, s)).collect();
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(ZOBRIST.score_key(Player::One, 40), ZOBRIST.score_key(Player::Two, 40));

    let rules = RulesConfig { win_threshold: 20 };
    let fifteen = GameState::new(rules).with_scores([15, 0]);
    let sixteen = GameState::new(rules).with_scores([16, 0]);
    let seventeen = GameState::new(rules).with_scores([17, 0]);
    assert_ne!(fifteen.hash(), sixteen.hash());
    assert_ne!(sixteen.hash(), seventeen.hash());
    assert_ne!(fifteen.hash(), seventeen.hash());
}
