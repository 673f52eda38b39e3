use super::*;
use gyroad_core::{Board, Player, RulesConfig, Square};

fn state_from(layout: &str) -> GameState {
    GameState::from_board(Board::from_layout(layout).unwrap(), Player::One, RulesConfig::default())
}

#[test]
fn plan_set_follows_the_candidates() {
    assert_eq!(rotation_plans(&[]), vec![Vec::<Rotate>::new()]);

    let one = [RotationCandidate { piece: PieceId(4), delta: 3 }];
    assert_eq!(rotation_plans(&one).len(), 3);

    let two = [
        RotationCandidate { piece: PieceId(4), delta: 3 },
        RotationCandidate { piece: PieceId(2), delta: 1 },
    ];
    let plans = rotation_plans(&two);
    assert_eq!(plans.len(), 5);
    assert_eq!(plans[2], vec![Rotate::new(PieceId(4), 2)]);
    assert_eq!(plans[4], vec![Rotate::new(PieceId(4), 1), Rotate::new(PieceId(2), 1)]);
}

#[test]
fn rotation_candidates_only_include_rotatable_own_pieces() {
    let state = GameState::default();
    let candidates = rotation_candidates(&state, 10);
    assert_eq!(candidates.len(), 7);
    for c in &candidates {
        let piece = state.board().piece(c.piece).unwrap();
        assert_eq!(piece.player, Player::One);
        assert!(piece.kind.can_rotate());
    }
    assert!(candidates.windows(2).all(|w| w[0].delta >= w[1].delta));
    assert_eq!(rotation_candidates(&state, 2).len(), 2);
}

#[test]
fn promotion_is_ordered_first() {
    let state = state_from("......./.R...../..P..../......./.....p./.....p./......./.......");
    let promote = Move::new(PieceId(0), Square::new(2, 0).unwrap());
    let other = Move::new(PieceId(0), Square::new(3, 2).unwrap());
    assert!(move_heuristic(&state, promote) > move_heuristic(&state, other));

    let actions = candidate_actions(&state, &SearchConfig::default());
    assert_eq!(actions[0], Action::new(promote));
}

#[test]
fn enemy_swap_beats_a_quiet_move() {
    let state = state_from("......./......./......./...x.../......./...P.../...P.../.......");
    let swap = Move::new(PieceId(2), Square::new(3, 3).unwrap());
    let quiet = Move::new(PieceId(2), Square::new(3, 4).unwrap());
    assert!(move_heuristic(&state, swap) > move_heuristic(&state, quiet));
}

#[test]
fn beam_bounds_moves_per_plan() {
    let state = GameState::default();
    let config = SearchConfig {
        beam_width: 3,
        ..SearchConfig::default()
    };
    let actions = candidate_actions(&state, &config);
    assert_eq!(actions.len(), 5 * 3);
    for action in &actions {
        let mut sim = state.clone();
        assert!(sim.apply_action(action).is_ok(), "{action:?}");
    }
}
