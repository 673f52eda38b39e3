use super::*;

fn sq(x: u8, y: u8) -> Square {
    Square::new(x, y).unwrap()
}

fn state_from(layout: &str, side: Player) -> GameState {
    GameState::from_board(Board::from_layout(layout).unwrap(), side, RulesConfig::default())
}

// Player 1 pawn on b7 (id 0) linked to a runner on c6 (id 1).
const PROMOTION_LAYOUT: &str = "......./.R...../..P..../......./.....p./.....p./......./.......";

#[test]
fn new_game_starts_with_player_one_and_full_budget() {
    let state = GameState::default();
    assert_eq!(state.side_to_move(), Player::One);
    assert_eq!(state.rotation_chances(), ROTATION_CHANCES);
    assert_eq!(state.scores(), [0, 0]);
    assert_eq!(state.outcome(), None);
    assert_eq!(state.rules().win_threshold, 5);
}

#[test]
fn start_position_has_234_moves_per_side() {
    let state = GameState::default();
    let moves = state.legal_moves();
    assert_eq!(moves.len(), 234);
    assert!(moves.windows(2).all(|w| w[0].piece <= w[1].piece));
    assert_eq!(state.mobility(Player::One), 234);
    assert_eq!(state.mobility(Player::Two), 234);
    assert_eq!(state.as_turn_of(Player::Two).legal_moves().len(), 234);
}

#[test]
fn opponent_pieces_cannot_be_selected() {
    let state = GameState::default();
    assert_eq!(
        state.check_selectable(PieceId(14)).unwrap_err(),
        RuleError::InvalidSelection {
            piece: PieceId(14),
            reason: SelectionIssue::NotOwned
        }
    );
}

#[test]
fn moved_piece_is_blocked_until_the_turn_ends() {
    let mut state = GameState::default();
    let pawn = state.board().id_at(sq(0, 6)).unwrap();
    let outcome = state.apply_move(Move::new(pawn, sq(0, 5))).unwrap();
    assert_eq!(outcome.access, Access::Move);
    assert_eq!(outcome.partner, None);
    assert!(state.board().piece(pawn).unwrap().blocked);
    assert_eq!(
        state.check_selectable(pawn).unwrap_err(),
        RuleError::InvalidSelection {
            piece: pawn,
            reason: SelectionIssue::Blocked
        }
    );
    assert!(state.legal_moves().iter().all(|m| m.piece != pawn));

    state.end_turn();
    assert_eq!(state.side_to_move(), Player::Two);
    assert_eq!(state.plies(), 1);
    assert!(!state.board().piece(pawn).unwrap().blocked);
}

#[test]
fn illegal_destination_is_rejected_without_change() {
    let mut state = GameState::default();
    let before = state.clone();
    let pawn = state.board().id_at(sq(0, 6)).unwrap();
    let err = state.apply_move(Move::new(pawn, sq(0, 3))).unwrap_err();
    assert_eq!(
        err,
        RuleError::IllegalDestination {
            piece: pawn,
            square: sq(0, 3)
        }
    );
    assert_eq!(state, before);
}

#[test]
fn friendly_swap_blocks_both_pieces() {
    let mut state = GameState::default();
    let pawn = state.board().id_at(sq(0, 6)).unwrap();
    let trident = state.board().id_at(sq(1, 7)).unwrap();
    let outcome = state.apply_move(Move::new(pawn, sq(1, 7))).unwrap();
    assert_eq!(outcome.access, Access::Swap);
    assert_eq!(outcome.partner, Some(trident));
    assert_eq!(state.board().id_at(sq(0, 6)), Some(trident));
    assert!(state.board().piece(trident).unwrap().blocked);
    assert!(state.board().piece(pawn).unwrap().blocked);
}

#[test]
fn enemy_swap_only_blocks_the_mover() {
    let mut state = state_from("......./......./......./......./......./...x.../...P.../.......", Player::One);
    let outcome = state.apply_move(Move::new(PieceId(1), sq(3, 5))).unwrap();
    assert_eq!(outcome.partner, Some(PieceId(0)));
    assert!(state.board().piece(PieceId(1)).unwrap().blocked);
    assert!(!state.board().piece(PieceId(0)).unwrap().blocked);
    assert_eq!(state.board().piece(PieceId(0)).unwrap().square, sq(3, 6));
}

#[test]
fn promotion_removes_the_pawn_and_scores_one_point() {
    let mut state = state_from(PROMOTION_LAYOUT, Player::One);
    let outcome = state.apply_move(Move::new(PieceId(0), sq(2, 0))).unwrap();
    assert_eq!(
        outcome.promotions,
        vec![Promotion {
            piece: PieceId(0),
            player: Player::One,
            square: sq(2, 0)
        }]
    );
    assert_eq!(state.scores(), [1, 0]);
    assert!(state.board().piece(PieceId(0)).is_none());
    assert!(state.board().is_empty(sq(2, 0)));
    assert_eq!(state.board().count(Player::One), 1);
    assert_eq!(outcome.outcome, None);
    assert!(state.board().is_consistent());
}

#[test]
fn reaching_the_threshold_wins_immediately() {
    let mut state = state_from(PROMOTION_LAYOUT, Player::One).with_scores([4, 0]);
    let outcome = state.apply_move(Move::new(PieceId(0), sq(2, 0))).unwrap();
    assert_eq!(outcome.outcome, Some(Outcome::Winner(Player::One)));
    assert!(state.is_game_over());
    assert!(state.legal_moves().is_empty());
    assert_eq!(state.check_selectable(PieceId(1)).unwrap_err(), RuleError::GameOver);
}

#[test]
fn custom_threshold_is_honoured() {
    let rules = RulesConfig { win_threshold: 6 };
    let board = Board::from_layout(PROMOTION_LAYOUT).unwrap();
    let mut state = GameState::from_board(board, Player::One, rules).with_scores([4, 0]);
    state.apply_move(Move::new(PieceId(0), sq(2, 0))).unwrap();
    assert_eq!(state.scores(), [5, 0]);
    assert!(!state.is_game_over());
}

#[test]
fn both_players_at_threshold_is_a_draw() {
    let state = GameState::default().with_scores([5, 5]);
    assert_eq!(state.outcome(), Some(Outcome::Draw));
}

#[test]
fn swap_partner_promotes_for_its_owner() {
    // Runner on d8 (id 0) swaps with the pawn on e7 (id 2) via the jumper.
    let mut state = state_from("...PN../....L../......./......./......./......./......./.......", Player::One);
    let outcome = state.apply_move(Move::new(PieceId(0), sq(4, 1))).unwrap();
    assert_eq!(outcome.partner, Some(PieceId(2)));
    assert_eq!(outcome.promotions.len(), 1);
    assert_eq!(outcome.promotions[0].piece, PieceId(2));
    assert_eq!(state.scores(), [1, 0]);
}

#[test]
fn enemy_partner_promotion_scores_for_the_enemy() {
    let mut state = state_from("......./......./......./......./......./......./...r.../...P...", Player::One);
    let outcome = state.apply_move(Move::new(PieceId(1), sq(3, 6))).unwrap();
    assert_eq!(
        outcome.promotions,
        vec![Promotion {
            piece: PieceId(0),
            player: Player::Two,
            square: sq(3, 7)
        }]
    );
    assert_eq!(state.scores(), [0, 1]);
}

#[test]
fn rotation_spends_a_chance_and_locks_the_piece() {
    let mut state = GameState::default();
    let runner = PieceId(0);
    state.apply_rotation(Rotate::new(runner, 1)).unwrap();
    assert_eq!(state.rotation_chances(), 1);
    let piece = state.board().piece(runner).unwrap();
    assert_eq!(piece.rotation.degrees(), 270);
    assert!(piece.rotated_this_turn);

    assert_eq!(
        state.check_selectable(runner).unwrap_err(),
        RuleError::InvalidSelection {
            piece: runner,
            reason: SelectionIssue::RotatedThisTurn
        }
    );
    assert_eq!(
        state.apply_rotation(Rotate::new(runner, 1)).unwrap_err(),
        RuleError::IllegalRotation {
            piece: runner,
            reason: RotationIssue::AlreadyRotated
        }
    );
}

#[test]
fn rotation_rejections() {
    let mut state = GameState::default();
    let pawn = state.board().id_at(sq(0, 6)).unwrap();
    let issue = |r: RuleResult<()>| match r {
        Err(RuleError::IllegalRotation { reason, .. }) => reason,
        other => panic!("unexpected {other:?}"),
    };
    assert_eq!(issue(state.apply_rotation(Rotate::new(pawn, 1))), RotationIssue::NotRotatable);
    assert_eq!(issue(state.apply_rotation(Rotate::new(PieceId(14), 1))), RotationIssue::NotOwned);
    assert_eq!(issue(state.apply_rotation(Rotate::new(PieceId(1), 0))), RotationIssue::NoSteps);

    state.apply_rotation(Rotate::new(PieceId(1), 1)).unwrap();
    state.apply_rotation(Rotate::new(PieceId(2), 2)).unwrap();
    assert_eq!(state.rotation_chances(), 0);
    assert_eq!(issue(state.apply_rotation(Rotate::new(PieceId(3), 1))), RotationIssue::NoChancesLeft);
}

#[test]
fn rotated_flag_clears_at_the_owners_next_turn() {
    let mut state = GameState::default();
    state.apply_rotation(Rotate::new(PieceId(0), 1)).unwrap();
    state.end_turn();
    assert_eq!(state.rotation_chances(), ROTATION_CHANCES);
    assert!(state.board().piece(PieceId(0)).unwrap().rotated_this_turn);
    state.end_turn();
    assert!(!state.board().piece(PieceId(0)).unwrap().rotated_this_turn);
}

#[test]
fn pass_is_only_allowed_without_moves() {
    let mut state = GameState::default();
    assert_eq!(state.pass_turn().unwrap_err(), RuleError::PassNotAllowed);

    let mut stuck = state_from("......./......./......./......./......./......./...P.../......p", Player::One);
    assert!(!stuck.has_legal_move());
    stuck.pass_turn().unwrap();
    assert_eq!(stuck.side_to_move(), Player::Two);
    assert_eq!(stuck.plies(), 1);
}

#[test]
fn apply_action_runs_rotations_then_move_then_hands_over() {
    let mut state = GameState::default();
    let pawn = state.board().id_at(sq(0, 6)).unwrap();
    let action = Action::with_rotations(vec![Rotate::new(PieceId(3), 2)], Move::new(pawn, sq(0, 5)));
    let outcome = state.apply_action(&action).unwrap();
    assert_eq!(outcome.access, Access::Move);
    assert_eq!(state.side_to_move(), Player::Two);
    assert_eq!(state.rotation_chances(), ROTATION_CHANCES);
    assert_eq!(state.board().piece(PieceId(3)).unwrap().rotation.degrees(), 180);
}

#[test]
fn as_turn_of_gives_a_fresh_turn_to_the_other_player() {
    let mut state = GameState::default();
    state.apply_rotation(Rotate::new(PieceId(0), 1)).unwrap();
    let hint = state.as_turn_of(Player::Two);
    assert_eq!(hint.side_to_move(), Player::Two);
    assert_eq!(hint.rotation_chances(), ROTATION_CHANCES);
    assert_eq!(state.side_to_move(), Player::One);
    assert_eq!(state.as_turn_of(Player::One), state);
}

#[test]
fn full_turn_rotation_spends_a_chance() {
    let mut state = GameState::default();
    state.apply_rotation(Rotate::new(PieceId(1), 4)).unwrap();
    let runner = state.board().piece(PieceId(1)).unwrap();
    assert_eq!(runner.rotation, Rotation::ZERO);
    assert!(runner.rotated_this_turn);
    assert_eq!(state.rotation_chances(), ROTATION_CHANCES - 1);
}
