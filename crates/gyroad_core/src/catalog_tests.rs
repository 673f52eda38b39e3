use super::*;

fn sq(x: u8, y: u8) -> Square {
    Square::new(x, y).unwrap()
}

#[test]
fn runner_offsets_follow_the_owner_frame() {
    assert_eq!(
        candidate_offsets(Kind::Runner, Player::One, Rotation::ZERO),
        &[(0, -1), (0, -2), (-1, 0), (1, 0)]
    );
    assert_eq!(
        candidate_offsets(Kind::Runner, Player::Two, Rotation::ZERO),
        &[(0, 1), (0, 2), (1, 0), (-1, 0)]
    );
}

#[test]
fn pawn_right_steps_left_or_back_right() {
    assert_eq!(
        candidate_offsets(Kind::PawnRight, Player::One, Rotation::ZERO),
        &[(-1, 0), (1, 1)]
    );
    assert_eq!(
        candidate_offsets(Kind::PawnLeft, Player::One, Rotation::ZERO),
        &[(1, 0), (-1, 1)]
    );
}

#[test]
fn one_clockwise_step_turns_forward_to_the_right() {
    let turned = Rotation::ZERO.step();
    assert_eq!(
        candidate_offsets(Kind::Runner, Player::One, turned),
        &[(1, 0), (2, 0), (0, -1), (0, 1)]
    );
}

#[test]
fn rotate_offset_inverts() {
    for kind in Kind::ALL {
        for &dir in directions(kind) {
            for q in 0..4u8 {
                let v = to_board_offset(Player::Two, dir);
                assert_eq!(rotate_offset(rotate_offset(v, q), (4 - q) % 4), v);
            }
        }
    }
}

#[test]
fn four_steps_restore_the_pattern() {
    let mut r = Rotation::ZERO;
    for _ in 0..4 {
        r = r.step();
    }
    assert_eq!(
        candidate_offsets(Kind::Trident, Player::One, r),
        candidate_offsets(Kind::Trident, Player::One, Rotation::ZERO)
    );
}

#[test]
fn candidate_squares_drop_off_board_targets() {
    // Player 1 runner on its home corner: forward twice and right only.
    let set = candidate_squares(Kind::Runner, Player::One, Rotation::ZERO, sq(0, 7));
    let squares: Vec<Square> = set.collect();
    assert_eq!(squares, vec![sq(0, 5), sq(0, 6), sq(1, 7)]);
}

#[test]
fn candidate_squares_match_offsets_everywhere() {
    for kind in Kind::ALL {
        for player in Player::BOTH {
            for q in 0..4 {
                let rotation = Rotation::from_quarters(q);
                for from in Square::all() {
                    let expected: SquareSet = candidate_offsets(kind, player, rotation)
                        .iter()
                        .filter_map(|&o| from.offset(o))
                        .collect();
                    assert_eq!(candidate_squares(kind, player, rotation, from), expected);
                }
            }
        }
    }
}
