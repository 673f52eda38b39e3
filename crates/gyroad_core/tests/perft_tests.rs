use rayon::prelude::*;

use gyroad_core::{Board, GameState, Player, RulesConfig, START_LAYOUT, divide, perft};

const LAYOUTS: &[&str] = &[
    START_LAYOUT,
    "......./......./......./......./......./...P.../...P.../.......",
    "...PN../....L../......./......./......./......./......./.......",
    "ptncntp/lrlxrlr/......./......./......./RLR.LRL/...X.../PTNCNTP",
    "......./.R...../..P..../......./.....p./.....p./......./.......",
];

fn state(layout: &str, side: Player) -> GameState {
    GameState::from_board(Board::from_layout(layout).unwrap(), side, RulesConfig::default())
}

#[test]
fn start_position_depth_one() {
    assert_eq!(perft(&GameState::default(), 1), 234);
    assert_eq!(perft(&state(START_LAYOUT, Player::Two), 1), 234);
}

#[test]
fn divide_sums_to_perft() {
    LAYOUTS.par_iter().for_each(|layout| {
        for side in Player::BOTH {
            let s = state(layout, side);
            let total: u64 = divide(&s, 2).iter().map(|(_, n)| n).sum();
            let expected = perft(&s, 2);
            if s.legal_moves().is_empty() {
                assert_eq!(total, 0);
            } else {
                assert_eq!(total, expected, "layout {layout}");
            }
        }
    });
}

#[test]
fn start_position_is_point_symmetric() {
    let one = perft(&state(START_LAYOUT, Player::One), 2);
    let two = perft(&state(START_LAYOUT, Player::Two), 2);
    assert_eq!(one, two);
}

#[test]
fn perft_leaves_the_input_untouched() {
    let s = GameState::default();
    let before = s.clone();
    perft(&s, 2);
    assert_eq!(s, before);
}
