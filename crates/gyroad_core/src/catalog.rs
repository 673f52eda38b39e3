//! Piece catalog: the direction set of every kind and the candidate
//! squares it yields for an owner, a rotation and an origin square.
//!
//! Directions are written as `(right, forward)` components in the owner's
//! frame. They are mapped to absolute offsets, turned by the piece's
//! rotation and tabulated per square at compile time.

use crate::squareset::SquareSet;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, Kind, NUM_SQUARES, Offset, Player, Rotation, Square};

const MAX_DIRECTIONS: usize = 4;

/// Direction set of a kind as `(right, forward)` pairs.
pub const fn directions(kind: Kind) -> &'static [(i8, i8)] {
    match kind {
        Kind::PawnRight => &[(-1, 0), (1, -1)],
        Kind::PawnLeft => &[(1, 0), (-1, -1)],
        Kind::Diagonal => &[(1, 1), (1, -1), (-1, 1), (-1, -1)],
        Kind::Runner => &[(0, 1), (0, 2), (-1, 0), (1, 0)],
        Kind::Trident => &[(0, 1), (-1, 1), (1, 1), (0, -1)],
        Kind::Jumper => &[(0, 1), (0, -1), (-2, 0), (2, 0)],
        Kind::Rear => &[(0, 1), (-1, -1), (1, -1)],
    }
}

/// Turn an offset by `quarters` clockwise quarter turns (screen y grows down).
pub const fn rotate_offset((dx, dy): Offset, quarters: u8) -> Offset {
    match quarters % 4 {
        0 => (dx, dy),
        1 => (-dy, dx),
        2 => (-dx, -dy),
        _ => (dy, -dx),
    }
}

/// Map a `(right, forward)` direction into an absolute offset for `player`.
pub const fn to_board_offset(player: Player, (r, f): (i8, i8)) -> Offset {
    let (rx, ry) = player.right();
    let (fx, fy) = player.forward();
    (r * rx + f * fx, r * ry + f * fy)
}

#[derive(Clone, Copy, Debug)]
struct Pattern {
    offsets: [Offset; MAX_DIRECTIONS],
    len: u8,
}

const fn build_pattern(kind: Kind, player: Player, stored_quarters: u8) -> Pattern {
    let dirs = directions(kind);
    let turn = (4 - stored_quarters) % 4;
    let mut offsets = [(0i8, 0i8); MAX_DIRECTIONS];
    let mut i = 0;
    while i < dirs.len() {
        offsets[i] = rotate_offset(to_board_offset(player, dirs[i]), turn);
        i += 1;
    }
    Pattern {
        offsets,
        len: dirs.len() as u8,
    }
}

/// Offsets indexed by [kind][player][stored quarters].
const PATTERN_TABLE: [[[Pattern; 4]; 2]; 7] = {
    let empty = Pattern {
        offsets: [(0, 0); MAX_DIRECTIONS],
        len: 0,
    };
    let mut table = [[[empty; 4]; 2]; 7];
    let mut k = 0;
    while k < 7 {
        let mut p = 0;
        while p < 2 {
            let mut q = 0;
            while q < 4 {
                table[k][p][q] = build_pattern(Kind::ALL[k], Player::BOTH[p], q as u8);
                q += 1;
            }
            p += 1;
        }
        k += 1;
    }
    table
};

static PATTERNS: [[[Pattern; 4]; 2]; 7] = PATTERN_TABLE;

/// Candidate squares indexed by [kind][player][stored quarters][origin].
static CANDIDATES: [[[[SquareSet; NUM_SQUARES]; 4]; 2]; 7] = {
    let mut table = [[[[SquareSet::EMPTY; NUM_SQUARES]; 4]; 2]; 7];
    let w = BOARD_WIDTH as i8;
    let h = BOARD_HEIGHT as i8;
    let mut k = 0;
    while k < 7 {
        let mut p = 0;
        while p < 2 {
            let mut q = 0;
            while q < 4 {
                let pattern = PATTERN_TABLE[k][p][q];
                let mut sq = 0;
                while sq < NUM_SQUARES {
                    let x = (sq % BOARD_WIDTH as usize) as i8;
                    let y = (sq / BOARD_WIDTH as usize) as i8;
                    let mut bits = 0u64;
                    let mut i = 0;
                    while i < pattern.len as usize {
                        let (dx, dy) = pattern.offsets[i];
                        let nx = x + dx;
                        let ny = y + dy;
                        if nx >= 0 && nx < w && ny >= 0 && ny < h {
                            bits |= 1u64 << (ny * w + nx) as u32;
                        }
                        i += 1;
                    }
                    table[k][p][q][sq] = SquareSet(bits);
                    sq += 1;
                }
                q += 1;
            }
            p += 1;
        }
        k += 1;
    }
    table
};

/// Absolute offsets of a piece, in direction-set order.
pub fn candidate_offsets(kind: Kind, player: Player, rotation: Rotation) -> &'static [Offset] {
    let pattern = &PATTERNS[kind.idx()][player.idx()][rotation.quarters() as usize];
    &pattern.offsets[..pattern.len as usize]
}

/// In-bounds candidate squares of a piece standing on `from`.
#[inline(always)]
pub fn candidate_squares(kind: Kind, player: Player, rotation: Rotation, from: Square) -> SquareSet {
    CANDIDATES[kind.idx()][player.idx()][rotation.quarters() as usize][from.index()]
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
