//! Basic game vocabulary: players, piece kinds, squares and rotations.
//!
//! The board is 7 columns (x = 0..6) by 8 rows (y = 0..7) with y = 0 at the
//! top. Squares are stored as `y * 7 + x`. For display, columns are files
//! `a..g` and rows are ranks `8..1`, so rank = 8 - y.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_WIDTH: u8 = 7;
pub const BOARD_HEIGHT: u8 = 8;
pub const NUM_SQUARES: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);
pub const PIECES_PER_PLAYER: usize = 14;
/// Rotations each player may commit per turn.
pub const ROTATION_CHANCES: u8 = 2;

/// A board displacement `(dx, dy)` in absolute coordinates.
pub type Offset = (i8, i8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// 1 or 2, as players are named in the rules.
    pub fn number(self) -> u8 {
        self.idx() as u8 + 1
    }

    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Row on which this player's pawns promote.
    pub fn promotion_row(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => BOARD_HEIGHT - 1,
        }
    }

    pub fn home_row(self) -> u8 {
        self.other().promotion_row()
    }

    /// Unit step toward the promotion row.
    pub const fn forward(self) -> Offset {
        match self {
            Player::One => (0, -1),
            Player::Two => (0, 1),
        }
    }

    /// Unit step to this player's right hand when facing forward.
    pub const fn right(self) -> Offset {
        match self {
            Player::One => (1, 0),
            Player::Two => (-1, 0),
        }
    }

    /// Rows between `y` and this player's promotion row.
    pub fn rows_to_promotion(self, y: u8) -> u8 {
        y.abs_diff(self.promotion_row())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// The seven piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// `PR`
    PawnRight,
    /// `PL`
    PawnLeft,
    /// `PX`
    Diagonal,
    /// `DP`
    Runner,
    /// `DT`
    Trident,
    /// `DN`
    Jumper,
    /// `C`
    Rear,
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::PawnRight,
        Kind::PawnLeft,
        Kind::Diagonal,
        Kind::Runner,
        Kind::Trident,
        Kind::Jumper,
        Kind::Rear,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn can_rotate(self) -> bool {
        matches!(self, Kind::Runner | Kind::Trident | Kind::Jumper | Kind::Rear)
    }

    /// Promotable kinds leave the board for a point on their promotion row.
    pub fn promotes(self) -> bool {
        matches!(self, Kind::PawnRight | Kind::PawnLeft)
    }

    pub fn code(self) -> &'static str {
        match self {
            Kind::PawnRight => "PR",
            Kind::PawnLeft => "PL",
            Kind::Diagonal => "PX",
            Kind::Runner => "DP",
            Kind::Trident => "DT",
            Kind::Jumper => "DN",
            Kind::Rear => "C",
        }
    }

    /// Layout symbol: upper case for player 1, lower case for player 2.
    pub fn symbol(self, player: Player) -> char {
        let c = match self {
            Kind::PawnRight => 'R',
            Kind::PawnLeft => 'L',
            Kind::Diagonal => 'X',
            Kind::Runner => 'P',
            Kind::Trident => 'T',
            Kind::Jumper => 'N',
            Kind::Rear => 'C',
        };
        match player {
            Player::One => c,
            Player::Two => c.to_ascii_lowercase(),
        }
    }

    pub fn from_symbol(c: char) -> Option<(Kind, Player)> {
        let player = if c.is_ascii_uppercase() {
            Player::One
        } else {
            Player::Two
        };
        let kind = match c.to_ascii_uppercase() {
            'R' => Kind::PawnRight,
            'L' => Kind::PawnLeft,
            'X' => Kind::Diagonal,
            'P' => Kind::Runner,
            'T' => Kind::Trident,
            'N' => Kind::Jumper,
            'C' => Kind::Rear,
            _ => return None,
        };
        Some((kind, player))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Stable piece identity, kept for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    pub const fn new(x: u8, y: u8) -> Option<Square> {
        if x < BOARD_WIDTH && y < BOARD_HEIGHT {
            Some(Square(y * BOARD_WIDTH + x))
        } else {
            None
        }
    }

    pub const fn from_index(index: usize) -> Option<Square> {
        if index < NUM_SQUARES {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn x(self) -> u8 {
        self.0 % BOARD_WIDTH
    }

    #[inline(always)]
    pub const fn y(self) -> u8 {
        self.0 / BOARD_WIDTH
    }

    /// Square displaced by `offset`, or `None` when it falls off the board.
    #[inline]
    pub fn offset(self, (dx, dy): Offset) -> Option<Square> {
        let x = self.x() as i8 + dx;
        let y = self.y() as i8 + dy;
        if x < 0 || y < 0 {
            return None;
        }
        Square::new(x as u8, y as u8)
    }

    /// All squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }

    /// Parse a coordinate such as `d1` (file `a..g`, rank `1..8`).
    pub fn parse(txt: &str) -> Option<Square> {
        let bytes = txt.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..b'a' + BOARD_WIDTH).contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Square::new(file - b'a', BOARD_HEIGHT - (rank - b'0'))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x()) as char, BOARD_HEIGHT - self.y())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

/// Orientation of a piece as a multiple of 90 degrees.
///
/// The stored angle counts counter-clockwise, so a clockwise quarter turn
/// subtracts 90 degrees. Candidate offsets are turned by the inverse of
/// the stored angle, which makes the access pattern follow the piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rotation(u8);

impl Rotation {
    pub const ZERO: Rotation = Rotation(0);

    pub fn from_degrees(degrees: i32) -> Option<Rotation> {
        if degrees % 90 != 0 {
            return None;
        }
        Some(Rotation((degrees / 90).rem_euclid(4) as u8))
    }

    pub const fn from_quarters(quarters: u8) -> Rotation {
        Rotation(quarters % 4)
    }

    #[inline(always)]
    pub const fn quarters(self) -> u8 {
        self.0
    }

    pub fn degrees(self) -> u16 {
        self.0 as u16 * 90
    }

    /// One clockwise quarter turn.
    pub fn step(self) -> Rotation {
        self.turned(1)
    }

    /// `steps` clockwise quarter turns.
    pub fn turned(self, steps: u8) -> Rotation {
        Rotation((self.0 + 3 * (steps % 4)) % 4)
    }

    /// Clockwise quarter turns applied to base offsets.
    #[inline(always)]
    pub const fn clockwise_quarters(self) -> u8 {
        (4 - self.0) % 4
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
