use std::fmt;

use crate::catalog::candidate_squares;
use crate::error::{BoardError, LayoutError};
use crate::squareset::SquareSet;
use crate::types::*;

/// Starting placement, top row (y = 0) first.
pub const START_LAYOUT: &str = "ptncntp/lrlxrlr/......./......./......./......./RLRXLRL/PTNCNTP";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: Kind,
    pub player: Player,
    pub square: Square,
    pub rotation: Rotation,
    /// Set after the piece moves or is swapped; cleared at the next turn start.
    pub blocked: bool,
    /// Set once the piece commits a rotation; cleared at its owner's turn start.
    pub rotated_this_turn: bool,
}

impl Piece {
    pub fn new(id: PieceId, kind: Kind, player: Player, square: Square) -> Self {
        Self {
            id,
            kind,
            player,
            square,
            rotation: Rotation::ZERO,
            blocked: false,
            rotated_this_turn: false,
        }
    }

    /// Raw candidate squares for the current square and rotation.
    #[inline]
    pub fn candidates(&self) -> SquareSet {
        candidate_squares(self.kind, self.player, self.rotation, self.square)
    }

    pub fn can_be_selected(&self) -> bool {
        !self.blocked && !self.rotated_this_turn
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol(self.player)
    }
}

/// Piece collection plus a grid of non-owning references into it.
///
/// Pieces are indexed by id; the grid maps each square to the id standing
/// on it. Every edit keeps both views in agreement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [Option<PieceId>; NUM_SQUARES],
    pieces: [Option<Piece>; NUM_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            grid: [None; NUM_SQUARES],
            pieces: [None; NUM_SQUARES],
        }
    }

    /// Standard starting position. Player 1 owns ids 0..14 (back row then
    /// pawn row, left to right), player 2 owns ids 14..28.
    pub fn startpos() -> Self {
        const BACK: [Kind; 7] = [
            Kind::Runner,
            Kind::Trident,
            Kind::Jumper,
            Kind::Rear,
            Kind::Jumper,
            Kind::Trident,
            Kind::Runner,
        ];
        const FRONT_ONE: [Kind; 7] = [
            Kind::PawnRight,
            Kind::PawnLeft,
            Kind::PawnRight,
            Kind::Diagonal,
            Kind::PawnLeft,
            Kind::PawnRight,
            Kind::PawnLeft,
        ];
        const FRONT_TWO: [Kind; 7] = [
            Kind::PawnLeft,
            Kind::PawnRight,
            Kind::PawnLeft,
            Kind::Diagonal,
            Kind::PawnRight,
            Kind::PawnLeft,
            Kind::PawnRight,
        ];

        let mut board = Board::empty();
        let mut next = 0u8;
        for (player, front) in [(Player::One, FRONT_ONE), (Player::Two, FRONT_TWO)] {
            let back_y = player.home_row();
            let front_y = match player {
                Player::One => back_y - 1,
                Player::Two => back_y + 1,
            };
            for (y, row) in [(back_y, BACK), (front_y, front)] {
                for (x, kind) in (0u8..).zip(row) {
                    if let Some(sq) = Square::new(x, y) {
                        board.put(Piece::new(PieceId(next), kind, player, sq));
                        next += 1;
                    }
                }
            }
        }
        board
    }

    /// Parse a text layout (see [`START_LAYOUT`]). Rows are separated by
    /// newlines or `/`, whitespace is ignored and ids follow reading order.
    pub fn from_layout(text: &str) -> Result<Board, LayoutError> {
        let rows: Vec<String> = text
            .split(['\n', '/'])
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_HEIGHT as usize {
            return Err(LayoutError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        let mut next = 0u8;
        for (y, row) in (0u8..).zip(&rows) {
            let len = row.chars().count();
            if len != BOARD_WIDTH as usize {
                return Err(LayoutError::RowWidth {
                    row: y as usize,
                    len,
                });
            }
            for (x, symbol) in (0u8..).zip(row.chars()) {
                if symbol == '.' {
                    continue;
                }
                let (kind, player) = Kind::from_symbol(symbol).ok_or(LayoutError::UnknownSymbol {
                    symbol,
                    row: y as usize,
                })?;
                if let Some(sq) = Square::new(x, y) {
                    board.put(Piece::new(PieceId(next), kind, player, sq));
                    next += 1;
                }
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_layout`], rows joined with `/`.
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(NUM_SQUARES + BOARD_HEIGHT as usize);
        for y in 0..BOARD_HEIGHT {
            if y > 0 {
                out.push('/');
            }
            for x in 0..BOARD_WIDTH {
                let c = Square::new(x, y)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::symbol);
                out.push(c);
            }
        }
        out
    }

    // Unchecked insert used by the constructors above.
    fn put(&mut self, piece: Piece) {
        self.grid[piece.square.index()] = Some(piece.id);
        self.pieces[piece.id.idx()] = Some(piece);
    }

    #[inline]
    pub fn id_at(&self, sq: Square) -> Option<PieceId> {
        self.grid[sq.index()]
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.id_at(sq).and_then(|id| self.piece(id))
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.idx()).and_then(Option::as_ref)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.idx()).and_then(Option::as_mut)
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.index()].is_none()
    }

    /// All pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().flatten()
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.player == player)
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.pieces.iter_mut().flatten()
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    pub fn occupied(&self) -> SquareSet {
        self.pieces().map(|p| p.square).collect()
    }

    /// Add a new piece under the lowest free id.
    pub fn add_piece(&mut self, kind: Kind, player: Player, sq: Square) -> Result<PieceId, BoardError> {
        let free = self
            .pieces
            .iter()
            .position(Option::is_none)
            .ok_or(BoardError::IdOutOfRange(PieceId(NUM_SQUARES as u8)))?;
        let id = PieceId(free as u8);
        self.place(Piece::new(id, kind, player, sq))?;
        Ok(id)
    }

    /// Insert a fully specified piece.
    pub fn place(&mut self, piece: Piece) -> Result<(), BoardError> {
        if piece.id.idx() >= NUM_SQUARES {
            return Err(BoardError::IdOutOfRange(piece.id));
        }
        if self.pieces[piece.id.idx()].is_some() {
            return Err(BoardError::DuplicateId(piece.id));
        }
        if !self.is_empty(piece.square) {
            return Err(BoardError::Occupied(piece.square));
        }
        self.put(piece);
        Ok(())
    }

    /// Take a piece off both the grid and the collection.
    pub fn remove(&mut self, id: PieceId) -> Result<Piece, BoardError> {
        let piece = self
            .pieces
            .get_mut(id.idx())
            .and_then(Option::take)
            .ok_or(BoardError::UnknownPiece(id))?;
        self.grid[piece.square.index()] = None;
        Ok(piece)
    }

    /// Relocate a piece to an empty square.
    pub fn move_piece(&mut self, id: PieceId, to: Square) -> Result<(), BoardError> {
        if !self.is_empty(to) {
            return Err(BoardError::Occupied(to));
        }
        let piece = self.piece_mut(id).ok_or(BoardError::UnknownPiece(id))?;
        let from = piece.square;
        piece.square = to;
        self.grid[from.index()] = None;
        self.grid[to.index()] = Some(id);
        Ok(())
    }

    /// Exchange the squares of two pieces.
    pub fn swap(&mut self, a: PieceId, b: PieceId) -> Result<(), BoardError> {
        let sa = self.piece(a).ok_or(BoardError::UnknownPiece(a))?.square;
        let sb = self.piece(b).ok_or(BoardError::UnknownPiece(b))?.square;
        if let Some(p) = self.piece_mut(a) {
            p.square = sb;
        }
        if let Some(p) = self.piece_mut(b) {
            p.square = sa;
        }
        self.grid[sa.index()] = Some(b);
        self.grid[sb.index()] = Some(a);
        Ok(())
    }

    pub fn set_rotation(&mut self, id: PieceId, rotation: Rotation) -> Result<(), BoardError> {
        let piece = self.piece_mut(id).ok_or(BoardError::UnknownPiece(id))?;
        piece.rotation = rotation;
        Ok(())
    }

    /// Grid and collection describe the same placement.
    pub fn is_consistent(&self) -> bool {
        let from_pieces = self
            .pieces
            .iter()
            .enumerate()
            .all(|(i, slot)| match slot {
                Some(p) => p.id.idx() == i && self.grid[p.square.index()] == Some(p.id),
                None => true,
            });
        let from_grid = self.grid.iter().enumerate().all(|(i, slot)| match slot {
            Some(id) => self.piece(*id).is_some_and(|p| p.square.index() == i),
            None => true,
        });
        from_pieces && from_grid
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT {
            write!(f, "{} ", BOARD_HEIGHT - y)?;
            for x in 0..BOARD_WIDTH {
                let c = Square::new(x, y)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::symbol);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for x in 0..BOARD_WIDTH {
            write!(f, " {}", (b'a' + x) as char)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
