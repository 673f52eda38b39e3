//! Error types for board construction and rule enforcement.

use std::fmt;

use thiserror::Error;

use crate::types::{PieceId, Square};

/// Errors raised by direct board edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no piece with id {0} on the board")]
    UnknownPiece(PieceId),

    #[error("square {0} is already occupied")]
    Occupied(Square),

    #[error("square {0} is empty")]
    EmptySquare(Square),

    #[error("piece id {0} is already in use")]
    DuplicateId(PieceId),

    #[error("piece id {0} is out of range")]
    IdOutOfRange(PieceId),
}

/// Errors raised while reading a text board layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 7")]
    RowWidth { row: usize, len: usize },

    #[error("unknown piece symbol '{symbol}' in row {row}")]
    UnknownSymbol { symbol: char, row: usize },
}

/// Why a piece cannot be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionIssue {
    NotOwned,
    Blocked,
    RotatedThisTurn,
}

impl fmt::Display for SelectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SelectionIssue::NotOwned => "piece belongs to the other player",
            SelectionIssue::Blocked => "piece already moved this turn",
            SelectionIssue::RotatedThisTurn => "piece was rotated this turn",
        })
    }
}

/// Why a rotation is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationIssue {
    NotRotatable,
    NoChancesLeft,
    AlreadyRotated,
    NotOwned,
    Blocked,
    NoSteps,
}

impl fmt::Display for RotationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RotationIssue::NotRotatable => "piece kind cannot rotate",
            RotationIssue::NoChancesLeft => "no rotation chances left this turn",
            RotationIssue::AlreadyRotated => "piece was already rotated this turn",
            RotationIssue::NotOwned => "piece belongs to the other player",
            RotationIssue::Blocked => "piece already moved this turn",
            RotationIssue::NoSteps => "rotation must turn at least one quarter",
        })
    }
}

/// Rule violations. A rejected call never changes the live game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("cannot select {piece}: {reason}")]
    InvalidSelection { piece: PieceId, reason: SelectionIssue },

    #[error("cannot rotate {piece}: {reason}")]
    IllegalRotation { piece: PieceId, reason: RotationIssue },

    #[error("{square} is not accessible for {piece}")]
    IllegalDestination { piece: PieceId, square: Square },

    /// The resolver marked a square reachable but no hop path exists.
    #[error("resolver/path mismatch for {piece} to {square}")]
    ResolverInvariantViolation { piece: PieceId, square: Square },

    #[error("{action} is not allowed while {phase}")]
    OutOfPhase { action: &'static str, phase: &'static str },

    #[error("no piece is selected")]
    NoSelection,

    #[error("cannot pass while a legal move exists")]
    PassNotAllowed,

    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),
}

pub type RuleResult<T> = Result<T, RuleError>;

/// Errors raised while reading action text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("malformed token '{0}'")]
    Malformed(String),

    #[error("no piece on {0}")]
    NoPiece(Square),

    #[error("action has no move token")]
    MissingMove,

    #[error("illegal action '{text}': {source}")]
    Illegal {
        text: String,
        #[source]
        source: RuleError,
    },
}
