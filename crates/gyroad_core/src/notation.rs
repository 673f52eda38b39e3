//! Text form of actions.
//!
//! An action is zero or more rotation tokens followed by one move token:
//! `d1+1` turns the piece on d1 one clockwise quarter and `a2a3` moves or
//! swaps the piece on a2 onto a3. A whole line such as `d1+1 a2a3` is one
//! turn; `pass` stands for a forced pass when replaying games.

use crate::board::Board;
use crate::error::NotationError;
use crate::state::{Action, GameState, Move, Rotate};
use crate::types::Square;

pub const PASS: &str = "pass";

/// Render an action against the board it will be played on.
pub fn format_action(board: &Board, action: &Action) -> Option<String> {
    let mut out = String::new();
    for rotate in &action.rotations {
        let sq = board.piece(rotate.piece)?.square;
        out.push_str(&format!("{sq}+{} ", rotate.steps));
    }
    let from = board.piece(action.mv.piece)?.square;
    out.push_str(&format!("{from}{}", action.mv.to));
    Some(out)
}

fn piece_on(board: &Board, sq: Square) -> Result<crate::types::PieceId, NotationError> {
    board.id_at(sq).ok_or(NotationError::NoPiece(sq))
}

/// Parse one action and check it is legal for the side to move.
pub fn parse_action(state: &GameState, text: &str) -> Result<Action, NotationError> {
    let board = state.board();
    let mut rotations = Vec::new();
    let mut mv = None;

    for token in text.split_whitespace() {
        let malformed = || NotationError::Malformed(token.to_string());
        if mv.is_some() {
            return Err(malformed());
        }
        if let Some((coord, steps)) = token.split_once('+') {
            let sq = Square::parse(coord).ok_or_else(malformed)?;
            let steps: u8 = steps.parse().map_err(|_| malformed())?;
            rotations.push(Rotate::new(piece_on(board, sq)?, steps));
        } else {
            if token.len() != 4 || !token.is_ascii() {
                return Err(malformed());
            }
            let from = Square::parse(&token[0..2]).ok_or_else(malformed)?;
            let to = Square::parse(&token[2..4]).ok_or_else(malformed)?;
            mv = Some(Move::new(piece_on(board, from)?, to));
        }
    }

    let action = Action::with_rotations(rotations, mv.ok_or(NotationError::MissingMove)?);
    state
        .clone()
        .apply_action(&action)
        .map_err(|source| NotationError::Illegal {
            text: text.to_string(),
            source,
        })?;
    Ok(action)
}

/// Replay actions (one per entry, `pass` allowed) onto `state`.
pub fn apply_moves<S: AsRef<str>>(state: &mut GameState, lines: &[S]) -> Result<(), NotationError> {
    for line in lines {
        let line = line.as_ref().trim();
        if line == PASS {
            state.pass_turn().map_err(|source| NotationError::Illegal {
                text: line.to_string(),
                source,
            })?;
            continue;
        }
        let action = parse_action(state, line)?;
        state
            .apply_action(&action)
            .map_err(|source| NotationError::Illegal {
                text: line.to_string(),
                source,
            })?;
    }
    Ok(())
}

/// Split a game record into per-turn lines. Turns are separated by `,`
/// or `;` so that rotation tokens stay with their move.
pub fn split_turns(record: &str) -> Vec<&str> {
    record
        .split([',', ';'])
        .map(str::trim)
        .filter(|turn| !turn.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
