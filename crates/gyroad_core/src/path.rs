//! Hop-path reconstruction for a resolved destination.
//!
//! Searches backward from the destination over the linked pieces: each
//! step finds a linked piece whose candidates include the current square,
//! then continues from that piece's square until the selected piece is
//! reached. When the destination is empty the selected piece may not own
//! the first hop.

use std::collections::VecDeque;

use crate::board::Board;
use crate::resolver::{Reach, resolve};
use crate::squareset::SquareSet;
use crate::types::{NUM_SQUARES, PieceId, Square};

/// Hop path from `selected` to `destination`, selected square first.
///
/// Returns `None` only when `destination` is not accessible.
pub fn find_path(board: &Board, selected: PieceId, destination: Square) -> Option<Vec<Square>> {
    let reach = resolve(board, selected);
    find_path_in(board, &reach, selected, destination)
}

/// [`find_path`] reusing an already computed reach of `selected`.
pub fn find_path_in(
    board: &Board,
    reach: &Reach,
    selected: PieceId,
    destination: Square,
) -> Option<Vec<Square>> {
    let origin = board.piece(selected)?.square;
    if !reach.contains(destination) {
        return None;
    }
    let destination_empty = board.is_empty(destination);

    // toward[s] is the square the piece standing on `s` hops into.
    let mut toward: [Option<Square>; NUM_SQUARES] = [None; NUM_SQUARES];
    let mut expanded = SquareSet::from_square(destination);
    let mut queue = VecDeque::from([destination]);

    while let Some(target) = queue.pop_front() {
        for &id in &reach.linked {
            let Some(piece) = board.piece(id) else {
                continue;
            };
            if !piece.candidates().contains(target) {
                continue;
            }
            if id == selected {
                if target == destination && destination_empty {
                    continue;
                }
                let mut path = vec![origin, target];
                let mut cur = target;
                while cur != destination {
                    cur = toward[cur.index()]?;
                    path.push(cur);
                }
                return Some(path);
            }
            if expanded.insert(piece.square) {
                toward[piece.square.index()] = Some(target);
                queue.push_back(piece.square);
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod path_tests;
