//! Chain-rule accessibility.
//!
//! A selected piece never moves straight onto its own candidate squares.
//! Its occupied candidates link it to other pieces: a friendly occupant
//! joins the chain and contributes all of its candidate squares, empty
//! ones as moves and occupied ones as swaps. Enemy occupants are swap
//! targets only and never extend the chain.
//!
//! The walk is breadth-first over pieces with an explicit worklist, so it
//! terminates on any board: each square is recorded at most once and each
//! piece is enqueued at most once. The selected piece's own square is never
//! part of the result.

use crate::board::Board;
use crate::squareset::SquareSet;
use crate::types::{NUM_SQUARES, PieceId, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Relocate onto an empty square.
    Move,
    /// Exchange squares with the occupant.
    Swap,
}

/// Squares a piece may move or swap into, plus the pieces linked on the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reach {
    pub moves: SquareSet,
    pub swaps: SquareSet,
    /// Linked friendly pieces in discovery order, the selected piece first.
    pub linked: Vec<PieceId>,
}

impl Reach {
    pub fn squares(&self) -> SquareSet {
        self.moves | self.swaps
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.squares().contains(sq)
    }

    pub fn access(&self, sq: Square) -> Option<Access> {
        if self.moves.contains(sq) {
            Some(Access::Move)
        } else if self.swaps.contains(sq) {
            Some(Access::Swap)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.squares().len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.squares().is_empty()
    }

    pub fn is_linked(&self, id: PieceId) -> bool {
        self.linked.contains(&id)
    }
}

/// Squares first discovered while expanding one frontier generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Layer {
    pub moves: SquareSet,
    pub swaps: SquareSet,
}

impl Layer {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.swaps.is_empty()
    }
}

/// Resolve every square `selected` may move or swap into.
///
/// Unknown ids resolve to an empty reach.
pub fn resolve(board: &Board, selected: PieceId) -> Reach {
    walk(board, selected, |_| {}, None)
}

/// Same result as [`resolve`], split into breadth-first generations.
pub fn resolve_layers(board: &Board, selected: PieceId) -> Vec<Layer> {
    let mut layers = Vec::new();
    walk(board, selected, |_| {}, Some(&mut layers));
    layers
}

/// [`resolve`] with a hook that may reorder each frontier before expansion.
pub(crate) fn resolve_with(
    board: &Board,
    selected: PieceId,
    arrange: impl FnMut(&mut [PieceId]),
) -> Reach {
    walk(board, selected, arrange, None)
}

fn walk(
    board: &Board,
    selected: PieceId,
    mut arrange: impl FnMut(&mut [PieceId]),
    mut layers: Option<&mut Vec<Layer>>,
) -> Reach {
    let Some(origin) = board.piece(selected) else {
        return Reach::default();
    };
    let owner = origin.player;

    let mut reach = Reach {
        linked: vec![selected],
        ..Reach::default()
    };
    let mut enqueued = [false; NUM_SQUARES];
    enqueued[selected.idx()] = true;
    let mut recorded = SquareSet::from_square(origin.square);

    let mut frontier = vec![selected];
    let mut next = Vec::new();
    while !frontier.is_empty() {
        arrange(frontier.as_mut_slice());
        let mut layer = Layer::default();

        for &id in &frontier {
            let Some(piece) = board.piece(id) else {
                continue;
            };
            for sq in piece.candidates() {
                match board.piece_at(sq) {
                    None => {
                        if id != selected && recorded.insert(sq) {
                            layer.moves.insert(sq);
                        }
                    }
                    Some(occupant) => {
                        if recorded.insert(sq) {
                            layer.swaps.insert(sq);
                        }
                        if occupant.player == owner && !enqueued[occupant.id.idx()] {
                            enqueued[occupant.id.idx()] = true;
                            reach.linked.push(occupant.id);
                            next.push(occupant.id);
                        }
                    }
                }
            }
        }

        reach.moves |= layer.moves;
        reach.swaps |= layer.swaps;
        if let Some(layers) = layers.as_deref_mut()
            && !layer.is_empty()
        {
            layers.push(layer);
        }
        std::mem::swap(&mut frontier, &mut next);
        next.clear();
    }
    reach
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
