//! Game state and its rule-checked transitions.
//!
//! `GameState` owns the board, the turn bookkeeping and the scores. Its
//! transitions are the ones the turn engine drives on the live game and the
//! search replays on copies.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Board, Piece};
use crate::config::RulesConfig;
use crate::error::{BoardError, RotationIssue, RuleError, RuleResult, SelectionIssue};
use crate::resolver::{Access, Reach, resolve};
use crate::types::*;
use crate::zobrist::ZOBRIST;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Move or swap of one piece onto a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: PieceId,
    pub to: Square,
}

impl Move {
    pub fn new(piece: PieceId, to: Square) -> Self {
        Self { piece, to }
    }
}

/// A committed rotation of `steps` clockwise quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rotate {
    pub piece: PieceId,
    pub steps: u8,
}

impl Rotate {
    pub fn new(piece: PieceId, steps: u8) -> Self {
        Self { piece, steps }
    }
}

/// A whole turn: up to two rotations followed by one move or swap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    pub rotations: Vec<Rotate>,
    pub mv: Move,
}

impl Action {
    pub fn new(mv: Move) -> Self {
        Self {
            rotations: Vec::new(),
            mv,
        }
    }

    pub fn with_rotations(rotations: Vec<Rotate>, mv: Move) -> Self {
        Self { rotations, mv }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Promotion {
    pub piece: PieceId,
    pub player: Player,
    pub square: Square,
}

/// What a move or swap did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub access: Access,
    /// Occupant exchanged with, for swaps.
    pub partner: Option<PieceId>,
    pub promotions: Vec<Promotion>,
    /// Set when the move ended the game.
    pub outcome: Option<Outcome>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Player,
    rotation_chances: u8,
    scores: [u32; 2],
    outcome: Option<Outcome>,
    rules: RulesConfig,
    plies: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl GameState {
    /// Starting position with player 1 to move.
    pub fn new(rules: RulesConfig) -> Self {
        Self::from_board(Board::startpos(), Player::One, rules)
    }

    pub fn from_board(board: Board, side_to_move: Player, rules: RulesConfig) -> Self {
        Self {
            board,
            side_to_move,
            rotation_chances: ROTATION_CHANCES,
            scores: [0; 2],
            outcome: None,
            rules,
            plies: 0,
        }
    }

    /// Replace both scores and re-evaluate the terminal status.
    pub fn with_scores(mut self, scores: [u32; 2]) -> Self {
        self.scores = scores;
        self.outcome = self.threshold_outcome();
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    pub fn rotation_chances(&self) -> u8 {
        self.rotation_chances
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.idx()]
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Turns ended so far, passes included.
    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn reach(&self, id: PieceId) -> Reach {
        resolve(&self.board, id)
    }

    fn piece_checked(&self, id: PieceId) -> RuleResult<&Piece> {
        self.board
            .piece(id)
            .ok_or(RuleError::Board(BoardError::UnknownPiece(id)))
    }

    /// Piece the side to move may select this turn.
    pub fn check_selectable(&self, id: PieceId) -> RuleResult<&Piece> {
        if self.is_game_over() {
            return Err(RuleError::GameOver);
        }
        let piece = self.piece_checked(id)?;
        let reason = if piece.player != self.side_to_move {
            SelectionIssue::NotOwned
        } else if piece.blocked {
            SelectionIssue::Blocked
        } else if piece.rotated_this_turn {
            SelectionIssue::RotatedThisTurn
        } else {
            return Ok(piece);
        };
        Err(RuleError::InvalidSelection { piece: id, reason })
    }

    /// Piece the side to move may rotate this turn.
    pub fn check_rotation(&self, id: PieceId) -> RuleResult<&Piece> {
        if self.is_game_over() {
            return Err(RuleError::GameOver);
        }
        let piece = self.piece_checked(id)?;
        let reason = if piece.player != self.side_to_move {
            RotationIssue::NotOwned
        } else if !piece.kind.can_rotate() {
            RotationIssue::NotRotatable
        } else if self.rotation_chances == 0 {
            RotationIssue::NoChancesLeft
        } else if piece.rotated_this_turn {
            RotationIssue::AlreadyRotated
        } else if piece.blocked {
            RotationIssue::Blocked
        } else {
            return Ok(piece);
        };
        Err(RuleError::IllegalRotation { piece: id, reason })
    }

    /// Every legal move or swap for the side to move, ordered by piece id
    /// then destination index.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.is_game_over() {
            return moves;
        }
        for piece in self.board.pieces_of(self.side_to_move) {
            if !piece.can_be_selected() {
                continue;
            }
            let reach = resolve(&self.board, piece.id);
            moves.extend(reach.squares().map(|to| Move::new(piece.id, to)));
        }
        moves
    }

    pub fn has_legal_move(&self) -> bool {
        !self.is_game_over()
            && self
                .board
                .pieces_of(self.side_to_move)
                .filter(|p| p.can_be_selected())
                .any(|p| !resolve(&self.board, p.id).is_empty())
    }

    /// Accessible squares summed over all of `player`'s pieces.
    pub fn mobility(&self, player: Player) -> usize {
        self.board
            .pieces_of(player)
            .map(|p| resolve(&self.board, p.id).len())
            .sum()
    }

    /// Commit `rotation` for a piece: spends one chance and marks it rotated.
    pub fn commit_rotation(&mut self, id: PieceId, rotation: Rotation) -> RuleResult<()> {
        self.check_rotation(id)?;
        self.rotation_chances -= 1;
        if let Some(piece) = self.board.piece_mut(id) {
            piece.rotation = rotation;
            piece.rotated_this_turn = true;
        }
        debug!(piece = %id, degrees = rotation.degrees(), chances = self.rotation_chances, "rotation committed");
        Ok(())
    }

    pub fn apply_rotation(&mut self, rotate: Rotate) -> RuleResult<()> {
        if rotate.steps == 0 {
            return Err(RuleError::IllegalRotation {
                piece: rotate.piece,
                reason: RotationIssue::NoSteps,
            });
        }
        let current = self.check_rotation(rotate.piece)?.rotation;
        self.commit_rotation(rotate.piece, current.turned(rotate.steps))
    }

    /// Uncommitted rotation preview used while a rotation is pending.
    pub(crate) fn preview_rotation(&mut self, id: PieceId, rotation: Rotation) -> RuleResult<()> {
        self.board.set_rotation(id, rotation)?;
        Ok(())
    }

    pub fn validate_move(&self, mv: Move) -> RuleResult<Access> {
        self.check_selectable(mv.piece)?;
        resolve(&self.board, mv.piece)
            .access(mv.to)
            .ok_or(RuleError::IllegalDestination {
                piece: mv.piece,
                square: mv.to,
            })
    }

    /// Apply a legal move or swap, then promotions and the terminal check.
    /// The turn does not end; call [`GameState::end_turn`].
    pub fn apply_move(&mut self, mv: Move) -> RuleResult<MoveOutcome> {
        let access = self.validate_move(mv)?;
        self.apply_unchecked(mv, access)
    }

    pub(crate) fn apply_unchecked(&mut self, mv: Move, access: Access) -> RuleResult<MoveOutcome> {
        let mover = self.side_to_move;
        let partner = match access {
            Access::Move => {
                self.board.move_piece(mv.piece, mv.to)?;
                None
            }
            Access::Swap => {
                let other = self
                    .board
                    .id_at(mv.to)
                    .ok_or(BoardError::EmptySquare(mv.to))?;
                self.board.swap(mv.piece, other)?;
                Some(other)
            }
        };

        if let Some(piece) = self.board.piece_mut(mv.piece) {
            piece.blocked = true;
        }
        if let Some(other) = partner
            && let Some(piece) = self.board.piece_mut(other)
            && piece.player == mover
        {
            piece.blocked = true;
        }

        let mut promotions = Vec::new();
        for id in std::iter::once(mv.piece).chain(partner) {
            let Some(piece) = self.board.piece(id).copied() else {
                continue;
            };
            if piece.kind.promotes() && piece.square.y() == piece.player.promotion_row() {
                self.board.remove(id)?;
                self.scores[piece.player.idx()] += 1;
                debug!(piece = %id, player = %piece.player, square = %piece.square, "promotion");
                promotions.push(Promotion {
                    piece: id,
                    player: piece.player,
                    square: piece.square,
                });
            }
        }

        if !promotions.is_empty() {
            self.outcome = self.threshold_outcome();
        }

        Ok(MoveOutcome {
            access,
            partner,
            promotions,
            outcome: self.outcome,
        })
    }

    fn threshold_outcome(&self) -> Option<Outcome> {
        let target = self.rules.win_threshold;
        match (self.scores[0] >= target, self.scores[1] >= target) {
            (true, true) => Some(Outcome::Draw),
            (true, false) => Some(Outcome::Winner(Player::One)),
            (false, true) => Some(Outcome::Winner(Player::Two)),
            (false, false) => None,
        }
    }

    /// Hand the turn to the other player with a fresh rotation budget.
    pub fn end_turn(&mut self) {
        let next = self.side_to_move.other();
        for piece in self.board.pieces_mut() {
            piece.blocked = false;
            if piece.player == next {
                piece.rotated_this_turn = false;
            }
        }
        self.side_to_move = next;
        self.rotation_chances = ROTATION_CHANCES;
        self.plies += 1;
    }

    /// End the turn without moving. Only allowed when no move exists.
    pub fn pass_turn(&mut self) -> RuleResult<()> {
        if self.is_game_over() {
            return Err(RuleError::GameOver);
        }
        if self.has_legal_move() {
            return Err(RuleError::PassNotAllowed);
        }
        warn!(player = %self.side_to_move, "forced pass");
        self.end_turn();
        Ok(())
    }

    /// Play a whole turn: rotations, the move, then the hand-over.
    ///
    /// Not atomic: on error the state may be partly changed. The turn
    /// engine runs this on a snapshot; the search runs it on clones.
    pub fn apply_action(&mut self, action: &Action) -> RuleResult<MoveOutcome> {
        for &rotate in &action.rotations {
            self.apply_rotation(rotate)?;
        }
        let outcome = self.apply_move(action.mv)?;
        self.end_turn();
        Ok(outcome)
    }

    /// Copy of this state as if `player` were starting a fresh turn.
    pub fn as_turn_of(&self, player: Player) -> GameState {
        let mut copy = self.clone();
        if player != self.side_to_move {
            for piece in copy.board.pieces_mut() {
                piece.blocked = false;
                piece.rotated_this_turn = false;
            }
            copy.side_to_move = player;
            copy.rotation_chances = ROTATION_CHANCES;
        }
        copy
    }

    /// Zobrist key over piece placement and rotation, side to move,
    /// remaining rotation chances and both scores.
    pub fn hash(&self) -> u64 {
        let mut h = 0u64;
        for piece in self.board.pieces() {
            h ^= ZOBRIST.piece_key(piece.id.idx(), piece.square.index(), piece.rotation.quarters());
        }
        if self.side_to_move == Player::Two {
            h ^= ZOBRIST.side_to_move;
        }
        h ^= ZOBRIST.chances_key(self.rotation_chances);
        for player in Player::BOTH {
            h ^= ZOBRIST.score_key(player, self.score(player));
        }
        h
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
