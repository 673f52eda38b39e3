//! Turn state machine driving the live game.
//!
//! Phases: select a piece, optionally rotate it (begin, step, commit or
//! cancel), move or swap the selected piece, end the turn. Every entry
//! point checks the phase and the rules first, so a rejected call leaves
//! the game exactly as it was.

use tracing::{debug, error};

use crate::config::RulesConfig;
use crate::error::{RotationIssue, RuleError, RuleResult};
use crate::path::find_path_in;
use crate::resolver::Reach;
use crate::squareset::SquareSet;
use crate::state::{Action, GameState, Move, MoveOutcome, Outcome};
use crate::types::{PieceId, Player, Rotation, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected,
    RotationPending,
    TurnComplete,
    GameOver,
}

impl Phase {
    fn name(self) -> &'static str {
        match self {
            Phase::AwaitingSelection => "awaiting selection",
            Phase::PieceSelected => "a piece is selected",
            Phase::RotationPending => "a rotation is pending",
            Phase::TurnComplete => "the turn is complete",
            Phase::GameOver => "the game is over",
        }
    }
}

/// Result of a move or swap on the live game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Hop sequence from the selected square to the destination.
    pub path: Vec<Square>,
    pub outcome: MoveOutcome,
}

#[derive(Clone, Copy, Debug)]
struct PendingRotation {
    origin: Rotation,
    steps: u8,
}

#[derive(Clone, Debug)]
pub struct TurnEngine {
    state: GameState,
    phase: Phase,
    selected: Option<PieceId>,
    reach: Reach,
    pending: Option<PendingRotation>,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl TurnEngine {
    pub fn new(rules: RulesConfig) -> Self {
        Self::from_state(GameState::new(rules))
    }

    pub fn from_state(state: GameState) -> Self {
        let phase = if state.is_game_over() {
            Phase::GameOver
        } else {
            Phase::AwaitingSelection
        };
        Self {
            state,
            phase,
            selected: None,
            reach: Reach::default(),
            pending: None,
        }
    }

    fn expect_phase(&self, action: &'static str, allowed: &[Phase]) -> RuleResult<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else if self.phase == Phase::GameOver {
            Err(RuleError::GameOver)
        } else {
            Err(RuleError::OutOfPhase {
                action,
                phase: self.phase.name(),
            })
        }
    }

    fn selected_id(&self) -> RuleResult<PieceId> {
        self.selected.ok_or(RuleError::NoSelection)
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.reach = Reach::default();
        self.pending = None;
    }

    /// Select a piece of the player to move and resolve its reach.
    pub fn select(&mut self, id: PieceId) -> RuleResult<&Reach> {
        self.expect_phase("select", &[Phase::AwaitingSelection, Phase::PieceSelected])?;
        self.state.check_selectable(id)?;
        self.reach = self.state.reach(id);
        self.selected = Some(id);
        self.phase = Phase::PieceSelected;
        debug!(piece = %id, accessible = self.reach.len(), "selected");
        Ok(&self.reach)
    }

    pub fn deselect(&mut self) -> RuleResult<()> {
        self.expect_phase("deselect", &[Phase::PieceSelected])?;
        self.clear_selection();
        self.phase = Phase::AwaitingSelection;
        Ok(())
    }

    pub fn begin_rotation(&mut self) -> RuleResult<()> {
        self.expect_phase("begin rotation", &[Phase::PieceSelected])?;
        let id = self.selected_id()?;
        let origin = self.state.check_rotation(id)?.rotation;
        self.pending = Some(PendingRotation { origin, steps: 0 });
        self.phase = Phase::RotationPending;
        Ok(())
    }

    /// Turn the pending piece one more clockwise quarter. Not committed yet.
    pub fn rotate_step(&mut self) -> RuleResult<Rotation> {
        self.expect_phase("rotate", &[Phase::RotationPending])?;
        let id = self.selected_id()?;
        let pending = self.pending.as_mut().ok_or(RuleError::NoSelection)?;
        // Cycles 1..=4 so a full turn still counts as a rotation.
        pending.steps = pending.steps % 4 + 1;
        let rotation = pending.origin.turned(pending.steps);
        self.state.preview_rotation(id, rotation)?;
        Ok(rotation)
    }

    /// Commit the pending rotation. The piece is deselected and can no
    /// longer be selected this turn.
    pub fn commit_rotation(&mut self) -> RuleResult<()> {
        self.expect_phase("commit rotation", &[Phase::RotationPending])?;
        let id = self.selected_id()?;
        let pending = self.pending.ok_or(RuleError::NoSelection)?;
        if pending.steps == 0 {
            return Err(RuleError::IllegalRotation {
                piece: id,
                reason: RotationIssue::NoSteps,
            });
        }
        self.state
            .commit_rotation(id, pending.origin.turned(pending.steps))?;
        self.clear_selection();
        self.phase = Phase::AwaitingSelection;
        Ok(())
    }

    /// Restore the rotation the piece had when the rotation began.
    pub fn cancel_rotation(&mut self) -> RuleResult<()> {
        self.expect_phase("cancel rotation", &[Phase::RotationPending])?;
        let id = self.selected_id()?;
        let pending = self.pending.take().ok_or(RuleError::NoSelection)?;
        self.state.preview_rotation(id, pending.origin)?;
        self.phase = Phase::PieceSelected;
        Ok(())
    }

    /// Move or swap the selected piece onto `destination`.
    pub fn move_or_swap(&mut self, destination: Square) -> RuleResult<MoveReport> {
        self.expect_phase("move", &[Phase::PieceSelected])?;
        let id = self.selected_id()?;
        let access = self.reach.access(destination).ok_or(RuleError::IllegalDestination {
            piece: id,
            square: destination,
        })?;
        let Some(path) = find_path_in(self.state.board(), &self.reach, id, destination) else {
            error!(piece = %id, square = %destination, "no hop path for a resolved square");
            return Err(RuleError::ResolverInvariantViolation {
                piece: id,
                square: destination,
            });
        };

        let outcome = self.state.apply_unchecked(Move::new(id, destination), access)?;
        self.clear_selection();
        self.phase = if outcome.outcome.is_some() {
            Phase::GameOver
        } else {
            Phase::TurnComplete
        };
        debug!(piece = %id, to = %destination, hops = path.len() - 1, "moved");
        Ok(MoveReport { path, outcome })
    }

    pub fn end_turn(&mut self) -> RuleResult<()> {
        self.expect_phase("end turn", &[Phase::TurnComplete])?;
        self.state.end_turn();
        self.phase = Phase::AwaitingSelection;
        Ok(())
    }

    /// Forced pass for a player without any move or swap.
    pub fn pass(&mut self) -> RuleResult<()> {
        self.expect_phase("pass", &[Phase::AwaitingSelection, Phase::PieceSelected])?;
        self.state.pass_turn()?;
        self.clear_selection();
        self.phase = Phase::AwaitingSelection;
        Ok(())
    }

    /// Play a whole action through the regular entry points and end the
    /// turn. Either the full action applies or nothing does.
    pub fn play_action(&mut self, action: &Action) -> RuleResult<MoveReport> {
        let snapshot = self.clone();
        let result = self.play_action_steps(action);
        if result.is_err() {
            *self = snapshot;
        }
        result
    }

    fn play_action_steps(&mut self, action: &Action) -> RuleResult<MoveReport> {
        if self.phase == Phase::PieceSelected {
            self.deselect()?;
        }
        for rotate in &action.rotations {
            self.select(rotate.piece)?;
            self.begin_rotation()?;
            for _ in 0..rotate.steps {
                self.rotate_step()?;
            }
            self.commit_rotation()?;
        }
        self.select(action.mv.piece)?;
        let report = self.move_or_swap(action.mv.to)?;
        if self.phase == Phase::TurnComplete {
            self.end_turn()?;
        }
        Ok(report)
    }

    /// Squares the selected piece may move or swap into.
    pub fn accessible_squares(&self) -> SquareSet {
        match self.phase {
            Phase::PieceSelected => self.reach.squares(),
            _ => SquareSet::EMPTY,
        }
    }

    pub fn reach(&self) -> Option<&Reach> {
        self.selected.map(|_| &self.reach)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    pub fn current_player(&self) -> Player {
        self.state.side_to_move()
    }

    pub fn rotation_chances_remaining(&self) -> u8 {
        self.state.rotation_chances()
    }

    pub fn scores(&self) -> [u32; 2] {
        self.state.scores()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Winning player; `None` while playing or after a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.state.outcome() {
            Some(Outcome::Winner(p)) => Some(p),
            _ => None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Deep copy of the game for simulation or background search.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }
}

#[cfg(test)]
#[path = "turn_tests.rs"]
mod turn_tests;
