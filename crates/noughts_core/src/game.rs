//! Turn coordination: the single component allowed to mutate game state.

use crate::types::{Board, Cell, Player};
use crate::validate::{Reason, Validator};
use serde::{Deserialize, Serialize};
use tracing::instrument;

const INACTIVE_MESSAGE: &str = "Game is not active";

/// Outcome of a direct coordinate move attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    accepted: bool,
    reason: Reason,
    message: String,
}

impl MoveOutcome {
    /// Whether the move was applied to the board.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Reason code for this outcome.
    pub fn reason(&self) -> Reason {
        self.reason
    }

    /// Human-readable message for this outcome.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a manual (typed, one-based) move attempt.
///
/// Coordinates are the converted zero-based values, present only when the
/// move was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualMoveOutcome {
    accepted: bool,
    row: Option<usize>,
    col: Option<usize>,
    reason: Reason,
    message: String,
}

impl ManualMoveOutcome {
    fn reject(reason: Reason, message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            row: None,
            col: None,
            reason,
            message: message.into(),
        }
    }

    /// Whether the move was applied to the board.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Zero-based row of the applied move, present only when accepted.
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    /// Zero-based column of the applied move, present only when accepted.
    pub fn col(&self) -> Option<usize> {
        self.col
    }

    /// Reason code for this outcome.
    pub fn reason(&self) -> Reason {
        self.reason
    }

    /// Human-readable message for this outcome.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Game state: the board, the current player, and the active flag.
///
/// The game owns the board and the turn marker exclusively. It does not own
/// the validator; turn-coordination methods borrow one per call, which is
/// also where every attempt gets logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    active: bool,
}

impl Game {
    /// Creates a new active game on the default 3x3 board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            active: true,
        }
    }

    /// Creates a new active game on a board of the given dimension.
    #[instrument]
    pub fn with_board_size(size: usize) -> Self {
        Self {
            board: Board::with_size(size),
            current_player: Player::X,
            active: true,
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether the game still accepts moves.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the game inactive. This is the external termination signal;
    /// there is no transition back, and no internal trigger exists (the core
    /// performs no win or draw detection).
    #[instrument(skip(self))]
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Attempts a move at zero-based coordinates.
    ///
    /// Rejects immediately with [`Reason::GameInactive`] when the game is
    /// inactive, otherwise delegates legality to
    /// [`Validator::validate_coordinates`]. On accept the current player's
    /// mark is written and the turn marker toggles; on reject the board and
    /// marker are untouched. Every call is logged through the validator with
    /// one-based coordinates in the message.
    #[instrument(skip(self, validator))]
    pub fn attempt_move(&mut self, row: usize, col: usize, validator: &mut Validator) -> MoveOutcome {
        if !self.active {
            let outcome = MoveOutcome {
                accepted: false,
                reason: Reason::GameInactive,
                message: INACTIVE_MESSAGE.to_string(),
            };
            validator.log_validation(Self::move_log_entry(row, col, &outcome.message));
            return outcome;
        }

        let result = validator.validate_coordinates(row, col, &self.board);
        validator.log_validation(Self::move_log_entry(row, col, result.message()));

        if result.accepted() {
            self.board.set(row, col, Cell::Occupied(self.current_player));
            self.current_player = self.current_player.opponent();
        }

        MoveOutcome {
            accepted: result.accepted(),
            reason: result.reason(),
            message: result.message().to_string(),
        }
    }

    /// Attempts a move from raw one-based text input.
    ///
    /// Two-stage validation: [`Validator::validate_manual_input`] handles
    /// format and range, then the converted coordinates run through the same
    /// path as [`Game::attempt_move`], which still checks occupancy. Parse
    /// errors and board conflicts stay distinguishable failure classes.
    #[instrument(skip(self, validator))]
    pub fn attempt_manual_move(
        &mut self,
        row_text: &str,
        col_text: &str,
        validator: &mut Validator,
    ) -> ManualMoveOutcome {
        if !self.active {
            validator.log_validation(Self::manual_log_entry(row_text, col_text, INACTIVE_MESSAGE));
            return ManualMoveOutcome::reject(Reason::GameInactive, INACTIVE_MESSAGE);
        }

        let parsed = validator.validate_manual_input(row_text, col_text);
        let (Some(row), Some(col)) = (parsed.row(), parsed.col()) else {
            validator.log_validation(Self::manual_log_entry(row_text, col_text, parsed.message()));
            return ManualMoveOutcome::reject(parsed.reason(), parsed.message());
        };

        // Bounds are guaranteed by the manual check; occupancy is not.
        let outcome = self.attempt_move(row, col, validator);
        ManualMoveOutcome {
            accepted: outcome.accepted,
            row: outcome.accepted.then_some(row),
            col: outcome.accepted.then_some(col),
            reason: outcome.reason,
            message: outcome.message,
        }
    }

    fn move_log_entry(row: usize, col: usize, message: &str) -> String {
        format!(
            "Move ({}, {}): {}",
            row.saturating_add(1),
            col.saturating_add(1),
            message
        )
    }

    fn manual_log_entry(row_text: &str, col_text: &str, message: &str) -> String {
        format!("Manual move ({row_text:?}, {col_text:?}): {message}")
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
