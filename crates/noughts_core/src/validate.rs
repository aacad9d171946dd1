//! Input validation: bounds, occupancy, and manual text entry.
//!
//! The validator is stateless per check; the only state it carries is the
//! rolling log of validation messages, appended explicitly by callers.

use crate::types::{Board, DEFAULT_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Reason code attached to every validation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Reason {
    /// The input passed all checks.
    #[display("valid")]
    Valid,
    /// Coordinates fall outside the board.
    #[display("out of bounds")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[display("cell occupied")]
    CellOccupied,
    /// One or both manual-input fields are blank.
    #[display("empty input")]
    EmptyInput,
    /// Manual input failed integer parsing.
    #[display("not a number")]
    NotANumber,
    /// A move was attempted while the game is inactive.
    #[display("game inactive")]
    GameInactive,
}

/// Outcome of a coordinate validation, immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    accepted: bool,
    reason: Reason,
    message: String,
}

impl ValidationResult {
    fn accept(message: impl Into<String>) -> Self {
        Self {
            accepted: true,
            reason: Reason::Valid,
            message: message.into(),
        }
    }

    fn reject(reason: Reason, message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            reason,
            message: message.into(),
        }
    }

    /// Whether the input passed validation.
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

/// Outcome of a manual text-input validation.
///
/// Coordinates are zero-based and present only when the input was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualInputResult {
    accepted: bool,
    row: Option<usize>,
    col: Option<usize>,
    reason: Reason,
    message: String,
}

impl ManualInputResult {
    fn accept(row: usize, col: usize, message: impl Into<String>) -> Self {
        Self {
            accepted: true,
            row: Some(row),
            col: Some(col),
            reason: Reason::Valid,
            message: message.into(),
        }
    }

    fn reject(reason: Reason, message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            row: None,
            col: None,
            reason,
            message: message.into(),
        }
    }

    /// Whether the input passed validation.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Converted zero-based row, present only when accepted.
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    /// Converted zero-based column, present only when accepted.
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

/// Legality checks for proposed moves, plus the validation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    board_size: usize,
    log: Vec<String>,
}

impl Validator {
    /// Creates a validator for the default 3x3 board.
    pub fn new() -> Self {
        Self::with_board_size(DEFAULT_BOARD_SIZE)
    }

    /// Creates a validator for a board of the given dimension.
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            log: Vec::new(),
        }
    }

    /// Returns the board dimension this validator checks against.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Validates zero-based coordinates against bounds and occupancy.
    ///
    /// Checks bounds first, then occupancy. Does not touch the log; the
    /// caller decides whether the attempt is worth recording.
    #[instrument(skip(self, board))]
    pub fn validate_coordinates(&self, row: usize, col: usize, board: &Board) -> ValidationResult {
        if row >= self.board_size || col >= self.board_size {
            return ValidationResult::reject(
                Reason::OutOfBounds,
                format!(
                    "Coordinates must be between 0 and {}",
                    self.board_size.saturating_sub(1)
                ),
            );
        }

        if !board.is_empty(row, col) {
            return ValidationResult::reject(Reason::CellOccupied, "Cell is already occupied");
        }

        ValidationResult::accept("Move is valid")
    }

    /// Validates one-based textual coordinates and converts them to zero-based.
    ///
    /// Empty check, then integer parse on both fields (a single bad field
    /// rejects the whole call), then range check phrased in one-based terms.
    /// Occupancy is deliberately not checked here; callers must still run the
    /// converted coordinates through [`Validator::validate_coordinates`]
    /// before mutating any state.
    #[instrument(skip(self))]
    pub fn validate_manual_input(&self, row_text: &str, col_text: &str) -> ManualInputResult {
        let row_text = row_text.trim();
        let col_text = col_text.trim();

        if row_text.is_empty() || col_text.is_empty() {
            return ManualInputResult::reject(Reason::EmptyInput, "Enter both coordinates");
        }

        let (Ok(row), Ok(col)) = (row_text.parse::<i64>(), col_text.parse::<i64>()) else {
            return ManualInputResult::reject(Reason::NotANumber, "Coordinates must be numbers");
        };

        // Convert from the one-based user convention.
        let row = row - 1;
        let col = col - 1;

        let size = self.board_size as i64;
        if row < 0 || row >= size || col < 0 || col >= size {
            return ManualInputResult::reject(
                Reason::OutOfBounds,
                format!("Coordinates must be between 1 and {}", self.board_size),
            );
        }

        ManualInputResult::accept(row as usize, col as usize, "Coordinates are valid")
    }

    /// Appends a message to the validation log. No deduplication, no cap.
    pub fn log_validation(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
    }

    /// Returns the last `count` log entries in chronological order.
    ///
    /// Returns the whole log when `count` exceeds its length, and an empty
    /// slice when the log is empty.
    pub fn recent_logs(&self, count: usize) -> &[String] {
        let start = self.log.len().saturating_sub(count);
        &self.log[start..]
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
