//! Application state: one game, one validator, and the input modes.

use crossterm::event::KeyCode;
use noughts_core::{Game, Validator};
use tracing::debug;

use crate::input;

/// Number of validation-log lines shown in the log panel.
pub const LOG_LINES: usize = 10;

/// How the next key press is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Arrow keys move the board cursor; Enter places a mark.
    Cursor,
    /// Keys type into the one-based row/col entry fields.
    Manual,
}

/// Active field of the manual-entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualField {
    /// The row entry field.
    Row,
    /// The column entry field.
    Col,
}

/// Main application state.
pub struct App {
    game: Game,
    validator: Validator,
    mode: InputMode,
    cursor: (usize, usize),
    row_entry: String,
    col_entry: String,
    field: ManualField,
    status: String,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            validator: Validator::new(),
            mode: InputMode::Cursor,
            cursor: (0, 0),
            row_entry: String::new(),
            col_entry: String::new(),
            field: ManualField::Row,
            status: "Player X's turn. Move with the arrow keys, Enter places a mark.".to_string(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Gets the board cursor as zero-based (row, col).
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Gets the manual row entry text.
    pub fn row_entry(&self) -> &str {
        &self.row_entry
    }

    /// Gets the manual column entry text.
    pub fn col_entry(&self) -> &str {
        &self.col_entry
    }

    /// Gets the active manual-entry field.
    pub fn field(&self) -> ManualField {
        self.field
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Gets the most recent validation-log entries for the log panel.
    pub fn recent_logs(&self) -> &[String] {
        self.validator.recent_logs(LOG_LINES)
    }

    /// Attempts a move at the cursor position.
    pub fn select_cell(&mut self) {
        let (row, col) = self.cursor;
        debug!(row, col, "Cell selected");

        let outcome = self.game.attempt_move(row, col, &mut self.validator);
        self.status = if outcome.accepted() {
            format!("Player {}'s turn", self.game.current_player())
        } else {
            format!("{}. Try again.", outcome.message())
        };
    }

    /// Submits the manual-entry form.
    pub fn submit_manual(&mut self) {
        debug!(row = %self.row_entry, col = %self.col_entry, "Manual coordinates submitted");

        let outcome =
            self.game
                .attempt_manual_move(&self.row_entry, &self.col_entry, &mut self.validator);
        if outcome.accepted() {
            // Park the cursor on the placed mark and return to board navigation.
            if let (Some(row), Some(col)) = (outcome.row(), outcome.col()) {
                self.cursor = (row, col);
            }
            self.row_entry.clear();
            self.col_entry.clear();
            self.field = ManualField::Row;
            self.mode = InputMode::Cursor;
            self.status = format!("Player {}'s turn", self.game.current_player());
        } else {
            self.status = format!("{}. Try again.", outcome.message());
        }
    }

    /// Moves the board cursor.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key, self.game.board().size());
    }

    /// Switches to manual coordinate entry.
    pub fn enter_manual(&mut self) {
        self.mode = InputMode::Manual;
        self.field = ManualField::Row;
        self.status = "Enter one-based coordinates. Tab switches fields, Enter submits, Esc cancels."
            .to_string();
    }

    /// Leaves manual entry without submitting.
    pub fn leave_manual(&mut self) {
        self.mode = InputMode::Cursor;
        self.row_entry.clear();
        self.col_entry.clear();
        self.field = ManualField::Row;
        self.status = format!("Player {}'s turn", self.game.current_player());
    }

    /// Toggles the active manual-entry field.
    pub fn switch_field(&mut self) {
        self.field = match self.field {
            ManualField::Row => ManualField::Col,
            ManualField::Col => ManualField::Row,
        };
    }

    /// Appends a character to the active entry field.
    ///
    /// Anything typed is accepted here; the core validator is the one place
    /// that decides what parses.
    pub fn push_entry(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let entry = match self.field {
            ManualField::Row => &mut self.row_entry,
            ManualField::Col => &mut self.col_entry,
        };
        if entry.len() < 8 {
            entry.push(c);
        }
    }

    /// Removes the last character from the active entry field.
    pub fn pop_entry(&mut self) {
        let entry = match self.field {
            ManualField::Row => &mut self.row_entry,
            ManualField::Col => &mut self.col_entry,
        };
        entry.pop();
    }

    /// Restarts with a fresh game and a fresh validation log.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        *self = App::new();
    }
}
