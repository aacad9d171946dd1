//! Core domain types: players, cells, and the board.

use serde::{Deserialize, Serialize};

/// Default board dimension (3x3).
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A single addressable board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

/// Square grid of cells, dimension fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board with the default 3x3 dimension.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Creates a new empty board with the given dimension.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns the board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at the given zero-based coordinates.
    ///
    /// Returns `None` when either coordinate is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Checks if the cell at the given coordinates is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Writes a cell. In-bounds coordinates are the caller's responsibility;
    /// only the turn coordinator may mutate the board.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = cell;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
