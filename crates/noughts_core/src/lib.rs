//! Move validation and turn-state core for a small grid board game.
//!
//! # Architecture
//!
//! - **Validator**: pure bounds/occupancy/text checks plus a rolling log of
//!   every attempt
//! - **Game**: the turn coordinator - the only component that may write the
//!   board or toggle the current player
//!
//! The presentation layer forwards raw input to [`Game::attempt_move`] (cell
//! selection) or [`Game::attempt_manual_move`] (typed one-based coordinates),
//! then reads back the board snapshot, the current player, and the recent log
//! entries for rendering. Every outcome is a normal return value; no input,
//! however malformed, is a process-level error.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, Player, Validator};
//!
//! let mut game = Game::new();
//! let mut validator = Validator::new();
//!
//! let outcome = game.attempt_move(0, 0, &mut validator);
//! assert!(outcome.accepted());
//! assert_eq!(game.current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod types;
mod validate;

pub use game::{Game, ManualMoveOutcome, MoveOutcome};
pub use types::{Board, Cell, DEFAULT_BOARD_SIZE, Player};
pub use validate::{ManualInputResult, Reason, ValidationResult, Validator};
