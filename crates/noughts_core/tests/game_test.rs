//! Tests for the turn coordinator.

use noughts_core::{Cell, Game, Player, Reason, Validator};

#[test]
fn accepted_moves_alternate_players() {
    let mut game = Game::new();
    let mut validator = Validator::new();
    assert_eq!(game.current_player(), Player::X);

    assert!(game.attempt_move(0, 0, &mut validator).accepted());
    assert_eq!(game.current_player(), Player::O);

    // Same cell again: rejected, marker stays with O.
    assert!(!game.attempt_move(0, 0, &mut validator).accepted());
    assert_eq!(game.current_player(), Player::O);

    assert!(game.attempt_move(1, 1, &mut validator).accepted());
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn accepted_move_writes_the_mover_not_the_next_player() {
    let mut game = Game::new();
    let mut validator = Validator::new();

    game.attempt_move(2, 1, &mut validator);
    assert_eq!(game.board().get(2, 1), Some(Cell::Occupied(Player::X)));

    game.attempt_move(0, 2, &mut validator);
    assert_eq!(game.board().get(0, 2), Some(Cell::Occupied(Player::O)));
}

#[test]
fn rejected_moves_leave_state_untouched_and_are_idempotent() {
    let mut game = Game::new();
    let mut validator = Validator::new();
    game.attempt_move(0, 0, &mut validator);

    let before = game.clone();
    let first = game.attempt_move(0, 0, &mut validator);
    assert!(!first.accepted());
    assert_eq!(first.reason(), Reason::CellOccupied);

    // Repeating the rejection any number of times changes nothing.
    for _ in 0..5 {
        let again = game.attempt_move(0, 0, &mut validator);
        assert_eq!(again, first);
    }
    assert_eq!(game, before);
}

#[test]
fn out_of_bounds_move_is_rejected_without_mutation() {
    let mut game = Game::new();
    let mut validator = Validator::new();
    let before = game.clone();

    let outcome = game.attempt_move(7, 0, &mut validator);
    assert!(!outcome.accepted());
    assert_eq!(outcome.reason(), Reason::OutOfBounds);
    assert_eq!(game, before);
}

#[test]
fn every_attempt_is_logged_with_one_based_coordinates() {
    let mut game = Game::new();
    let mut validator = Validator::new();

    game.attempt_move(0, 0, &mut validator);
    game.attempt_move(0, 0, &mut validator);
    game.attempt_move(5, 5, &mut validator);

    let logs = validator.recent_logs(10);
    assert_eq!(logs.len(), 3);
    assert!(logs[0].contains("(1, 1)"));
    assert!(logs[0].contains("Move is valid"));
    assert!(logs[1].contains("(1, 1)"));
    assert!(logs[1].contains("already occupied"));
    assert!(logs[2].contains("(6, 6)"));
}

#[test]
fn manual_move_applies_converted_coordinates() {
    let mut game = Game::new();
    let mut validator = Validator::new();

    let outcome = game.attempt_manual_move("2", "3", &mut validator);
    assert!(outcome.accepted());
    assert_eq!(outcome.row(), Some(1));
    assert_eq!(outcome.col(), Some(2));
    assert_eq!(game.board().get(1, 2), Some(Cell::Occupied(Player::X)));
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn manual_move_rejections_carry_no_coordinates() {
    let mut game = Game::new();
    let mut validator = Validator::new();

    for (row_text, col_text, reason) in [
        ("", "", Reason::EmptyInput),
        ("abc", "def", Reason::NotANumber),
        ("5", "5", Reason::OutOfBounds),
    ] {
        let outcome = game.attempt_manual_move(row_text, col_text, &mut validator);
        assert!(!outcome.accepted());
        assert_eq!(outcome.reason(), reason);
        assert_eq!(outcome.row(), None);
        assert_eq!(outcome.col(), None);
    }

    // None of those attempts touched the board or the marker.
    assert_eq!(game.current_player(), Player::X);
    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn manual_move_still_checks_occupancy_in_the_second_stage() {
    let mut game = Game::new();
    let mut validator = Validator::new();
    game.attempt_move(0, 0, &mut validator);

    let outcome = game.attempt_manual_move("1", "1", &mut validator);
    assert!(!outcome.accepted());
    assert_eq!(outcome.reason(), Reason::CellOccupied);
    assert_eq!(outcome.row(), None);
    assert_eq!(outcome.col(), None);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn manual_move_rejections_are_logged() {
    let mut game = Game::new();
    let mut validator = Validator::new();

    game.attempt_manual_move("abc", "def", &mut validator);
    let logs = validator.recent_logs(1);
    assert!(logs[0].contains("abc"));
    assert!(logs[0].contains("must be numbers"));
}

#[test]
fn inactive_game_rejects_everything() {
    let mut game = Game::new();
    let mut validator = Validator::new();
    game.attempt_move(0, 0, &mut validator);

    game.deactivate();
    assert!(!game.is_active());
    let before = game.clone();

    // Previously-valid coordinates, out-of-bounds coordinates, and every
    // manual-input shape all fail the same way.
    for (row, col) in [(1, 1), (0, 0), (9, 9)] {
        let outcome = game.attempt_move(row, col, &mut validator);
        assert!(!outcome.accepted());
        assert_eq!(outcome.reason(), Reason::GameInactive);
        assert_eq!(outcome.message(), "Game is not active");
    }
    for (row_text, col_text) in [("2", "2"), ("abc", "def"), ("", "")] {
        let outcome = game.attempt_manual_move(row_text, col_text, &mut validator);
        assert!(!outcome.accepted());
        assert_eq!(outcome.reason(), Reason::GameInactive);
    }

    assert_eq!(game, before);
}

#[test]
fn inactive_rejections_are_still_logged() {
    let mut game = Game::new();
    let mut validator = Validator::new();
    game.deactivate();

    game.attempt_move(0, 0, &mut validator);
    let logs = validator.recent_logs(1);
    assert!(logs[0].contains("(1, 1)"));
    assert!(logs[0].contains("not active"));
}

#[test]
fn larger_boards_validate_against_their_own_dimension() {
    let mut game = Game::with_board_size(5);
    let mut validator = Validator::with_board_size(5);

    assert!(game.attempt_move(4, 4, &mut validator).accepted());
    let outcome = game.attempt_move(5, 0, &mut validator);
    assert_eq!(outcome.reason(), Reason::OutOfBounds);
    assert!(outcome.message().contains("between 0 and 4"));
}
