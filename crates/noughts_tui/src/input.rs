//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cursor one cell in the direction of an arrow key, clamping at
/// the board edges. Any other key leaves the cursor in place.
pub fn move_cursor(cursor: (usize, usize), key: KeyCode, size: usize) -> (usize, usize) {
    let (row, col) = cursor;
    let last = size.saturating_sub(1);

    match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(last)),
        _ => cursor,
    }
}
