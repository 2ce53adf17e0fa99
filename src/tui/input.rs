//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves a row-major cursor on a `width`-wide board based on arrow keys.
///
/// The cursor stops at the edges.
pub fn move_cursor(cursor: usize, width: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / width, cursor % width);

    let (row, col) = match key {
        KeyCode::Right if col + 1 < width => (row, col + 1),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Down if row + 1 < width => (row + 1, col),
        KeyCode::Up if row > 0 => (row - 1, col),
        _ => (row, col),
    };

    row * width + col
}

/// Keeps a cursor on the board after it shrinks to `width`.
pub fn clamp_cursor(cursor: usize, old_width: usize, width: usize) -> usize {
    let row = (cursor / old_width).min(width - 1);
    let col = (cursor % old_width).min(width - 1);
    row * width + col
}
