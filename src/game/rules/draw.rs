//! Draw detection for m,n,k-games.

use super::super::{Board, Square};
use super::win::detect_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board), fields(width = board.width()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winning run under `win_length` is a draw.
#[instrument(skip(board), fields(width = board.width()))]
pub fn is_draw(board: &Board, win_length: usize) -> bool {
    is_full(board) && detect_winner(board.squares(), board.width(), win_length).is_none()
}
