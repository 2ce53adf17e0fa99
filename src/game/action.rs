//! Moves and history entries.
//!
//! A move records where a mark landed; a history entry pairs the board
//! snapshot with the move that produced it.

use super::Board;
use serde::{Deserialize, Serialize};

/// A placed mark, addressed by row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major board index into a move.
    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            row: index / width,
            col: index % width,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(col: {}, row: {})", self.col, self.row)
    }
}

/// One step of the game: the board after a move, and the move itself.
///
/// The first entry of every history is the empty board with no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// Creates the start-of-game entry for a board of the given width.
    pub fn start(width: usize) -> Self {
        Self {
            board: Board::new(width),
            last_move: None,
        }
    }

    /// Creates an entry for a board produced by `last_move`.
    pub fn new(board: Board, last_move: Move) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this snapshot, `None` for the start entry.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}
