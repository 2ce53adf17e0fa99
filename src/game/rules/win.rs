//! Win detection for m,n,k-games.
//!
//! The detector is brute force: every occupied square is treated as the start
//! of four candidate windows of `win_length` squares, one per direction.

use super::super::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Direction of a scan window, expressed as a step in the flattened board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Direction {
    /// Step `+1`, confined to a single row.
    #[strum(to_string = "-")]
    Horizontal,
    /// Step `+width`.
    #[strum(to_string = "|")]
    Vertical,
    /// Step `+(width + 1)`, the `\` diagonal.
    #[strum(to_string = "\\")]
    DiagonalDown,
    /// Step `+(width - 1)`, the `/` diagonal.
    #[strum(to_string = "/")]
    DiagonalUp,
}

impl Direction {
    /// Returns the index delta between consecutive squares of a window.
    pub fn step(self, width: usize) -> usize {
        match self {
            Direction::Horizontal => 1,
            Direction::Vertical => width,
            Direction::DiagonalDown => width + 1,
            Direction::DiagonalUp => width.saturating_sub(1),
        }
    }
}

/// A detected winning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player owning the run.
    pub player: Player,
    /// Absolute board indices of the run, starting square first.
    pub cells: Vec<usize>,
    /// Direction the run was found in.
    pub direction: Direction,
}

impl WinningLine {
    /// Returns true if `index` is part of the run.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Finds the first winning run on a flattened `width`-wide board.
///
/// Squares are scanned in increasing index order; at each occupied square the
/// horizontal, vertical, `\` and `/` windows are tried in that order and the
/// first full window wins.
///
/// Only the horizontal window and the `/` window are guarded against row
/// wraparound. The `\` window is bounded by the end of the board alone, so a
/// run can wrap from the right edge onto the next row and still count.
#[instrument(skip(board), fields(squares = board.len()))]
pub fn detect_winner(board: &[Square], width: usize, win_length: usize) -> Option<WinningLine> {
    if width == 0 || win_length == 0 {
        return None;
    }

    for (start, square) in board.iter().enumerate() {
        let Square::Occupied(player) = *square else {
            continue;
        };

        let row = start / width;
        let same_row = (0..win_length).all(|offset| (start + offset) / width == row);
        if same_row && let Some(cells) = sample_window(board, start, 1, win_length, player) {
            return Some(WinningLine {
                player,
                cells,
                direction: Direction::Horizontal,
            });
        }

        for direction in [Direction::Vertical, Direction::DiagonalDown] {
            if let Some(cells) = sample_window(board, start, direction.step(width), win_length, player) {
                return Some(WinningLine {
                    player,
                    cells,
                    direction,
                });
            }
        }

        if start % width >= win_length - 1
            && let Some(cells) = sample_window(
                board,
                start,
                Direction::DiagonalUp.step(width),
                win_length,
                player,
            )
        {
            return Some(WinningLine {
                player,
                cells,
                direction: Direction::DiagonalUp,
            });
        }
    }

    None
}

/// Samples `len` squares from `start` in strides of `step`.
///
/// Indices past the end of the board never match.
fn sample_window(board: &[Square], start: usize, step: usize, len: usize, player: Player) -> Option<Vec<usize>> {
    let index_at = |offset: usize| offset.checked_mul(step).and_then(|d| d.checked_add(start));

    let matches = (0..len).all(|offset| {
        index_at(offset)
            .and_then(|index| board.get(index))
            .is_some_and(|square| *square == Square::Occupied(player))
    });

    matches.then(|| (0..len).filter_map(index_at).collect())
}
