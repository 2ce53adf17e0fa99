//! Engine error types.

/// Error returned when an engine operation receives an out-of-range argument.
///
/// Occupied squares and finished games are not errors: moves there are
/// silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The board index does not address a square.
    #[display("Cell {} is out of range (board has {} cells)", index, cells)]
    CellOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The history step does not exist.
    #[display("Step {} does not exist (history has {} entries)", step, len)]
    InvalidStep {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },

    /// The board width is outside the supported range.
    #[display("Board width {} is outside {}..={}", _0, super::config::MIN_WIDTH, super::config::MAX_WIDTH)]
    InvalidBoardWidth(#[error(not(source))] usize),

    /// The win length is outside the range allowed for the board width.
    #[display("Win length {} is outside {}..={}", win_length, super::config::MIN_WIN_LENGTH, max)]
    InvalidWinLength {
        /// Requested win length.
        win_length: usize,
        /// Largest win length allowed for the board width.
        max: usize,
    },
}
