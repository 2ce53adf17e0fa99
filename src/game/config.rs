//! Board configuration.

use super::GameError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Smallest supported board width.
pub const MIN_WIDTH: usize = 3;
/// Largest supported board width.
pub const MAX_WIDTH: usize = 25;
/// Smallest supported win length.
pub const MIN_WIN_LENGTH: usize = 3;
/// Win length cap, applied regardless of board width.
pub const MAX_WIN_LENGTH: usize = 5;

/// Validated board width and win length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns (and rows).
    width: usize,
    /// Marks in a row needed to win.
    win_length: usize,
}

impl BoardConfig {
    /// Creates a configuration, rejecting out-of-range values.
    #[instrument]
    pub fn new(width: usize, win_length: usize) -> Result<Self, GameError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
            warn!(width, "Rejected board width");
            return Err(GameError::InvalidBoardWidth(width));
        }
        let max = Self::max_win_length(width);
        if !(MIN_WIN_LENGTH..=max).contains(&win_length) {
            warn!(win_length, max, "Rejected win length");
            return Err(GameError::InvalidWinLength { win_length, max });
        }
        Ok(Self { width, win_length })
    }

    /// Largest win length allowed on a board of the given width.
    pub fn max_win_length(width: usize) -> usize {
        width.min(MAX_WIN_LENGTH)
    }

    /// Returns a copy with a new width, lowering the win length if it no
    /// longer fits.
    #[instrument]
    pub fn with_width_clamped(self, width: usize) -> Result<Self, GameError> {
        let win_length = self.win_length.min(Self::max_win_length(width));
        Self::new(width, win_length.max(MIN_WIN_LENGTH))
    }

    /// Number of squares on the board.
    pub fn cells(&self) -> usize {
        self.width * self.width
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 5,
            win_length: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_five_by_five() {
        let config = BoardConfig::default();
        assert_eq!(*config.width(), 5);
        assert_eq!(*config.win_length(), 5);
        assert_eq!(config.cells(), 25);
    }

    #[test]
    fn test_width_bounds() {
        assert!(BoardConfig::new(3, 3).is_ok());
        assert!(BoardConfig::new(25, 5).is_ok());
        assert_eq!(BoardConfig::new(2, 3), Err(GameError::InvalidBoardWidth(2)));
        assert_eq!(BoardConfig::new(26, 3), Err(GameError::InvalidBoardWidth(26)));
    }

    #[test]
    fn test_win_length_capped_at_five() {
        assert_eq!(
            BoardConfig::new(10, 6),
            Err(GameError::InvalidWinLength { win_length: 6, max: 5 })
        );
        assert_eq!(
            BoardConfig::new(4, 5),
            Err(GameError::InvalidWinLength { win_length: 5, max: 4 })
        );
        assert!(BoardConfig::new(4, 2).is_err());
    }

    #[test]
    fn test_with_width_clamped_lowers_win_length() {
        let config = BoardConfig::new(7, 5).unwrap();
        let smaller = config.with_width_clamped(4).unwrap();
        assert_eq!(*smaller.win_length(), 4);
        let larger = smaller.with_width_clamped(9).unwrap();
        assert_eq!(*larger.win_length(), 4);
        assert!(config.with_width_clamped(30).is_err());
    }
}
