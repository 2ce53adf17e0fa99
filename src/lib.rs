//! mnk_games library - generalized tic-tac-toe
//!
//! Two players alternate placing marks on a square board; a line of
//! `win_length` identical marks in any of four directions wins. Every move is
//! kept as a board snapshot so earlier positions can be revisited.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over flattened boards
//! - **Engine**: move application, history browsing, reconfiguration
//! - **Settings**: TOML settings for the binary
//! - **TUI**: terminal presentation layer
//!
//! # Example
//!
//! ```
//! use mnk_games::{BoardConfig, GameEngine, GameStatus, Player};
//!
//! # fn example() -> Result<(), mnk_games::GameError> {
//! let mut engine = GameEngine::new(BoardConfig::new(3, 3)?);
//! for index in [0, 4, 1, 5, 2] {
//!     engine.apply_move(index)?;
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod settings;
pub mod tui;

// Crate-level exports - Game types
pub use game::{
    Board, BoardConfig, Direction, GameEngine, GameError, GameStatus, HistoryEntry,
    MAX_WIDTH, MAX_WIN_LENGTH, MIN_WIDTH, MIN_WIN_LENGTH, Move, Placement, Player, Snapshot,
    Square, WinningLine, detect_winner,
};

// Crate-level exports - Rules
pub use game::rules::{is_draw, is_full};

// Crate-level exports - Settings
pub use settings::{DEFAULT_SETTINGS_FILE, Settings, SettingsError};
