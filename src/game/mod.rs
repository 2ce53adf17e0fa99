//! Generalized tic-tac-toe: board types, win rules and the game engine.

mod action;
mod config;
mod engine;
mod error;
pub mod rules;
mod types;

pub use action::{HistoryEntry, Move};
pub use config::{BoardConfig, MAX_WIDTH, MAX_WIN_LENGTH, MIN_WIDTH, MIN_WIN_LENGTH};
pub use engine::{GameEngine, Placement, Snapshot};
pub use error::GameError;
pub use rules::{Direction, WinningLine, detect_winner};
pub use types::{Board, GameStatus, Player, Square};
