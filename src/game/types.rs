//! Core domain types for m,n,k-games.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player whose mark is placed at the given history step.
    ///
    /// Step 0 is the empty board, so X owns every even step and O every odd one.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns the single-character symbol used when rendering the square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Square board of `width × width` squares.
///
/// Boards are snapshots: the engine clones the current board before placing a
/// mark, so earlier history entries are never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Number of columns (and rows).
    width: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            squares: vec![Square::Empty; width * width],
        }
    }

    /// Returns the board width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of squares.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), &'static str> {
        let slot = self
            .squares
            .get_mut(index)
            .ok_or("Position out of bounds")?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns the number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string, one row per line.
    pub fn display(&self) -> String {
        self.squares
            .chunks(self.width.max(1))
            .map(|row| {
                row.iter()
                    .map(|s| s.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Status line derived from the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A winning run exists on the current board.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Every square is filled and nobody won.
    #[display("DRAW!")]
    Draw,
    /// Game is ongoing; the given player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Returns true for the terminal states.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}
