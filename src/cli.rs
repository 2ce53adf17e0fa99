//! Command-line interface for mnk_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generalized tic-tac-toe on boards up to 25x25
#[derive(Parser, Debug)]
#[command(name = "mnk_games")]
#[command(about = "Generalized tic-tac-toe (m,n,k-game) in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to mnk_games.toml when present)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal UI
    Play {
        /// Board width and height (3-25)
        #[arg(short, long)]
        width: Option<usize>,

        /// Marks in a row needed to win (3 to min(width, 5))
        #[arg(short = 'k', long)]
        win_length: Option<usize>,

        /// Log file written while the UI is running
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply moves non-interactively and print the resulting position
    Replay {
        /// Board width and height (3-25)
        #[arg(short, long)]
        width: Option<usize>,

        /// Marks in a row needed to win (3 to min(width, 5))
        #[arg(short = 'k', long)]
        win_length: Option<usize>,

        /// Print the final position as JSON
        #[arg(long)]
        json: bool,

        /// Row-major board indices, applied in order
        moves: Vec<usize>,
    },
}
