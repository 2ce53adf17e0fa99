//! mnk_games - Unified CLI
//!
//! Generalized tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use mnk_games::{BoardConfig, GameEngine, Placement, Settings};
use std::path::PathBuf;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.settings.as_deref())?;

    match cli.command {
        None => run_play(settings, None, None, None),
        Some(Command::Play {
            width,
            win_length,
            log_file,
        }) => run_play(settings, width, win_length, log_file),
        Some(Command::Replay {
            width,
            win_length,
            json,
            moves,
        }) => run_replay(settings, width, win_length, json, moves),
    }
}

/// Run the terminal UI, logging to a file so output does not corrupt the screen.
fn run_play(
    settings: Settings,
    width: Option<usize>,
    win_length: Option<usize>,
    log_file: Option<PathBuf>,
) -> Result<()> {
    let settings = match log_file {
        Some(path) => settings.with_log_file(path),
        None => settings,
    };

    let log = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log))
        .with_ansi(false)
        .init();

    let config = settings.board_config(width, win_length)?;
    info!(width = config.width(), win_length = config.win_length(), "Starting game");
    mnk_games::tui::run_tui(config)
}

/// Apply moves from the command line and print the final position.
#[instrument(skip(settings, moves), fields(moves = moves.len()))]
fn run_replay(
    settings: Settings,
    width: Option<usize>,
    win_length: Option<usize>,
    json: bool,
    moves: Vec<usize>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config: BoardConfig = settings.board_config(width, win_length)?;
    let mut engine = GameEngine::new(config);

    for index in moves {
        let placement = engine
            .apply_move(index)
            .with_context(|| format!("Move {} rejected", index))?;
        if placement == Placement::Ignored {
            warn!(index, "Move ignored");
        }
    }

    if json {
        let snapshot = serde_json::to_string_pretty(&engine.snapshot())
            .context("Failed to serialize snapshot")?;
        println!("{}", snapshot);
    } else {
        println!("{}", engine.current_board().display());
        println!();
        println!("{}", engine.status());
    }

    Ok(())
}
