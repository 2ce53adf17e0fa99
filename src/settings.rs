//! Settings file for the `mnk_games` binary.

use crate::game::{BoardConfig, GameError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings file read when no `--settings` path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "mnk_games.toml";

/// User settings, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Initial board width.
    #[serde(default = "default_width")]
    width: usize,

    /// Initial win length.
    #[serde(default = "default_win_length")]
    win_length: usize,

    /// Log file used while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_width() -> usize {
    *BoardConfig::default().width()
}

fn default_win_length() -> usize {
    *BoardConfig::default().win_length()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("mnk_games.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: default_width(),
            win_length: default_win_length(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(width = settings.width, win_length = settings.win_length, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if given, otherwise the default file when present,
    /// otherwise built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
                Self::from_file(DEFAULT_SETTINGS_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Builds the board configuration, applying command-line overrides.
    ///
    /// A width override without a win-length override lowers the win length
    /// to fit the new board.
    #[instrument(skip(self))]
    pub fn board_config(
        &self,
        width: Option<usize>,
        win_length: Option<usize>,
    ) -> Result<BoardConfig, GameError> {
        let mut config = BoardConfig::new(self.width, self.win_length)?;
        if let Some(width) = width {
            config = config.with_width_clamped(width)?;
        }
        if let Some(win_length) = win_length {
            config = BoardConfig::new(*config.width(), win_length)?;
        }
        Ok(config)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
