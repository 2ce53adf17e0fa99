//! Application state and key handling.

use super::input::{clamp_cursor, move_cursor};
use crate::game::{BoardConfig, GameEngine, GameError, Placement};
use crossterm::event::KeyCode;
use tracing::{debug, instrument, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            engine: GameEngine::new(config),
            cursor: 0,
            message: None,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the last error or notice, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        self.message = None;
        let config = *self.engine.config();
        let width = *config.width();
        let win_length = *config.win_length();

        let result = match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, width, key);
                Ok(())
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize(width + 1),
            KeyCode::Char('-') => self.resize(width.saturating_sub(1)),
            KeyCode::Char(']') => self.engine.reconfigure(width, win_length + 1),
            KeyCode::Char('[') => self.engine.reconfigure(width, win_length.saturating_sub(1)),
            KeyCode::Char('j') | KeyCode::PageDown => {
                self.engine.jump_to(self.engine.current_step() + 1)
            }
            KeyCode::Char('k') | KeyCode::PageUp => match self.engine.current_step() {
                0 => Ok(()),
                step => self.engine.jump_to(step - 1),
            },
            KeyCode::Home => self.engine.jump_to(0),
            KeyCode::End => self.engine.jump_to(self.engine.history().len() - 1),
            KeyCode::Char('s') => {
                self.engine.toggle_sort();
                Ok(())
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            warn!(error = %e, "Key rejected");
            self.message = Some(e.to_string());
        }
        Flow::Continue
    }

    fn place(&mut self) -> Result<(), GameError> {
        match self.engine.apply_move(self.cursor)? {
            Placement::Placed(placed) => debug!(%placed, "Placed mark"),
            Placement::Ignored if self.engine.status().is_finished() => {
                self.message = Some("Game over, press r to reset".to_string())
            }
            Placement::Ignored => self.message = Some("Square unavailable".to_string()),
        }
        Ok(())
    }

    fn resize(&mut self, width: usize) -> Result<(), GameError> {
        let old_width = *self.engine.config().width();
        let config = self.engine.config().with_width_clamped(width)?;
        self.engine.reconfigure(*config.width(), *config.win_length())?;
        self.cursor = clamp_cursor(self.cursor, old_width, width);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, Player};

    fn app(width: usize, win_length: usize) -> App {
        App::new(BoardConfig::new(width, win_length).unwrap())
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app(3, 3);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert!(!app.engine().current_board().is_empty(4));
        assert_eq!(app.engine().next_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_sets_message() {
        let mut app = app(3, 3);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.message(), Some("Square unavailable"));
        assert_eq!(app.engine().current_step(), 1);
    }

    #[test]
    fn test_move_after_win_explains_game_over() {
        let mut app = app(3, 3);
        // X: 0, 1, 2 along the top row; O: 3, 4 on the middle row.
        for key in [
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Right,
            KeyCode::Enter,
        ] {
            app.handle_key(key);
        }
        assert_eq!(app.engine().status(), GameStatus::Won(Player::X));
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over, press r to reset"));
        assert_eq!(app.engine().current_step(), 5);
    }

    #[test]
    fn test_shrinking_board_clamps_win_length_and_cursor() {
        let mut app = app(4, 4);
        for _ in 0..3 {
            app.handle_key(KeyCode::Right);
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.cursor(), 15);
        app.handle_key(KeyCode::Char('-'));
        assert_eq!(*app.engine().config().width(), 3);
        assert_eq!(*app.engine().config().win_length(), 3);
        assert_eq!(app.cursor(), 8);
    }

    #[test]
    fn test_out_of_range_resize_reports_error() {
        let mut app = app(3, 3);
        app.handle_key(KeyCode::Char('-'));
        assert!(app.message().is_some());
        assert_eq!(*app.engine().config().width(), 3);
    }

    #[test]
    fn test_history_browsing() {
        let mut app = app(3, 3);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('k'));
        assert_eq!(app.engine().current_step(), 1);
        app.handle_key(KeyCode::Home);
        assert_eq!(app.engine().status(), GameStatus::NextPlayer(Player::X));
        app.handle_key(KeyCode::Char('j'));
        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.engine().current_step(), 2);
        app.handle_key(KeyCode::Char('j'));
        assert!(app.message().is_some());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(3, 3);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Char('s')), Flow::Continue);
        assert!(!app.engine().sort_ascending());
    }
}
