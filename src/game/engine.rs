//! Game engine: move application, history browsing and reconfiguration.
//!
//! The engine owns the board history. Every move clones the current snapshot
//! before placing a mark, so any earlier step can be revisited with
//! [`GameEngine::jump_to`]. Turn and winner are derived from the current step
//! rather than tracked independently.

use super::rules::{WinningLine, detect_winner, is_draw};
use super::{Board, BoardConfig, GameError, GameStatus, HistoryEntry, Move, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of [`GameEngine::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The mark was placed.
    Placed(Move),
    /// The square was occupied or the game was already won.
    Ignored,
}

/// Generalized tic-tac-toe engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: BoardConfig,
    history: Vec<HistoryEntry>,
    current_step: usize,
    winning_line: Option<WinningLine>,
    sort_ascending: bool,
}

impl GameEngine {
    /// Creates an engine with an empty board.
    #[instrument]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            history: vec![HistoryEntry::start(*config.width())],
            current_step: 0,
            winning_line: None,
            sort_ascending: true,
        }
    }

    /// Places the current player's mark at `index`.
    ///
    /// Any history after the current step is discarded first. Moves onto an
    /// occupied square, or after a winner is decided, leave the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfRange`] if `index` is not on the board.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Placement, GameError> {
        let cells = self.config.cells();
        if index >= cells {
            warn!(index, cells, "Move outside the board");
            return Err(GameError::CellOutOfRange { index, cells });
        }

        if self.winning_line.is_some() || !self.current_board().is_empty(index) {
            debug!(index, "Move ignored");
            return Ok(Placement::Ignored);
        }

        let player = self.next_player();
        let mut board = self.current_board().clone();
        board
            .set(index, Square::Occupied(player))
            .map_err(|_| GameError::CellOutOfRange { index, cells })?;

        let width = *self.config.width();
        let placed = Move::from_index(index, width);

        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry::new(board, placed));
        self.current_step = self.history.len() - 1;
        self.refresh_winner();

        match self.status() {
            GameStatus::Won(winner) => info!(%winner, step = self.current_step, "Game won"),
            GameStatus::Draw => info!(step = self.current_step, "Game drawn"),
            GameStatus::NextPlayer(_) => debug!(%placed, step = self.current_step, "Move applied"),
        }

        Ok(Placement::Placed(placed))
    }

    /// Moves the current step to `step`, recomputing turn and winner.
    ///
    /// History is kept intact; the next move truncates it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStep`] if `step` is not in the history.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            warn!(step, len = self.history.len(), "Jump outside history");
            return Err(GameError::InvalidStep {
                step,
                len: self.history.len(),
            });
        }

        self.current_step = step;
        self.refresh_winner();
        debug!(step, status = %self.status(), "Jumped");
        Ok(())
    }

    /// Replaces the board dimensions and starts a fresh game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardWidth`] or [`GameError::InvalidWinLength`]
    /// when the values are out of range; the engine is left unchanged.
    #[instrument(skip(self))]
    pub fn reconfigure(&mut self, width: usize, win_length: usize) -> Result<(), GameError> {
        self.config = BoardConfig::new(width, win_length)?;
        info!(width, win_length, "Board reconfigured");
        self.reset();
        Ok(())
    }

    /// Starts a fresh game with the current dimensions.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history = vec![HistoryEntry::start(*self.config.width())];
        self.current_step = 0;
        self.winning_line = None;
        self.sort_ascending = true;
        debug!("Game reset");
    }

    /// Derives the status line from the current step.
    pub fn status(&self) -> GameStatus {
        if let Some(line) = &self.winning_line {
            GameStatus::Won(line.player)
        } else if is_draw(self.current_board(), *self.config.win_length()) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// Returns the board configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns every history entry, including the start entry.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the step being shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the board at the current step.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_step].board()
    }

    /// True when X moves next.
    pub fn is_x_turn(&self) -> bool {
        self.current_step % 2 == 0
    }

    /// Returns the player who moves next.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Returns the winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winning_line.as_ref().map(|line| line.player)
    }

    /// Returns the winning run on the current board, if any.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Returns the indices of the winning run, if any.
    pub fn winning_cells(&self) -> Option<&[usize]> {
        self.winning_line.as_ref().map(|line| line.cells.as_slice())
    }

    /// Order in which the history list is displayed.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Flips the history display order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_ascending = !self.sort_ascending;
    }

    /// History step indices in display order.
    pub fn history_order(&self) -> Vec<usize> {
        let steps = 0..self.history.len();
        if self.sort_ascending {
            steps.collect()
        } else {
            steps.rev().collect()
        }
    }

    /// Label of a history list entry, `None` if `step` does not exist.
    pub fn history_label(&self, step: usize) -> Option<String> {
        let entry = self.history.get(step)?;
        Some(match entry.last_move() {
            None => "Go to game start".to_string(),
            Some(placed) => format!("Go to move #{} {}", step, placed),
        })
    }

    /// Captures a serializable view of the engine.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config,
            step: self.current_step,
            status: self.status(),
            board: self.current_board().clone(),
            winning_cells: self.winning_cells().map(<[usize]>::to_vec),
            history: (0..self.history.len())
                .filter_map(|step| self.history_label(step))
                .collect(),
        }
    }

    fn refresh_winner(&mut self) {
        let board = self.current_board();
        self.winning_line = detect_winner(board.squares(), board.width(), *self.config.win_length());
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

/// Serializable view of a [`GameEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board dimensions.
    pub config: BoardConfig,
    /// Current step.
    pub step: usize,
    /// Status at the current step.
    pub status: GameStatus,
    /// Board at the current step.
    pub board: Board,
    /// Winning run indices, if any.
    pub winning_cells: Option<Vec<usize>>,
    /// History list labels in step order.
    pub history: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(width: usize, win_length: usize) -> GameEngine {
        GameEngine::new(BoardConfig::new(width, win_length).unwrap())
    }

    fn play(engine: &mut GameEngine, moves: &[usize]) {
        for &index in moves {
            engine.apply_move(index).unwrap();
        }
    }

    #[test]
    fn test_new_engine_starts_empty() {
        let engine = GameEngine::default();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.current_step(), 0);
        assert_eq!(engine.current_board().len(), 25);
        assert!(engine.is_x_turn());
        assert_eq!(engine.status(), GameStatus::NextPlayer(Player::X));
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let mut engine = engine(3, 3);
        assert_eq!(engine.apply_move(4).unwrap(), Placement::Placed(Move::new(1, 1)));
        assert_eq!(engine.current_board().get(4), Some(Square::Occupied(Player::X)));
        assert!(!engine.is_x_turn());
        engine.apply_move(0).unwrap();
        assert_eq!(engine.current_board().get(0), Some(Square::Occupied(Player::O)));
        assert_eq!(engine.next_player(), Player::X);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut engine = engine(3, 3);
        engine.apply_move(4).unwrap();
        assert_eq!(engine.apply_move(4).unwrap(), Placement::Ignored);
        assert_eq!(engine.current_step(), 1);
        assert_eq!(engine.history().len(), 2);
        assert_eq!(engine.next_player(), Player::O);
    }

    #[test]
    fn test_out_of_range_move_is_rejected() {
        let mut engine = engine(3, 3);
        assert_eq!(
            engine.apply_move(9),
            Err(GameError::CellOutOfRange { index: 9, cells: 9 })
        );
        assert_eq!(engine.current_step(), 0);
    }

    #[test]
    fn test_top_row_win() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[0, 4, 1, 5, 2]);
        assert_eq!(engine.winner(), Some(Player::X));
        assert_eq!(engine.winning_cells(), Some(&[0, 1, 2][..]));
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[0, 4, 1, 5, 2]);
        assert_eq!(engine.apply_move(8).unwrap(), Placement::Ignored);
        assert_eq!(engine.current_step(), 5);
    }

    #[test]
    fn test_jump_back_recomputes_winner_and_turn() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[0, 4, 1, 5, 2]);
        engine.jump_to(3).unwrap();
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.winning_cells(), None);
        assert!(!engine.is_x_turn());
        assert_eq!(engine.history().len(), 6);

        engine.jump_to(5).unwrap();
        assert_eq!(engine.winner(), Some(Player::X));
    }

    #[test]
    fn test_move_after_jump_truncates_future() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[0, 4, 1, 5]);
        engine.jump_to(2).unwrap();
        engine.apply_move(8).unwrap();
        assert_eq!(engine.history().len(), 4);
        assert_eq!(engine.current_step(), 3);
        assert_eq!(engine.history()[3].last_move(), Some(Move::new(2, 2)));
        assert!(engine.current_board().is_empty(1));
    }

    #[test]
    fn test_earlier_snapshots_are_untouched() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[0, 4]);
        assert_eq!(engine.history()[0].board().occupied(), 0);
        assert_eq!(engine.history()[1].board().occupied(), 1);
        assert_eq!(engine.history()[2].board().occupied(), 2);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[0]);
        assert_eq!(engine.jump_to(2), Err(GameError::InvalidStep { step: 2, len: 2 }));
        assert_eq!(engine.current_step(), 1);
    }

    #[test]
    fn test_draw() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.status(), GameStatus::Draw);
        assert_eq!(engine.apply_move(0).unwrap(), Placement::Ignored);
    }

    #[test]
    fn test_draw_status_agrees_with_draw_rule_after_jump() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);
        engine.jump_to(4).unwrap();
        assert_eq!(engine.status(), GameStatus::NextPlayer(Player::X));
        assert!(!is_draw(engine.current_board(), 3));

        engine.jump_to(9).unwrap();
        assert!(is_draw(engine.current_board(), 3));
        assert_eq!(engine.status(), GameStatus::Draw);
        assert!(engine.status().is_finished());
    }

    #[test]
    fn test_reconfigure_resets() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[0, 4]);
        engine.toggle_sort();
        engine.reconfigure(5, 4).unwrap();
        assert_eq!(engine.current_board().len(), 25);
        assert_eq!(engine.current_step(), 0);
        assert_eq!(engine.winner(), None);
        assert!(engine.sort_ascending());
    }

    #[test]
    fn test_invalid_reconfigure_keeps_state() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[0]);
        assert!(engine.reconfigure(30, 3).is_err());
        assert!(engine.reconfigure(6, 6).is_err());
        assert_eq!(*engine.config().width(), 3);
        assert_eq!(engine.current_step(), 1);
    }

    #[test]
    fn test_reset_keeps_dimensions() {
        let mut engine = engine(4, 3);
        play(&mut engine, &[0, 5, 10]);
        engine.reset();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.current_board().len(), 16);
        assert_eq!(*engine.config().win_length(), 3);
    }

    #[test]
    fn test_history_labels_and_order() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[5, 1]);
        assert_eq!(engine.history_label(0).unwrap(), "Go to game start");
        assert_eq!(engine.history_label(1).unwrap(), "Go to move #1 (col: 2, row: 1)");
        assert_eq!(engine.history_label(2).unwrap(), "Go to move #2 (col: 1, row: 0)");
        assert_eq!(engine.history_label(3), None);

        assert_eq!(engine.history_order(), vec![0, 1, 2]);
        engine.toggle_sort();
        assert_eq!(engine.history_order(), vec![2, 1, 0]);
    }

    #[test]
    fn test_snapshot_reflects_current_step() {
        let mut engine = engine(3, 3);
        play(&mut engine, &[0, 4, 1, 5, 2]);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.step, 5);
        assert_eq!(snapshot.status, GameStatus::Won(Player::X));
        assert_eq!(snapshot.winning_cells, Some(vec![0, 1, 2]));
        assert_eq!(snapshot.history.len(), 6);
    }
}
