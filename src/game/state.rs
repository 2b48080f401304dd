use crate::config::GameConfig;
use crate::error::MoveError;

use super::board::{DEFAULT_COLS, DEFAULT_ROWS};
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
    TimedOut,
}

/// What a completed turn did: where the piece landed (before any cascade
/// moved it) and whether the cascade cleared anything, for animation hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub row: usize,
    pub col: usize,
    pub cleared: bool,
}

/// The turn controller: owns a [`Board`], the side to move, and the
/// terminal outcome. Each move runs the fixed protocol — drop, resolve the
/// cascade, check the mover's diagonal — so callers cannot get the
/// sequencing wrong.
///
/// Timing stays outside: the opponent's response delay and the match
/// countdown belong to the driver, which reports expiry via
/// [`GameSession::expire_clock`]. The session itself never blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Create a session on an empty board of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        GameSession {
            board: Board::new(rows, cols),
            current_player: Player::Yellow, // Yellow starts
            outcome: None,
        }
    }

    /// Create a session on the default 6x7 board.
    pub fn initial() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create a session with the configured board dimensions.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns the side to move can play; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Play a full turn for the side to move: drop the piece, resolve the
    /// vanish cascade, then check the mover's diagonal win. A full board
    /// with no winner is a draw. On success the turn passes to the other
    /// side.
    ///
    /// `InvalidColumn` and `ColumnFull` leave the session untouched; the
    /// driver keeps waiting for a usable move.
    pub fn apply_move(&mut self, column: usize) -> Result<TurnReport, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let (row, col) = self.board.drop_piece(column, self.current_player)?;
        let cleared = self.board.resolve_cascade();

        if self.board.check_diagonal_win(self.current_player) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(TurnReport { row, col, cleared })
    }

    /// The driver's countdown hit zero. Ends an ongoing game as timed out;
    /// a finished game keeps its outcome.
    pub fn expire_clock(&mut self) {
        if self.outcome.is_none() {
            self.outcome = Some(GameOutcome::TimedOut);
        }
    }
}
