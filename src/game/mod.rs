//! Core game logic: the board state machine with the vanish-cascade rule,
//! player sides, and the turn controller session.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameSession, TurnReport};
