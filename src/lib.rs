//! # FourStack
//!
//! Core logic for a two-player vertical-drop grid game with a vanish-cascade
//! rule: any horizontal or vertical four-in-a-row is cleared, the pieces
//! above fall, and clearing repeats until the board is stable. Only a
//! diagonal four-in-a-row wins. One side is human-driven, the other an
//! automated opponent.
//!
//! Rendering, input, and the real-time clocks (the opponent's response
//! delay, the match countdown) live in a driver built on top of this crate.
//! The core is synchronous and never blocks: the driver feeds validated
//! columns into [`game::GameSession::apply_move`], asks [`ai::Policy`] for
//! the opponent's column when its delay elapses, and reports countdown
//! expiry via [`game::GameSession::expire_clock`].
//!
//! ## Modules
//!
//! - [`game`] — Board state machine, player sides, turn controller session
//! - [`ai`] — Opponent policy trait and the uniform-random policy
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
