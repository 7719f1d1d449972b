//! # Connect Four Engine
//!
//! A two-player, perfect-information Connect Four search engine: minimax with
//! alpha-beta pruning over a gravity-constrained board, falling back to a
//! window-based heuristic when the search horizon is reached before the game
//! ends.
//!
//! The presentation layer (rendering, input handling, turn order) lives
//! outside this crate. It owns the authoritative [`game::Board`], applies
//! human moves through [`game::Board::drop_height`] and [`game::Board::place`],
//! detects game end with [`game::Board::has_win`] and [`game::Board::is_full`],
//! and obtains the AI's move from [`ai::MinimaxAgent::choose_move`] once per
//! AI turn. The engine never mutates the caller's board; hypothetical moves
//! are explored on private clones.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection
//! - [`ai`] — Agent trait, minimax search, heuristic evaluation, baselines
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
