//! Core Connect Four game logic: gravity-constrained board, player types, and
//! win detection.

mod board;
mod player;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH};
pub use player::Player;
