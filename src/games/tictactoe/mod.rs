//! Tic-tac-toe board, rules and real-state classification.

mod classifier;
pub mod rules;
mod types;

pub use classifier::{Classification, GameState, Outcome, classify};
pub use types::{BOARD_SIZE, Board, Mark, Square};
