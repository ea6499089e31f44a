//! One-move-from-winning detection.

use super::super::{Board, Mark, Square};
use super::win::LINES;
use tracing::instrument;

/// True when `mark` holds two squares of some line and the third is empty.
#[instrument]
pub fn has_immediate_win(board: &Board, mark: Mark) -> bool {
    let squares = board.squares();
    LINES.iter().any(|line| {
        let owned = line
            .iter()
            .filter(|&&idx| squares[idx] == Square::Occupied(mark))
            .count();
        let empty = line
            .iter()
            .filter(|&&idx| squares[idx] == Square::Empty)
            .count();
        owned == 2 && empty == 1
    })
}
