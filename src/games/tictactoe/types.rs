//! Core domain types for tic-tac-toe.

use crate::error::{CoreError, CoreErrorKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Token used in the flat board encoding.
    pub fn token(self) -> &'static str {
        match self {
            Mark::X => "x",
            Mark::O => "o",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Token used in the flat board encoding (`x`, `o` or `b`).
    pub fn token(self) -> &'static str {
        match self {
            Square::Empty => "b",
            Square::Occupied(mark) => mark.token(),
        }
    }

    /// Parses a single flat-encoding token.
    fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "b" => Some(Square::Empty),
            "x" => Some(Square::Occupied(Mark::X)),
            "o" => Some(Square::Occupied(Mark::O)),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares only ever go from `Empty` to `Occupied`; [`Board::apply_move`]
/// is the only mutator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// True when `pos` is on the board and still empty.
    pub fn is_legal_move(&self, pos: usize) -> bool {
        self.is_empty(pos)
    }

    /// Places `mark` at `pos`.
    ///
    /// Fails without touching the board when the move is not legal.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: usize, mark: Mark) -> Result<(), CoreError> {
        if pos >= BOARD_SIZE {
            return Err(CoreError::new(
                CoreErrorKind::IllegalMove,
                format!("Position {} out of bounds (must be 0-8)", pos),
            ));
        }
        if !self.is_empty(pos) {
            return Err(CoreError::new(
                CoreErrorKind::IllegalMove,
                format!("Square {} is already occupied", pos),
            ));
        }
        self.squares[pos] = Square::Occupied(mark);
        Ok(())
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Indices of all empty squares, ascending.
    pub fn empty_positions(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Flat encoding: 9 comma-separated tokens in index order.
    pub fn to_csv(&self) -> String {
        self.squares
            .iter()
            .map(|s| s.token())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parses the flat encoding produced by [`Board::to_csv`].
    ///
    /// Tokens are case-insensitive and may carry surrounding whitespace.
    #[instrument]
    pub fn from_csv(csv: &str) -> Result<Self, CoreError> {
        let tokens: Vec<&str> = csv.split(',').collect();
        if tokens.len() != BOARD_SIZE {
            return Err(CoreError::new(
                CoreErrorKind::InvalidInput,
                format!("Board needs 9 comma-separated cells, got {}", tokens.len()),
            ));
        }

        let mut squares = [Square::Empty; BOARD_SIZE];
        for (pos, token) in tokens.iter().enumerate() {
            squares[pos] = Square::from_token(token).ok_or_else(|| {
                CoreError::new(
                    CoreErrorKind::InvalidInput,
                    format!("Invalid cell '{}' at position {} (expected x, o or b)", token.trim(), pos),
                )
            })?;
        }
        Ok(Self { squares })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| match self.squares[row * 3 + col] {
                    Square::Empty => " ".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                })
                .collect();
            write!(f, " {} | {} | {} ", cells[0], cells[1], cells[2])?;
            if row < 2 {
                write!(f, "\n-----------\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board.empty_positions(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_legal_move_bounds() {
        let board = Board::new();
        assert!(board.is_legal_move(0));
        assert!(board.is_legal_move(8));
        assert!(!board.is_legal_move(9));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let mut board = Board::new();
        board.apply_move(4, Mark::X).unwrap();
        let err = board.apply_move(4, Mark::O).unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::IllegalMove);
        assert_eq!(board.get(4), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let mut board = Board::new();
        assert!(board.apply_move(9, Mark::X).is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_csv_encoding() {
        let mut board = Board::new();
        board.apply_move(0, Mark::X).unwrap();
        board.apply_move(4, Mark::O).unwrap();
        assert_eq!(board.to_csv(), "x,b,b,b,o,b,b,b,b");
        assert_eq!(Board::from_csv(&board.to_csv()).unwrap(), board);
    }

    #[test]
    fn test_from_csv_rejects_bad_input() {
        assert!(Board::from_csv("x,o,b").is_err());
        assert!(Board::from_csv("x,o,b,b,b,b,b,b,z").is_err());
        assert!(Board::from_csv(" X, O ,b,b,b,b,b,b,b").is_ok());
    }

    #[test]
    fn test_counts() {
        let board = Board::from_csv("x,x,o,b,o,b,b,b,x").unwrap();
        assert_eq!(board.count(Mark::X), 3);
        assert_eq!(board.count(Mark::O), 2);
        assert_eq!(board.empty_count(), 4);
    }
}
