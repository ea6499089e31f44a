//! Ground-truth game state classification.

use super::rules::{check_winner, has_immediate_win, is_full};
use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Coarse progress of a game.
///
/// Always derived from a [`Board`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Neither terminal nor one move from a win.
    Ongoing,
    /// Some mark can complete a line with its next move.
    NearTerminal,
    /// The game ended in a win or a draw.
    Terminal,
}

impl GameState {
    /// Maps the oracle's discrete code (0, 1, 2) to a state.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(GameState::Ongoing),
            1 => Some(GameState::NearTerminal),
            2 => Some(GameState::Terminal),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            GameState::Ongoing => "Ongoing",
            GameState::NearTerminal => "Near terminal",
            GameState::Terminal => "Terminal",
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How a terminal game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark completed a line.
    Win(Mark),
    /// Board full with no line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of classifying a board.
///
/// `outcome` is `Some` exactly when `state` is [`GameState::Terminal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Real state of the game.
    pub state: GameState,
    /// Winner or draw, only for terminal boards.
    pub outcome: Option<Outcome>,
}

/// Classifies `board` into its real [`GameState`].
///
/// A completed line takes priority, then a full board (draw), then a
/// two-in-a-line threat for either mark.
#[instrument]
pub fn classify(board: &Board) -> Classification {
    if let Some(winner) = check_winner(board) {
        return Classification {
            state: GameState::Terminal,
            outcome: Some(Outcome::Win(winner)),
        };
    }

    if is_full(board) {
        return Classification {
            state: GameState::Terminal,
            outcome: Some(Outcome::Draw),
        };
    }

    let state = if has_immediate_win(board, Mark::X) || has_immediate_win(board, Mark::O) {
        GameState::NearTerminal
    } else {
        GameState::Ongoing
    };

    Classification {
        state,
        outcome: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_ongoing() {
        let c = classify(&Board::new());
        assert_eq!(c.state, GameState::Ongoing);
        assert_eq!(c.outcome, None);
    }

    #[test]
    fn test_win_beats_full_board() {
        let board = Board::from_csv("x,x,x,o,o,x,o,x,o").unwrap();
        assert_eq!(classify(&board).outcome, Some(Outcome::Win(Mark::X)));
    }

    #[test]
    fn test_wire_codes() {
        assert_eq!(GameState::from_code(0), Some(GameState::Ongoing));
        assert_eq!(GameState::from_code(1), Some(GameState::NearTerminal));
        assert_eq!(GameState::from_code(2), Some(GameState::Terminal));
        assert_eq!(GameState::from_code(3), None);
        assert_eq!(GameState::from_code(-1), None);
    }
}
