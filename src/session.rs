//! One game from empty board to result, with prediction scoring.

use crate::error::{CoreError, CoreErrorKind};
use crate::games::tictactoe::{Board, Classification, GameState, Mark, Outcome, classify};
use crate::prediction::{PredictionProvider, PredictionResult};
use crate::score::ScoreTracker;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Moves are accepted.
    InProgress,
    /// The game ended; the outcome is frozen.
    Finished(Outcome),
}

/// What happened on one accepted move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Square that was played.
    pub position: usize,
    /// Mark that played it.
    pub mark: Mark,
    /// Ground truth after the move.
    pub real: Classification,
    /// What the predictor said.
    pub prediction: PredictionResult,
    /// Whether the prediction matched the real state.
    pub correct: bool,
}

/// End-of-game numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Model that made the predictions.
    pub model: String,
    /// Predictions made.
    pub total: u32,
    /// Matching predictions.
    pub correct: u32,
    /// Wrong predictions.
    pub incorrect: u32,
    /// Percentage correct.
    pub accuracy: f64,
    /// Result of the game, if it finished.
    pub outcome: Option<Outcome>,
}

/// A single game with its own board and score tracker.
///
/// After every accepted move the session classifies the board, asks the
/// predictor, and records the pair. A finished session accepts no more
/// moves; start a new one for the next game.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    current: Mark,
    status: SessionStatus,
    tracker: ScoreTracker,
    provider: Box<dyn PredictionProvider>,
}

impl GameSession {
    /// Creates a session with an empty board. X moves first.
    #[instrument(skip(provider), fields(model = provider.model_id()))]
    pub fn new(provider: Box<dyn PredictionProvider>) -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            current: Mark::X,
            status: SessionStatus::InProgress,
            tracker: ScoreTracker::new(),
            provider,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move next.
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// Returns the session status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// True once the game has ended.
    pub fn is_finished(&self) -> bool {
        matches!(self.status, SessionStatus::Finished(_))
    }

    /// Returns the score tracker.
    pub fn tracker(&self) -> &ScoreTracker {
        &self.tracker
    }

    /// Identifier of the model making predictions.
    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    /// Plays `position` for the current mark.
    ///
    /// Rejected moves leave the board, the turn and the tracker untouched.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub async fn play_move(&mut self, position: usize) -> Result<MoveReport, CoreError> {
        if let SessionStatus::Finished(outcome) = self.status {
            warn!(%outcome, "Move after game end");
            return Err(CoreError::new(
                CoreErrorKind::GameFinished,
                format!("Game is already over ({})", outcome),
            ));
        }

        let mark = self.current;
        self.board.apply_move(position, mark).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;

        let real = classify(&self.board);
        let prediction = self.provider.predict(&self.board).await;
        let correct = self.tracker.record(prediction.state, real.state);

        info!(
            position,
            real = %real.state,
            predicted = %prediction.state,
            correct,
            "Move analysed"
        );

        match (real.state, real.outcome) {
            (GameState::Terminal, Some(outcome)) => {
                info!(%outcome, "Game finished");
                self.status = SessionStatus::Finished(outcome);
            }
            _ => self.current = mark.opponent(),
        }

        Ok(MoveReport {
            position,
            mark,
            real,
            prediction,
            correct,
        })
    }

    /// Counters, accuracy and outcome so far.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            model: self.provider.model_id().to_string(),
            total: *self.tracker.total(),
            correct: *self.tracker.correct(),
            incorrect: *self.tracker.incorrect(),
            accuracy: self.tracker.accuracy(),
            outcome: match self.status {
                SessionStatus::Finished(outcome) => Some(outcome),
                SessionStatus::InProgress => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::RuleBasedPredictor;

    fn session() -> GameSession {
        GameSession::new(Box::new(RuleBasedPredictor::new()))
    }

    #[tokio::test]
    async fn test_turns_alternate() {
        let mut s = session();
        assert_eq!(s.play_move(4).await.unwrap().mark, Mark::X);
        assert_eq!(s.play_move(0).await.unwrap().mark, Mark::O);
        assert_eq!(s.current_mark(), Mark::X);
    }

    #[tokio::test]
    async fn test_illegal_move_changes_nothing() {
        let mut s = session();
        s.play_move(4).await.unwrap();
        let before = s.summary();

        let err = s.play_move(4).await.unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::IllegalMove);
        assert!(s.play_move(12).await.is_err());

        assert_eq!(s.summary(), before);
        assert_eq!(s.current_mark(), Mark::O);
    }
}
