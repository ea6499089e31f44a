//! Running accuracy of predictions against ground truth.

use crate::games::tictactoe::GameState;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Counts predictions and how many matched the real state.
///
/// Counters only grow, and `total == correct + incorrect` always holds.
/// One tracker belongs to one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreTracker {
    /// Predictions recorded so far.
    total: u32,
    /// Predictions that matched.
    correct: u32,
    /// Predictions that did not match.
    incorrect: u32,
}

impl ScoreTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one prediction. Returns true if it matched `real`.
    ///
    /// Only states are compared; who won is not part of a prediction.
    #[instrument(skip(self))]
    pub fn record(&mut self, predicted: GameState, real: GameState) -> bool {
        let correct = predicted == real;
        self.total += 1;
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
        debug!(total = self.total, correct = self.correct, "Prediction recorded");
        correct
    }

    /// Percentage of correct predictions, 0 when nothing was recorded.
    #[instrument(skip(self))]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total) * 100.0
        }
    }
}
