//! Count-based heuristic predictor.

use super::{PredictionProvider, PredictionResult};
use crate::config::RULE_BASED_MODEL;
use crate::games::tictactoe::{Board, GameState, Mark};
use tracing::{debug, instrument};

/// Guesses the state from mark counts alone.
///
/// Line geometry is ignored on purpose, so this is cruder than
/// [`classify`](crate::games::tictactoe::classify). The gap between the
/// two is what the score tracker measures.
#[instrument]
pub fn rule_based_state(board: &Board) -> GameState {
    let empty = board.empty_count();
    let x = board.count(Mark::X);
    let o = board.count(Mark::O);

    let state = if empty <= 2 {
        GameState::Terminal
    } else if empty <= 4 && (x >= 2 || o >= 2) {
        GameState::NearTerminal
    } else {
        GameState::Ongoing
    };

    debug!(empty, x, o, ?state, "Rule-based prediction");
    state
}

/// Always-available predictor backed by [`rule_based_state`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedPredictor;

impl RuleBasedPredictor {
    /// Creates the predictor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl PredictionProvider for RuleBasedPredictor {
    async fn predict(&self, board: &Board) -> PredictionResult {
        PredictionResult::new(rule_based_state(board))
    }

    fn model_id(&self) -> &str {
        RULE_BASED_MODEL
    }
}
