//! Pluggable game-state predictors.
//!
//! A predictor looks at a board and guesses its [`GameState`] without
//! access to the real classifier. The session scores the guess against
//! ground truth after every move.

mod external;
mod rule_based;

pub use external::ExternalModelPredictor;
pub use rule_based::{RuleBasedPredictor, rule_based_state};

use crate::config::RULE_BASED_MODEL;
use crate::games::tictactoe::{Board, GameState};
use crate::oracle::Oracle;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

/// One prediction for one board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted game state.
    pub state: GameState,
    /// Model confidence in `state`, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Degradation note attached by the predictor, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResult {
    /// A bare prediction with no confidence and no error.
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            confidence: None,
            error: None,
        }
    }

    /// Attaches a confidence score.
    pub fn with_confidence(mut self, confidence: Option<f64>) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Anything that can guess the state of a board.
///
/// Implementations must always return a usable result; failures of
/// their own backends are handled internally.
#[async_trait::async_trait]
pub trait PredictionProvider: Send + Sync + std::fmt::Debug {
    /// Predicts the state of `board`.
    async fn predict(&self, board: &Board) -> PredictionResult;

    /// Identifier of the model behind this predictor.
    fn model_id(&self) -> &str;
}

/// Builds the predictor for `model_id`.
///
/// [`RULE_BASED_MODEL`] selects the local heuristic; any other identifier
/// is forwarded to `oracle`.
#[instrument(skip(oracle))]
pub fn build_provider(model_id: &str, oracle: Arc<dyn Oracle>) -> Box<dyn PredictionProvider> {
    if model_id == RULE_BASED_MODEL {
        info!("Using rule-based predictor");
        Box::new(RuleBasedPredictor::new())
    } else {
        info!("Using external model predictor");
        Box::new(ExternalModelPredictor::new(model_id, oracle))
    }
}
