//! Predictor that asks a trained model through the oracle.

use super::rule_based::rule_based_state;
use super::{PredictionProvider, PredictionResult};
use crate::error::CoreError;
use crate::games::tictactoe::Board;
use crate::oracle::Oracle;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Queries a named model via an [`Oracle`].
///
/// Any oracle failure is answered with the rule-based prediction for the
/// same board. The next call tries the oracle again.
#[derive(Debug, Clone)]
pub struct ExternalModelPredictor {
    model: String,
    oracle: Arc<dyn Oracle>,
}

impl ExternalModelPredictor {
    /// Creates a predictor for `model`.
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn new(model: impl AsRef<str>, oracle: Arc<dyn Oracle>) -> Self {
        Self {
            model: model.as_ref().to_string(),
            oracle,
        }
    }

    /// Queries the oracle without any fallback.
    #[instrument(skip(self, board), fields(model = %self.model))]
    pub async fn try_predict(&self, board: &Board) -> Result<PredictionResult, CoreError> {
        let response = self.oracle.predict(&self.model, &board.to_csv()).await?;
        let (state, confidence) = response.into_prediction()?;
        debug!(?state, ?confidence, "Model prediction");
        Ok(PredictionResult::new(state).with_confidence(confidence))
    }
}

#[async_trait::async_trait]
impl PredictionProvider for ExternalModelPredictor {
    #[instrument(skip(self, board), fields(model = %self.model))]
    async fn predict(&self, board: &Board) -> PredictionResult {
        match self.try_predict(board).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Model prediction failed, falling back to rules");
                PredictionResult::new(rule_based_state(board))
            }
        }
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
