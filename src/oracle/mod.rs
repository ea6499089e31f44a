//! Boundary to the out-of-process model oracle.
//!
//! The oracle answers two questions: which trained models exist on this
//! host, and what a given model predicts for a board. Everything that
//! crosses this boundary is a [`CoreError`] of an oracle kind on failure;
//! callers decide how to degrade.

mod process;

pub use process::ProcessOracle;

use crate::error::{CoreError, CoreErrorKind};
use crate::games::tictactoe::GameState;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Raw answer to a `predict` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleResponse {
    /// Model that produced the answer.
    #[serde(default)]
    pub model: Option<String>,
    /// Discrete prediction code (0, 1, 2).
    #[serde(default, alias = "prediction_code")]
    pub prediction_int: Option<i64>,
    /// Label for the code, informational only.
    #[serde(default)]
    pub prediction_label: Option<String>,
    /// Probability of the predicted class, when the model exposes one.
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Populated when the oracle itself failed.
    #[serde(default)]
    pub error: Option<String>,
}

impl OracleResponse {
    /// Validates the response and extracts the predicted state.
    #[instrument]
    pub fn into_prediction(self) -> Result<(GameState, Option<f64>), CoreError> {
        if let Some(error) = self.error.filter(|e| !e.trim().is_empty()) {
            return Err(CoreError::new(
                CoreErrorKind::OracleMalformed,
                format!("Oracle reported an error: {}", error),
            ));
        }

        let code = self.prediction_int.ok_or_else(|| {
            CoreError::new(
                CoreErrorKind::OracleMalformed,
                "Oracle response has no prediction code",
            )
        })?;

        let state = GameState::from_code(code).ok_or_else(|| {
            CoreError::new(
                CoreErrorKind::OracleMalformed,
                format!("Unknown prediction code {}", code),
            )
        })?;

        Ok((state, self.confidence))
    }
}

/// Raw answer to an `info` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleInfo {
    /// Identifiers of models the oracle can load.
    #[serde(default)]
    pub available_models: Vec<String>,
    /// Populated when the oracle itself failed.
    #[serde(default)]
    pub error: Option<String>,
}

/// Out-of-process prediction backend.
#[async_trait::async_trait]
pub trait Oracle: Send + Sync + std::fmt::Debug {
    /// Asks `model` to predict the state of the board given as flat CSV.
    async fn predict(&self, model: &str, board_csv: &str) -> Result<OracleResponse, CoreError>;

    /// Lists the identifiers of the models that can be queried.
    async fn available_models(&self) -> Result<Vec<String>, CoreError>;
}
