//! Shared test doubles.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tictactoe_oracle::{CoreError, CoreErrorKind, Oracle, OracleResponse};

/// Oracle that replays canned answers in order, then fails.
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    predictions: Mutex<VecDeque<Result<OracleResponse, CoreError>>>,
    models: Option<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_models(mut self, models: &[&str]) -> Self {
        self.models = Some(models.iter().map(|m| m.to_string()).collect());
        self
    }

    pub fn then(self, answer: Result<OracleResponse, CoreError>) -> Self {
        self.predictions.lock().unwrap().push_back(answer);
        self
    }

    pub fn then_code(self, code: i64, confidence: Option<f64>) -> Self {
        self.then(Ok(response(Some(code), confidence, None)))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn response(code: Option<i64>, confidence: Option<f64>, error: Option<&str>) -> OracleResponse {
    OracleResponse {
        model: Some("mlp".to_string()),
        prediction_int: code,
        prediction_label: None,
        confidence,
        error: error.map(|e| e.to_string()),
    }
}

#[async_trait::async_trait]
impl Oracle for ScriptedOracle {
    async fn predict(&self, _model: &str, _board_csv: &str) -> Result<OracleResponse, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.predictions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CoreError::new(CoreErrorKind::OracleUnavailable, "script exhausted")))
    }

    async fn available_models(&self) -> Result<Vec<String>, CoreError> {
        self.models
            .clone()
            .ok_or_else(|| CoreError::new(CoreErrorKind::OracleUnavailable, "oracle offline"))
    }
}
