//! Error types for the game core.

use derive_more::{Display, Error};
use strum::Display as StrumDisplay;
use tracing::{debug, instrument};

/// Category of a [`CoreError`].
///
/// None of these are fatal. Callers decide whether to retry the move,
/// fall back to the rule-based predictor, or keep the current model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum CoreErrorKind {
    /// Move targets an occupied or out-of-range cell.
    #[strum(to_string = "illegal move")]
    IllegalMove,
    /// Session already finished; no further moves are accepted.
    #[strum(to_string = "game finished")]
    GameFinished,
    /// Text at the input boundary could not be parsed.
    #[strum(to_string = "invalid input")]
    InvalidInput,
    /// The oracle process could not be run or did not answer in time.
    #[strum(to_string = "oracle unavailable")]
    OracleUnavailable,
    /// The oracle answered with unparseable or error-flagged data.
    #[strum(to_string = "oracle malformed")]
    OracleMalformed,
    /// Requested model is unknown or not available on this host.
    #[strum(to_string = "invalid model selection")]
    InvalidModelSelection,
}

/// Core error with caller location tracking.
///
/// `Display` shows only the kind and message; the location is for logs.
#[derive(Debug, Clone, Display, Error)]
#[display("{}: {}", kind, message)]
pub struct CoreError {
    /// What went wrong.
    pub kind: CoreErrorKind,
    /// Human-readable message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CoreError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: CoreErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let err = Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        };
        debug!(kind = %err.kind, file = err.file, line = err.line, "Error created");
        err
    }

    /// Returns the error category.
    pub fn kind(&self) -> CoreErrorKind {
        self.kind
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(
            CoreErrorKind::OracleMalformed,
            format!("Unparseable oracle response: {}", err),
        )
    }
}
