//! Tic-tac-toe state oracle - game-state classification and prediction scoring
//!
//! After every move the real state of the board (ongoing, one move from a
//! win, or over) is computed and compared with the guess of a pluggable
//! predictor. The score tracker reports how often the guess was right.
//!
//! # Architecture
//!
//! - **Games**: board, rules and the real-state classifier
//! - **Prediction**: rule-based heuristic and external trained models
//! - **Oracle**: out-of-process boundary to the trained models
//! - **Session**: one game, scored move by move
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_oracle::{GameSession, RuleBasedPredictor};
//!
//! # async fn example() -> Result<(), tictactoe_oracle::CoreError> {
//! let mut session = GameSession::new(Box::new(RuleBasedPredictor::new()));
//! let report = session.play_move(4).await?;
//! println!("real: {}, predicted: {}", report.real.state, report.prediction.state);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod config;
mod error;
pub mod games;
mod oracle;
mod orchestrator;
mod players;
mod prediction;
pub mod render;
mod score;
mod session;

// Crate-level exports - Errors
pub use error::{CoreError, CoreErrorKind};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, OracleConfig, RULE_BASED_MODEL};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, Classification, GameState, Mark, Outcome, Square, classify,
};

// Crate-level exports - Prediction
pub use prediction::{
    ExternalModelPredictor, PredictionProvider, PredictionResult, RuleBasedPredictor,
    build_provider, rule_based_state,
};

// Crate-level exports - Oracle boundary
pub use oracle::{Oracle, OracleInfo, OracleResponse, ProcessOracle};

// Crate-level exports - Model catalog
pub use catalog::{ModelCatalog, ModelDescriptor};

// Crate-level exports - Scoring and sessions
pub use score::ScoreTracker;
pub use session::{GameSession, MoveReport, SessionStatus, SessionSummary};

// Crate-level exports - Players and orchestration
pub use orchestrator::Orchestrator;
pub use players::{HumanPlayer, Player, RandomPlayer, parse_position};
