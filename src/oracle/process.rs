//! Oracle implemented by spawning a helper process per request.

use super::{Oracle, OracleInfo, OracleResponse};
use crate::config::OracleConfig;
use crate::error::{CoreError, CoreErrorKind};
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

/// Runs `<command> predict <model> <csv>` and `<command> info`.
///
/// Each call is a fresh process bounded by the configured timeout. The
/// process is killed if the timeout elapses.
#[derive(Debug, Clone)]
pub struct ProcessOracle {
    config: OracleConfig,
}

impl ProcessOracle {
    /// Creates an oracle from its configuration.
    #[instrument]
    pub fn new(config: OracleConfig) -> Self {
        info!(command = ?config.command(), "Creating process oracle");
        Self { config }
    }

    /// Runs the oracle with `args` appended and returns its stdout.
    #[instrument(skip(self), fields(timeout_ms = self.config.timeout_ms()))]
    async fn run(&self, args: &[&str]) -> Result<Vec<u8>, CoreError> {
        let (program, leading) = self.config.command().split_first().ok_or_else(|| {
            CoreError::new(CoreErrorKind::OracleUnavailable, "Oracle command is empty")
        })?;

        debug!(program = %program, "Spawning oracle process");
        let mut command = Command::new(program);
        command
            .args(leading)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match timeout(self.config.timeout(), command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                warn!(error = %e, "Failed to run oracle process");
                return Err(CoreError::new(
                    CoreErrorKind::OracleUnavailable,
                    format!("Failed to run oracle '{}': {}", program, e),
                ));
            }
            Err(_) => {
                warn!("Oracle process timed out");
                return Err(CoreError::new(
                    CoreErrorKind::OracleUnavailable,
                    format!(
                        "Oracle did not answer within {} ms",
                        self.config.timeout_ms()
                    ),
                ));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = ?output.status, stderr = %stderr.trim(), "Oracle exited with failure");
            return Err(CoreError::new(
                CoreErrorKind::OracleUnavailable,
                format!("Oracle exited with {}", output.status),
            ));
        }

        Ok(output.stdout)
    }
}

#[async_trait::async_trait]
impl Oracle for ProcessOracle {
    #[instrument(skip(self))]
    async fn predict(&self, model: &str, board_csv: &str) -> Result<OracleResponse, CoreError> {
        let stdout = self.run(&["predict", model, board_csv]).await?;
        let response: OracleResponse = serde_json::from_slice(&stdout)?;
        debug!(?response, "Oracle prediction received");
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn available_models(&self) -> Result<Vec<String>, CoreError> {
        let stdout = self.run(&["info"]).await?;
        let info: OracleInfo = serde_json::from_slice(&stdout)?;
        if let Some(error) = info.error.filter(|e| !e.trim().is_empty()) {
            return Err(CoreError::new(
                CoreErrorKind::OracleMalformed,
                format!("Oracle reported an error: {}", error),
            ));
        }
        info!(models = ?info.available_models, "Oracle models listed");
        Ok(info.available_models)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell_oracle(script: &str, timeout_ms: u64) -> ProcessOracle {
        ProcessOracle::new(OracleConfig::new(
            vec!["sh".to_string(), "-c".to_string(), script.to_string()],
            timeout_ms,
        ))
    }

    #[tokio::test]
    async fn test_well_formed_prediction() {
        let oracle = shell_oracle(
            r#"printf '%s' '{"model":"mlp","prediction_int":2,"prediction_label":"Terminal","confidence":0.75}'"#,
            5_000,
        );
        let response = oracle.predict("mlp", "x,x,x,o,o,b,b,b,b").await.unwrap();
        assert_eq!(response.prediction_int, Some(2));
        assert_eq!(response.confidence, Some(0.75));
    }

    #[tokio::test]
    async fn test_receives_subcommand_arguments() {
        // With `sh -c`, the appended words land in $0, $1, $2.
        let oracle = shell_oracle(
            r#"printf '{"model":"%s","prediction_int":0,"label":"%s"}' "$1" "$0""#,
            5_000,
        );
        let response = oracle.predict("knn", "b,b,b,b,b,b,b,b,b").await.unwrap();
        assert_eq!(response.model.as_deref(), Some("knn"));
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let oracle = ProcessOracle::new(OracleConfig::new(
            vec!["/definitely/not/a/real/oracle".to_string()],
            5_000,
        ));
        let err = oracle.available_models().await.unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::OracleUnavailable);
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_unavailable() {
        let oracle = shell_oracle("exit 3", 5_000);
        let err = oracle.predict("mlp", "b,b,b,b,b,b,b,b,b").await.unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::OracleUnavailable);
    }

    #[tokio::test]
    async fn test_garbage_output_is_malformed() {
        let oracle = shell_oracle("echo 'Traceback (most recent call last):'", 5_000);
        let err = oracle.predict("mlp", "b,b,b,b,b,b,b,b,b").await.unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::OracleMalformed);
    }

    #[tokio::test]
    async fn test_timeout_is_unavailable() {
        let oracle = shell_oracle("sleep 5", 100);
        let err = oracle.available_models().await.unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::OracleUnavailable);
    }

    #[tokio::test]
    async fn test_lists_models() {
        let oracle = shell_oracle(r#"echo '{"available_models":["mlp","knn"]}'"#, 5_000);
        let models = oracle.available_models().await.unwrap();
        assert_eq!(models, vec!["mlp".to_string(), "knn".to_string()]);
    }
}
