//! Tests for configuration loading.

use std::fs;
use tempfile::TempDir;
use tictactoe_oracle::{AppConfig, RULE_BASED_MODEL};

#[test]
fn test_full_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("oracle.toml");
    fs::write(
        &path,
        r#"default_model = "knn"
computer_delay_ms = 0

[oracle]
command = ["/opt/venv/bin/python", "predictor.py"]
timeout_ms = 250
"#,
    )
    .expect("Failed to write TOML");

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.default_model(), "knn");
    assert_eq!(*config.computer_delay_ms(), 0);
    assert_eq!(config.oracle().command(), &["/opt/venv/bin/python", "predictor.py"]);
    assert_eq!(config.oracle().timeout().as_millis(), 250);
}

#[test]
fn test_omitted_fields_use_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").expect("Failed to write TOML");

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.default_model(), RULE_BASED_MODEL);
    assert_eq!(*config.oracle().timeout_ms(), 5_000);
    assert_eq!(config.oracle().command().len(), 2);
    assert_eq!(config.oracle().command()[1], "model_predictor.py");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = AppConfig::load_or_default("/this/path/does/not/exist.toml").expect("Load failed");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");
    assert!(AppConfig::from_file(&path).is_err());
}

#[test]
fn test_builder_overrides() {
    let config = AppConfig::default()
        .with_oracle_command(vec!["echo".to_string()])
        .with_computer_delay_ms(5);
    assert_eq!(config.default_model(), RULE_BASED_MODEL);
    assert_eq!(config.oracle().command(), &["echo"]);
    assert_eq!(*config.computer_delay_ms(), 5);
}

#[test]
fn test_config_error_hides_location() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "default_model = ").expect("Write failed");
    let err = AppConfig::from_file(&path).unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("Config error: Failed to parse config"));
    assert!(!text.contains("config.rs"));
}
