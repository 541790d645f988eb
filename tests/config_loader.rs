use guessr::config::{Config, ConfigError, LoggingConfig, UiConfig};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.frame_rate_ms, 100);
    assert_eq!(config.ui.frame_rate(), Duration::from_millis(100));
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("guessr/config.toml"));
}

#[test]
fn test_default_log_file_location() {
    assert!(LoggingConfig::default_file().ends_with("guessr/guessr.log"));
    let config = LoggingConfig {
        level: "debug".to_string(),
        file: Some(PathBuf::from("/tmp/custom.log")),
    };
    assert_eq!(config.resolved_file(), PathBuf::from("/tmp/custom.log"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_empty_file_yields_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).expect("empty file is valid");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_overrides_named_fields() {
    let (_dir, path) = write_config(
        r#"
[logging]
level = "guessr=debug"
"#,
    );
    let config = Config::load_from(&path).expect("partial file is valid");
    assert_eq!(config.logging.level, "guessr=debug");
    assert_eq!(config.ui, UiConfig::default());
}

#[test]
fn test_full_file() {
    let (_dir, path) = write_config(
        r#"
[ui]
frame_rate_ms = 50

[logging]
level = "trace"
file = "/var/tmp/guessr.log"
"#,
    );
    let config = Config::load_from(&path).expect("valid file");
    assert_eq!(config.ui.frame_rate_ms, 50);
    assert_eq!(config.logging.level, "trace");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/var/tmp/guessr.log"))
    );
}

#[test]
fn test_parse_error_names_file() {
    let (_dir, path) = write_config("[ui\nframe_rate_ms = ");
    let err = Config::load_from(&path).expect_err("malformed TOML");
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[ui]\nframe_rate_ms = \"fast\"\n");
    let err = Config::load_from(&path).expect_err("string where number expected");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_frame_rate_out_of_range_fails_validation() {
    for bad in [0, 15, 1001] {
        let (_dir, path) = write_config(&format!("[ui]\nframe_rate_ms = {bad}\n"));
        let err = Config::load_from(&path).expect_err("out of range");
        match err {
            ConfigError::ValidationError { message } => {
                assert!(message.contains("frame_rate_ms"), "{message}");
            }
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }
}

#[test]
fn test_invalid_log_level_fails_validation() {
    let (_dir, path) = write_config("[logging]\nlevel = \"guessr=loud\"\n");
    let err = Config::load_from(&path).expect_err("bad level");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_unreadable_path_is_read_error() {
    // A directory exists but cannot be read as a file.
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = Config::load_from(dir.path()).expect_err("directory is not a file");
    assert!(matches!(err, ConfigError::ReadError { .. }));
}
