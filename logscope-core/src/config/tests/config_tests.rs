use crate::config::{AnalyzerConfig, ConfigError, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::parse::MalformedLinePolicy;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn empty_document_uses_defaults() {
    let cfg: AnalyzerConfig = "".parse().unwrap();

    assert_eq!(cfg, AnalyzerConfig::default());
    assert_eq!(cfg.input, PathBuf::from(DEFAULT_INPUT));
    assert_eq!(cfg.output, PathBuf::from(DEFAULT_OUTPUT));
    assert_eq!(cfg.failed_login_threshold, 10);
    assert_eq!(cfg.on_malformed, MalformedLinePolicy::Skip);
}

#[test]
fn reads_all_fields() {
    let cfg: AnalyzerConfig = r#"
        input = "/var/log/nginx/access.log"
        output = "report.csv"
        failed_login_threshold = 3
        on_malformed = "abort"
        strict_credentials = true
        all_endpoints = true
    "#
    .parse()
    .unwrap();

    assert_eq!(cfg.input, PathBuf::from("/var/log/nginx/access.log"));
    assert_eq!(cfg.output, PathBuf::from("report.csv"));
    assert_eq!(cfg.failed_login_threshold, 3);
    assert_eq!(cfg.on_malformed, MalformedLinePolicy::Abort);
    assert!(cfg.strict_credentials);
    assert!(cfg.all_endpoints);
    assert!(cfg.parse_options().strict_credentials);
}

#[test]
fn rejects_unknown_keys() {
    let err = "treshold = 3".parse::<AnalyzerConfig>().unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn rejects_unknown_policy() {
    let err = r#"on_malformed = "explode""#
        .parse::<AnalyzerConfig>()
        .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn rejects_output_equal_to_input() {
    let err = r#"
        input = "same.log"
        output = "same.log"
    "#
    .parse::<AnalyzerConfig>()
    .unwrap_err();

    assert!(matches!(err, ConfigError::OutputOverwritesInput { .. }));
}

#[test]
fn rejects_empty_input() {
    let err = r#"input = """#.parse::<AnalyzerConfig>().unwrap_err();

    assert!(matches!(err, ConfigError::EmptyPath { field: "input" }));
}

#[test]
fn loads_from_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logscope.toml");
    fs::write(&path, "failed_login_threshold = 25\n").unwrap();

    // Act
    let cfg = AnalyzerConfig::from_file(&path).unwrap();

    // Assert
    assert_eq!(cfg.failed_login_threshold, 25);
    assert_eq!(cfg.input, PathBuf::from(DEFAULT_INPUT));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();

    let err = AnalyzerConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}
