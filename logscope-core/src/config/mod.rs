mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use crate::analysis::FAILED_LOGIN_THRESHOLD;
use crate::parse::{MalformedLinePolicy, ParseOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_INPUT: &str = "sample.log";
pub const DEFAULT_OUTPUT: &str = "log_analysis_results.csv";

/// Settings for one analysis run.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Access log to analyze.
    pub input: PathBuf,

    /// Spreadsheet (CSV) report destination.
    pub output: PathBuf,

    /// An IP is suspicious with strictly more failed logins than this.
    pub failed_login_threshold: usize,

    pub on_malformed: MalformedLinePolicy,

    /// Reject 401 lines lacking an explicit credential marker.
    pub strict_credentials: bool,

    /// Report every endpoint instead of just the most popular one.
    pub all_endpoints: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            failed_login_threshold: FAILED_LOGIN_THRESHOLD,
            on_malformed: MalformedLinePolicy::default(),
            strict_credentials: false,
            all_endpoints: false,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let cfg: Self = toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { field: "input" });
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { field: "output" });
        }
        if self.input == self.output {
            return Err(ConfigError::OutputOverwritesInput {
                path: self.output.clone(),
            });
        }
        Ok(())
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict_credentials: self.strict_credentials,
        }
    }
}

impl FromStr for AnalyzerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s).map_err(|e| ConfigError::parse("<inline>", e))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
