use crate::config::ConfigError;
use crate::parse::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    //-------------------------------------------------------------------------
    // Input
    //-------------------------------------------------------------------------
    #[error("log file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read log file {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing (abort policy only)
    //-------------------------------------------------------------------------
    #[error(transparent)]
    Malformed(#[from] ParseError),

    //-------------------------------------------------------------------------
    // Output
    //-------------------------------------------------------------------------
    #[error("failed to write report to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AnalysisError {
    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            _ => Self::FileUnreadable { path, source },
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AnalysisError::FileNotFound { .. } => 2,
            AnalysisError::FileUnreadable { .. } => 3,
            AnalysisError::Malformed(_) => 4,
            AnalysisError::OutputWrite { .. } => 5,
            AnalysisError::Config(_) => 6,
        }
    }
}
