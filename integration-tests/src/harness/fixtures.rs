use logscope_core::config::AnalyzerConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TIMESTAMP: &str = "[03/Dec/2024:10:12:34 +0000]";

/// Builds an access log line by line and writes it to a temp dir.
#[derive(Default)]
pub struct LogFixture {
    bytes: Vec<u8>,
}

impl LogFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(mut self, ip: &str, endpoint: &str, status: u16) -> Self {
        let _ = writeln!(
            self.bytes,
            "{ip} - - {TIMESTAMP} \"GET {endpoint} HTTP/1.1\" {status} 512"
        );
        self
    }

    /// A 401 carrying the trailing marker the sample logs use.
    pub fn failed_login(mut self, ip: &str) -> Self {
        let _ = writeln!(
            self.bytes,
            "{ip} - - {TIMESTAMP} \"POST /login HTTP/1.1\" 401 128 \"Invalid credentials\""
        );
        self
    }

    pub fn raw(self, line: &str) -> Self {
        self.raw_bytes(line.as_bytes())
    }

    /// A line given as bytes, for content that is not valid UTF-8.
    pub fn raw_bytes(mut self, line: &[u8]) -> Self {
        self.bytes.extend_from_slice(line);
        self.bytes.push(b'\n');
        self
    }

    pub fn repeat(mut self, n: usize, f: impl Fn(Self) -> Self) -> Self {
        for _ in 0..n {
            self = f(self);
        }
        self
    }

    /// Write the log as `sample.log` inside a fresh temp dir.
    pub fn write(&self) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("sample.log");
        fs::write(&path, &self.bytes).expect("failed to write fixture log");
        (dir, path)
    }
}

/// Default config pointed at a fixture, with the report next to it.
pub fn config_for(input: &Path) -> AnalyzerConfig {
    let output = input.with_file_name("log_analysis_results.csv");
    AnalyzerConfig {
        input: input.to_path_buf(),
        output,
        ..AnalyzerConfig::default()
    }
}
