//! End-to-end run: log file in, [`AnalysisReport`] out.
//!
//! read_log
//! RecordSet::from_bytes
//! ip_frequency / top_endpoint / failed_logins
//! AnalysisReport

use crate::analysis::{endpoint_frequency, failed_logins, ip_frequency, top_endpoint};
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::parse::RecordSet;
use crate::report::AnalysisReport;
use std::fs;
use std::path::Path;

/// Read the whole log into memory.
///
/// Bytes, not text: encoding is checked per line by the parser, so one bad
/// line does not make the file unreadable.
pub fn read_log(path: &Path) -> Result<Vec<u8>, AnalysisError> {
    fs::read(path).map_err(|e| AnalysisError::read_input(path, e))
}

/// Read and tokenize the configured input file.
pub fn load_records(config: &AnalyzerConfig) -> Result<RecordSet, AnalysisError> {
    let bytes = read_log(&config.input)?;
    let records = RecordSet::from_bytes(&bytes, &config.parse_options(), config.on_malformed)?;

    tracing::info!(
        input = %config.input.display(),
        records = records.len(),
        skipped = records.rejected().len(),
        "log parsed"
    );

    Ok(records)
}

/// Compute every aggregate view over an already parsed record set.
pub fn summarize(records: &RecordSet, config: &AnalyzerConfig) -> AnalysisReport {
    AnalysisReport {
        ip_frequency: ip_frequency(records),
        top_endpoint: top_endpoint(records),
        endpoint_frequency: config.all_endpoints.then(|| endpoint_frequency(records)),
        suspicious: failed_logins(records, config.failed_login_threshold),
        failed_login_threshold: config.failed_login_threshold,
        parsed_lines: records.len(),
        skipped_lines: records.rejected().len(),
    }
}

pub fn run_analysis(config: &AnalyzerConfig) -> Result<AnalysisReport, AnalysisError> {
    let records = load_records(config)?;
    Ok(summarize(&records, config))
}
