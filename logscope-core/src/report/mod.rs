//! Presentation of analysis results.
//!
//! Nothing here computes anything: the aggregated views arrive fully built
//! in an [`AnalysisReport`] and are only laid out, either as console text or
//! as a single spreadsheet worksheet.

mod console;
mod spreadsheet;

#[cfg(test)]
mod tests;

pub use console::*;
pub use spreadsheet::*;

use crate::analysis::{EndpointHit, FrequencyTable};
use serde::Serialize;

/// Everything one run produces, ready to be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub ip_frequency: FrequencyTable,
    pub top_endpoint: Option<EndpointHit>,
    /// Full per-endpoint table, present only when requested.
    pub endpoint_frequency: Option<FrequencyTable>,
    pub suspicious: FrequencyTable,
    pub failed_login_threshold: usize,
    pub parsed_lines: usize,
    pub skipped_lines: usize,
}

pub const IP_HEADER: &str = "IP address";
pub const REQUEST_COUNT_HEADER: &str = "Request Count";
pub const TOP_ENDPOINT_HEADER: &str = "Most Frequently Accessed Endpoint";
pub const ENDPOINT_HEADER: &str = "Endpoint";
pub const FREQUENCY_HEADER: &str = "Frequency";
pub const FAILED_LOGIN_HEADER: &str = "Failed Login Count";
