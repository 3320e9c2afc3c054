use crate::analysis::frequency::FrequencyTable;
use crate::parse::RecordSet;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointHit {
    pub endpoint: String,
    pub count: usize,
}

/// Hits per endpoint, most popular first.
pub fn endpoint_frequency(records: &RecordSet) -> FrequencyTable {
    FrequencyTable::count(records.iter().map(|r| r.endpoint.as_str()))
}

/// The most requested endpoint, or `None` when there are no records.
///
/// When several endpoints share the top count the one that appears first in
/// the log wins.
pub fn top_endpoint(records: &RecordSet) -> Option<EndpointHit> {
    endpoint_frequency(records).first().map(|e| EndpointHit {
        endpoint: e.key.clone(),
        count: e.count,
    })
}
