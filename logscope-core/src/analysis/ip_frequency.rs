use crate::analysis::frequency::FrequencyTable;
use crate::parse::RecordSet;

/// Requests per client IP, busiest first.
pub fn ip_frequency(records: &RecordSet) -> FrequencyTable {
    FrequencyTable::count(records.iter().map(|r| r.ip_address.as_str()))
}
