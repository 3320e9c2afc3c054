use crate::analysis::frequency::FrequencyTable;
use crate::parse::RecordSet;

/// An IP needs strictly more failed logins than this to be reported.
pub const FAILED_LOGIN_THRESHOLD: usize = 10;

/// IPs with more than `threshold` failed logins, worst first.
///
/// A failed login is a 401 response or a line marked with invalid
/// credentials.
pub fn failed_logins(records: &RecordSet, threshold: usize) -> FrequencyTable {
    let failed = records
        .iter()
        .filter(|r| r.is_failed_login())
        .map(|r| r.ip_address.as_str());

    let table = FrequencyTable::count(failed).above(threshold);

    tracing::debug!(threshold, suspicious = table.len(), "failed logins counted");

    table
}
