mod spreadsheet_tests;

use crate::analysis::{EndpointHit, FrequencyTable};
use crate::report::AnalysisReport;

fn sample_report() -> AnalysisReport {
    AnalysisReport {
        ip_frequency: FrequencyTable::count([
            "192.168.1.1",
            "203.0.113.5",
            "192.168.1.1",
        ]),
        top_endpoint: Some(EndpointHit {
            endpoint: "/login".into(),
            count: 2,
        }),
        endpoint_frequency: None,
        suspicious: FrequencyTable::count(["203.0.113.5"; 11]).above(10),
        failed_login_threshold: 10,
        parsed_lines: 3,
        skipped_lines: 0,
    }
}
