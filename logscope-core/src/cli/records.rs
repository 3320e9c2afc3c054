use crate::config::AnalyzerConfig;
use crate::parse::RequestRecord;
use crate::pipeline::load_records;
use anyhow::Result;
use std::io::{self, Write};

/// Print the parsed record set, one request per line.
pub fn run_records(config: &AnalyzerConfig, json: bool) -> Result<()> {
    let records = load_records(config)?;

    let mut out = io::stdout().lock();
    for record in &records {
        if json {
            writeln!(out, "{}", serde_json::to_string(record)?)?;
        } else {
            writeln!(out, "{}", render_record(record))?;
        }
    }

    for err in records.rejected() {
        eprintln!("skipped {err}");
    }

    out.flush()?;
    Ok(())
}

pub fn render_record(record: &RequestRecord) -> String {
    format!(
        "{} → {} {} {} ({}) [{}]",
        record.ip_address,
        record.request_method,
        record.endpoint,
        record.protocol,
        record.status_code,
        record.credential_status
    )
}
