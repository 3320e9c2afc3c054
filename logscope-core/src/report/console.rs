use crate::analysis::FrequencyTable;
use crate::report::{
    AnalysisReport, ENDPOINT_HEADER, FAILED_LOGIN_HEADER, FREQUENCY_HEADER, IP_HEADER,
    REQUEST_COUNT_HEADER,
};
use owo_colors::OwoColorize;
use std::fmt::Write;

const RULE_WIDTH: usize = 37;

/// Render the report as console text. `color` toggles ANSI styling.
pub fn render_console(report: &AnalysisReport, color: bool) -> String {
    let p = Palette { color };
    let mut out = String::new();

    let _ = writeln!(out, "\n---------- {} ----------\n", p.title("Analysis Report"));

    let _ = writeln!(out, "{}", p.heading("Request counts per IP address:"));
    out.push_str(&render_table(
        IP_HEADER,
        REQUEST_COUNT_HEADER,
        &report.ip_frequency,
    ));
    out.push('\n');

    let _ = writeln!(out, "{}", p.heading("Most Frequently Accessed Endpoint:"));
    match (&report.endpoint_frequency, &report.top_endpoint) {
        (Some(all), _) if !all.is_empty() => {
            out.push_str(&p.value(&render_table(ENDPOINT_HEADER, FREQUENCY_HEADER, all)));
        }
        (_, Some(top)) => {
            let _ = writeln!(
                out,
                "{} (Accessed {} times)",
                p.value(&top.endpoint),
                p.value(&top.count.to_string())
            );
        }
        _ => {
            let _ = writeln!(out, "{}", p.muted("No requests found"));
        }
    }
    out.push('\n');

    let _ = writeln!(out, "{}", p.heading("Suspicious Activity Detected:"));
    if report.suspicious.is_empty() {
        let _ = writeln!(out, "{}", p.ok("No suspicious activity"));
    } else {
        out.push_str(&p.alert(&render_table(
            IP_HEADER,
            FAILED_LOGIN_HEADER,
            &report.suspicious,
        )));
        let _ = writeln!(
            out,
            "(more than {} failed login attempts)",
            report.failed_login_threshold
        );
    }

    let _ = writeln!(out, "\n{}", "-".repeat(RULE_WIDTH));

    if report.skipped_lines > 0 {
        let _ = writeln!(
            out,
            "{}",
            p.muted(&format!(
                "{} line(s) analyzed, {} malformed line(s) skipped",
                report.parsed_lines, report.skipped_lines
            ))
        );
    }

    out
}

/// Two-column table: keys left aligned, counts right aligned.
pub fn render_table(key_header: &str, count_header: &str, table: &FrequencyTable) -> String {
    let key_width = table
        .iter()
        .map(|e| e.key.len())
        .chain(std::iter::once(key_header.len()))
        .max()
        .unwrap_or(0);

    let count_width = table
        .iter()
        .map(|e| e.count.to_string().len())
        .chain(std::iter::once(count_header.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{key_header:<key_width$}  {count_header:>count_width$}");
    for entry in table {
        let _ = writeln!(
            out,
            "{:<key_width$}  {:>count_width$}",
            entry.key, entry.count
        );
    }
    out
}

struct Palette {
    color: bool,
}

impl Palette {
    fn paint(&self, text: &str, style: owo_colors::Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn title(&self, text: &str) -> String {
        self.paint(text, owo_colors::Style::new().green().bold())
    }

    fn heading(&self, text: &str) -> String {
        self.paint(text, owo_colors::Style::new().yellow().bold())
    }

    fn value(&self, text: &str) -> String {
        self.paint(text, owo_colors::Style::new().blue().bold())
    }

    fn ok(&self, text: &str) -> String {
        self.paint(text, owo_colors::Style::new().green().bold())
    }

    fn alert(&self, text: &str) -> String {
        self.paint(text, owo_colors::Style::new().red().bold())
    }

    fn muted(&self, text: &str) -> String {
        self.paint(text, owo_colors::Style::new().dimmed())
    }
}
