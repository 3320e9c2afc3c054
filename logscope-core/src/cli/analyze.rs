use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::pipeline::run_analysis;
use crate::report::{render_console, write_spreadsheet};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// ANSI colors on the console report.
    pub color: bool,
    /// Write the spreadsheet file in addition to the console report.
    pub export: bool,
}

pub fn run_analyze(config: &AnalyzerConfig, opts: OutputOptions) -> Result<(), AnalysisError> {
    run_analyze_to(config, opts, &mut io::stdout().lock())
}

/// [`run_analyze`] with the console report sent to `out`.
///
/// Every write to `out` goes through [`AnalysisError::OutputWrite`], so a
/// closed pipe ends the run with the output exit code instead of a panic.
pub fn run_analyze_to<W: Write>(
    config: &AnalyzerConfig,
    opts: OutputOptions,
    out: &mut W,
) -> Result<(), AnalysisError> {
    let report = run_analysis(config)?;

    let console = render_console(&report, opts.color);
    out.write_all(console.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| AnalysisError::output_write(CONSOLE, e))?;

    if opts.export {
        write_spreadsheet(&config.output, &report)?;
        writeln!(
            out,
            "\nAnalysis report has been saved to: {}",
            config.output.display()
        )
        .and_then(|_| out.flush())
        .map_err(|e| AnalysisError::output_write(CONSOLE, e))?;
    }

    Ok(())
}

const CONSOLE: &str = "<stdout>";
