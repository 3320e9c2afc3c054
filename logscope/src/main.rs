use clap::{Args, Parser, Subcommand};
use logscope_core::AnalysisError;
use logscope_core::cli::{ConfigCmd, OutputOptions, report_failure, run_analyze, run_records};
use logscope_core::config::AnalyzerConfig;
use logscope_core::logging::{LogFormat, default_log_format, init_logging};
use logscope_core::parse::MalformedLinePolicy;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "logscope",
    version,
    about = "logscope: access log traffic and failed-login report"
)]
struct Cli {
    /// Diagnostic log format on stderr (json or pretty)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze an access log and write the report (default)
    Analyze(AnalyzeArgs),

    /// Print the parsed records of an access log
    Records {
        #[command(flatten)]
        source: SourceArgs,

        /// One JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// Path to a logscope.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Access log to read (default: sample.log in the current directory)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Stop at the first malformed line instead of skipping it
    #[arg(long)]
    abort_on_malformed: bool,

    /// Treat 401 lines without a credential marker as malformed
    #[arg(long)]
    strict_credentials: bool,
}

#[derive(Args, Debug, Default)]
struct AnalyzeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Spreadsheet (CSV) report destination
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Failed logins an IP may have before it is reported
    #[arg(short, long)]
    threshold: Option<usize>,

    /// Report every endpoint, not just the most popular one
    #[arg(long)]
    all_endpoints: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Skip writing the spreadsheet file
    #[arg(long)]
    no_export: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match cli.command {
        Some(Command::Analyze(args)) => analyze(args),
        None => analyze(AnalyzeArgs::default()),

        Some(Command::Records { source, json }) => {
            load_config(&source).and_then(|cfg| run_records(&cfg, json))
        }

        Some(Command::Config { cmd }) => match cmd {
            ConfigCmd::Check { path } => logscope_core::cli::check(&path),
            ConfigCmd::Dump { path } => logscope_core::cli::dump(path.as_deref()),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report_failure(&err)),
    }
}

fn analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.source)?;

    if let Some(output) = args.output {
        cfg.output = output;
    }
    if let Some(threshold) = args.threshold {
        cfg.failed_login_threshold = threshold;
    }
    cfg.all_endpoints |= args.all_endpoints;
    cfg.validate().map_err(AnalysisError::from)?;

    let color =
        !args.no_color && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();

    run_analyze(
        &cfg,
        OutputOptions {
            color,
            export: !args.no_export,
        },
    )?;
    Ok(())
}

/// Config file values first, command line flags on top.
fn load_config(source: &SourceArgs) -> anyhow::Result<AnalyzerConfig> {
    let mut cfg = match &source.config {
        Some(path) => AnalyzerConfig::from_file(path).map_err(AnalysisError::from)?,
        None => AnalyzerConfig::default(),
    };

    if let Some(input) = &source.input {
        cfg.input = input.clone();
    }
    if source.abort_on_malformed {
        cfg.on_malformed = MalformedLinePolicy::Abort;
    }
    cfg.strict_credentials |= source.strict_credentials;

    cfg.validate().map_err(AnalysisError::from)?;
    Ok(cfg)
}
