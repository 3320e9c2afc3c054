use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Path to the config file
        #[arg(default_value = "logscope.toml")]
        path: PathBuf,
    },

    /// Print the effective configuration as TOML
    Dump {
        /// Path to the config file; defaults are printed when omitted
        path: Option<PathBuf>,
    },
}

pub fn check(path: &Path) -> anyhow::Result<()> {
    let cfg = AnalyzerConfig::from_file(path).map_err(AnalysisError::from)?;

    println!("✔ Config loaded successfully");
    println!("✔ input: {}", cfg.input.display());
    println!("✔ output: {}", cfg.output.display());
    println!("✔ failed login threshold: {}", cfg.failed_login_threshold);
    Ok(())
}

pub fn dump(path: Option<&Path>) -> anyhow::Result<()> {
    let cfg = match path {
        Some(path) => AnalyzerConfig::from_file(path).map_err(AnalysisError::from)?,
        None => AnalyzerConfig::default(),
    };

    print!("{}", toml::to_string_pretty(&cfg)?);
    Ok(())
}
