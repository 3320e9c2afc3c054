pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod parse;
pub mod pipeline;
pub mod report;

pub use error::AnalysisError;
