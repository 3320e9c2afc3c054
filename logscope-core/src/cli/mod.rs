mod analyze;
mod config;
mod failure;
mod records;


pub use analyze::*;
pub use config::*;
pub use failure::*;
pub use records::*;
