//! Access log parsing
//!
//! Raw text goes in, a [`RecordSet`] comes out:
//!
//! raw line
//! parse_line
//! RequestRecord
//! build_record_set
//! RecordSet
//!
//! Each line is handled on its own, so one broken line never shifts the
//! fields of the next.

mod builder;
mod error;
mod line;
mod types;


pub use builder::*;
pub use error::*;
pub use line::*;
pub use types::*;
