//! Aggregate views over a parsed [`RecordSet`](crate::parse::RecordSet).
//!
//! Every function here is independent and pure: it reads the record set and
//! returns a fresh table. An empty record set produces an empty table (or
//! `None` for the single top endpoint).

mod endpoints;
mod failed_logins;
mod frequency;
mod ip_frequency;

#[cfg(test)]
mod tests;

pub use endpoints::*;
pub use failed_logins::*;
pub use frequency::*;
pub use ip_frequency::*;
