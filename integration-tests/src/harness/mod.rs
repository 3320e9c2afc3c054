mod fixtures;
pub mod tracing;

pub use fixtures::{LogFixture, config_for};
pub use self::tracing::{CapturedEvent, capture_events};
