pub mod fixtures;
pub mod tracing;

pub use fixtures::{TempLog, fixture_path};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
