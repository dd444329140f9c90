//! surf-testkit
//!
//! Fixtures and instrumented stores shared by the scenario tests.

mod fixtures;
mod recording;

pub use fixtures::{d, t, GuestBuilder, RawBookingBuilder};
pub use recording::{CallCounts, FixedTideOracle, RecordingGuestStore};
