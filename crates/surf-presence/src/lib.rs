//! surf-presence
//!
//! Who is on camp for a window of days.
//!
//! Deterministic, pure selection over ledger rows. The only write is the
//! single-parent flag, pushed back through the guest store.

pub mod calendar;
mod error;
mod overlap;
mod selector;
mod summary;

pub use calendar::{month_bounds, split_range, week_bounds, Period};
pub use error::PresenceError;
pub use overlap::{overlaps, OverlapRule};
pub use selector::{
    filter_raw_bookings, infer_single_parents, parse_period, select_present, validate_range,
    PresenceSelector, RawWindow,
};
pub use summary::RosterSummary;
