//! surf-ledger
//!
//! Collaborator contracts the roster core is written against, plus the two
//! implementations this workspace ships:
//! - in-memory stores (tests, and the working set of the CLI)
//! - JSON snapshot files (how the CLI persists the ledger between runs)
//! - a fixed tide table standing in for the tide oracle
//!
//! Concrete databases are out of scope; anything that honours the traits in
//! this crate can stand in for them.

mod error;
mod memory;
mod snapshot;

pub use error::LedgerError;
pub use memory::{InMemoryDayPlanStore, InMemoryGuestStore, TideTable, VecBookingSource};
pub use snapshot::{
    load_guest_ledger, load_plan_book, save_guest_ledger, save_plan_book, LEDGER_SCHEMA_VERSION,
};

use chrono::{NaiveDate, NaiveTime};
use surf_schemas::{DayPlan, Guest, RawBooking};
use uuid::Uuid;

/// Env var that overrides the ledger snapshot path configured in YAML.
pub const ENV_LEDGER_PATH: &str = "SURF_LEDGER_PATH";

/// Ledger of guests.
///
/// Duplicate booking numbers are expected (a travel party shares one).
/// `get_by_booking_number` must return rows in a stable order; reconciliation
/// claims matches in that order.
pub trait GuestStore {
    fn get_all(&self) -> Result<Vec<Guest>, LedgerError>;

    fn get_by_booking_number(&self, booking_number: &str) -> Result<Vec<Guest>, LedgerError>;

    /// `LedgerError::NotFound` when no row carries `id`.
    fn get(&self, id: Uuid) -> Result<Guest, LedgerError>;

    /// Insert a new row. The store assigns the id.
    fn save(&mut self, guest: Guest) -> Result<Guest, LedgerError>;

    fn save_all(&mut self, guests: Vec<Guest>) -> Result<Vec<Guest>, LedgerError> {
        guests.into_iter().map(|g| self.save(g)).collect()
    }

    /// Replace every field of row `id` with `guest`, keeping `id`.
    fn update(&mut self, id: Uuid, guest: Guest) -> Result<Guest, LedgerError>;

    /// `Ok(false)` when nothing was deleted.
    fn delete(&mut self, id: Uuid) -> Result<bool, LedgerError>;
}

/// Source of raw booking rows for one import pass.
pub trait RawBookingSource {
    fn source_name(&self) -> &'static str;

    fn get_all(&self) -> anyhow::Result<Vec<RawBooking>>;
}

/// Tide oracle. Answers with the day's two low tides in chronological
/// order, or `None` when the day is not covered.
pub trait TideOracle {
    fn get_low_tides(&self, day: NaiveDate) -> Option<(NaiveTime, NaiveTime)>;
}

/// Stored day plans, one per date.
pub trait DayPlanStore {
    fn get_by_date(&self, date: NaiveDate) -> Result<Option<DayPlan>, LedgerError>;

    fn save(&mut self, plan: DayPlan) -> Result<DayPlan, LedgerError>;
}
