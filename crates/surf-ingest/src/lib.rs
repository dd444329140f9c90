//! surf-ingest
//!
//! CSV exports -> in-memory inputs for the roster core.
//!
//! - booking exports -> [`surf_schemas::RawBooking`] ([`bookings`])
//! - tide tables -> [`surf_ledger::TideTable`] ([`tides`])
//!
//! Read side only. Cell values stay raw strings for bookings; a bad cell is
//! the reconciliation transform's problem, not ours. Only structural
//! problems (unreadable file, missing header) are errors here.

pub mod bookings;
mod error;
pub mod tides;

pub use bookings::{normalize_header, parse_bookings_file, parse_bookings_str, CsvBookingSource};
pub use error::CsvIngestError;
pub use tides::{load_tide_table, parse_tides_str};
