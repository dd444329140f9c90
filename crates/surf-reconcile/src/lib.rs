//! surf-reconcile
//!
//! Turns a re-imported booking feed into ledger writes.
//!
//! - rows are grouped by booker id (= ledger booking number)
//! - a fresh booking number is bulk-inserted
//! - otherwise each incoming guest claims the first unclaimed existing row
//!   that matches on booking number, gender, age band and stay dates
//! - matched rows are rewritten only when a field actually changed
//! - existing rows nobody claimed are reported, never deleted
//! - a row that fails to transform is logged and skipped
//!
//! Matching and diffing are pure; only [`ReconciliationEngine`] talks to a
//! [`surf_ledger::GuestStore`].

mod diff;
mod engine;
mod identity;
mod transform;
mod types;

pub use diff::{diff_guests, has_changed};
pub use engine::{plan_group, ReconciliationEngine};
pub use identity::is_probable_match;
pub use transform::{
    guest_from_raw, parse_lesson_count, parse_stay, RowTransformError, TransformOptions,
};
pub use types::*;
