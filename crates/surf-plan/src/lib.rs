//! surf-plan
//!
//! Day plans: eligible guests -> level x age-band groups -> two tide slots.
//!
//! - `allocator`: bucket guests by (skill level, age band), first-seen order
//! - `slots`: cap slot A groups at [`SLOT_CAPACITY`], overflow to slot B
//! - `tide`: slot start times from the second low tide
//! - `planner`: one stored plan per date; re-requests return it unchanged
//!
//! Allocation and splitting are pure. The planner is the only part that
//! reads or writes stores.

pub mod allocator;
mod error;
pub mod planner;
pub mod slots;
pub mod tide;

pub use allocator::allocate;
pub use error::PlanError;
pub use planner::DayPlanner;
pub use slots::{build_day_plan, SLOT_CAPACITY};
pub use tide::{slot_starts, SLOT_A_LEAD_MINUTES};
