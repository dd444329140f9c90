//! surf-schemas
//!
//! Shared data model for the camp roster:
//! - `Guest`: the long-lived ledger row (one traveller)
//! - `RawBooking`: one row of the external booking feed, still untyped
//! - `Group` / `Slot` / `DayPlan`: ephemeral lesson planning output
//!
//! Free-text skill levels, age bands and booking statuses are classified into
//! closed enums once, at ledger-write time. The original text is kept next to
//! the enum for display only.

mod booking;
mod class;
mod guest;
mod plan;

pub use booking::{LessonQuantity, RawBooking};
pub use class::{AgeBand, BookingStatus, SkillLevel};
pub use guest::Guest;
pub use plan::{DayPlan, Group, Instructor, Slot, SlotKind};
