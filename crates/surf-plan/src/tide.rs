use chrono::{Duration, NaiveDate, NaiveDateTime};
use surf_ledger::TideOracle;

use crate::PlanError;

/// Slot A starts this long before the second low tide.
pub const SLOT_A_LEAD_MINUTES: i64 = 90;

/// `(slot_a_start, slot_b_start)` for `day`. Only the second low tide is
/// used: slot B starts at it, slot A ninety minutes earlier.
pub fn slot_starts<T: TideOracle + ?Sized>(
    day: NaiveDate,
    oracle: &T,
) -> Result<(NaiveDateTime, NaiveDateTime), PlanError> {
    let (_, second) = oracle
        .get_low_tides(day)
        .ok_or(PlanError::MissingLowTide { day })?;
    let b = day.and_time(second);
    let a = b - Duration::minutes(SLOT_A_LEAD_MINUTES);
    Ok((a, b))
}
