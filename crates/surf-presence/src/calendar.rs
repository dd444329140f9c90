//! Camp calendar.
//!
//! Camp weeks run Sunday to Saturday. All ranges are inclusive on both ends.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::PresenceError;

// ---------------------------------------------------------------------------
// Weeks
// ---------------------------------------------------------------------------

/// The Saturday closing the week that starts on `sunday`.
pub fn saturday_after(sunday: NaiveDate) -> NaiveDate {
    sunday + Days::new(6)
}

/// Sunday through Saturday starting at `sunday`.
pub fn week_dates(sunday: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| sunday + Days::new(i as u64))
}

/// `(sunday, saturday)` of the camp week containing `d`.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = d.weekday().num_days_from_sunday();
    let sunday = d - Days::new(u64::from(back));
    (sunday, saturday_after(sunday))
}

// ---------------------------------------------------------------------------
// Months and splitting
// ---------------------------------------------------------------------------

/// First and last day of the month containing `d`.
pub fn month_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = d - Days::new(u64::from(d.day0()));
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|n| n.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

/// Split `[start, end]` into consecutive calendar periods, clamping the
/// first and last piece to the range.
pub fn split_range(
    start: NaiveDate,
    end: NaiveDate,
    period: Period,
) -> Result<Vec<(NaiveDate, NaiveDate)>, PresenceError> {
    if start > end {
        return Err(PresenceError::InvalidRange { start, end });
    }
    let mut out = Vec::new();
    let mut cur = start;
    loop {
        let period_end = match period {
            Period::Daily => cur,
            Period::Weekly => week_bounds(cur).1,
            Period::Monthly => month_bounds(cur).1,
        };
        let stop = period_end.min(end);
        out.push((cur, stop));
        match stop.succ_opt() {
            Some(next) if next <= end => cur = next,
            _ => break,
        }
    }
    Ok(out)
}
