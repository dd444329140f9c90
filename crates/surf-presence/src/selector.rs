use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use chrono::NaiveDate;
use surf_ledger::GuestStore;
use surf_reconcile::{parse_stay, SkippedRow, TransformOptions};
use surf_schemas::{Guest, RawBooking, SkillLevel};
use tracing::{debug, warn};

use crate::{overlaps, OverlapRule, PresenceError};

pub fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<(), PresenceError> {
    if start > end {
        return Err(PresenceError::InvalidRange { start, end });
    }
    Ok(())
}

fn parse_day(value: &str) -> Result<NaiveDate, PresenceError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| PresenceError::NotADate {
        value: value.to_string(),
    })
}

/// Parse a period given as `YYYY-MM-DD` text and validate its order.
pub fn parse_period(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), PresenceError> {
    let (s, e) = (parse_day(start)?, parse_day(end)?);
    validate_range(s, e)?;
    Ok((s, e))
}

/// Active guests (not cancelled or expired) whose stay matches the period
/// under `rule`, in input order.
pub fn select_present(
    guests: &[Guest],
    start: NaiveDate,
    end: NaiveDate,
    rule: OverlapRule,
) -> Vec<Guest> {
    guests
        .iter()
        .filter(|g| g.is_active() && overlaps(rule, g.arrival, g.departure, start, end))
        .cloned()
        .collect()
}

/// Set `single_parent` on every adult of `active`.
///
/// An adult is a single parent when no other adult in `active` shares the
/// booking number and at least one minor does. Non-adults are left alone.
/// Returns the indices whose flag changed.
pub fn infer_single_parents(active: &mut [Guest]) -> Vec<usize> {
    // booking number -> (adults, minors)
    let mut party: HashMap<&str, (usize, usize)> = HashMap::new();
    for g in active.iter() {
        let e = party.entry(g.booking_number.as_str()).or_default();
        if g.age_band.is_adult() {
            e.0 += 1;
        } else {
            e.1 += 1;
        }
    }
    let flags: Vec<Option<bool>> = active
        .iter()
        .map(|g| {
            if !g.age_band.is_adult() {
                return None;
            }
            let (adults, minors) = party
                .get(g.booking_number.as_str())
                .copied()
                .unwrap_or_default();
            Some(adults == 1 && minors > 0)
        })
        .collect();

    let mut changed = Vec::new();
    for (i, flag) in flags.into_iter().enumerate() {
        if let Some(f) = flag {
            if active[i].single_parent != f {
                active[i].single_parent = f;
                changed.push(i);
            }
        }
    }
    changed
}

/// Raw rows of one lesson window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawWindow {
    /// Rows whose stay matches the window, in feed order.
    pub rows: Vec<RawBooking>,
    /// Rows whose stay dates do not parse under the import's date formats.
    pub skipped: Vec<SkippedRow>,
}

/// Raw booking rows whose stay matches the window under `rule`.
///
/// Stay dates are read with the same formats the import uses, so every row
/// the ledger would accept is judged on its dates. Rows that fail to parse
/// are returned in `skipped`.
pub fn filter_raw_bookings(
    rows: &[RawBooking],
    start: NaiveDate,
    end: NaiveDate,
    rule: OverlapRule,
    opts: &TransformOptions,
) -> Result<RawWindow, PresenceError> {
    validate_range(start, end)?;
    let mut window = RawWindow::default();
    for (row, raw) in rows.iter().enumerate() {
        match parse_stay(raw, opts) {
            Ok((arrival, departure)) => {
                if overlaps(rule, arrival, departure, start, end) {
                    window.rows.push(raw.clone());
                }
            }
            Err(error) => {
                warn!(row, booking_id = %raw.booking_id, %error, "raw row left out of window");
                window.skipped.push(SkippedRow {
                    row,
                    booking_id: raw.booking_id.clone(),
                    error,
                });
            }
        }
    }
    Ok(window)
}

/// Presence queries over a guest store.
///
/// Built over `&S` for read-only queries; [`Self::eligible_for_lessons`]
/// writes single-parent flags back and needs `&mut S`.
pub struct PresenceSelector<R> {
    store: R,
}

impl<R> PresenceSelector<R>
where
    R: Deref,
    R::Target: GuestStore,
{
    pub fn new(store: R) -> Self {
        Self { store }
    }

    /// Guests on camp at any point of `[start, end]` (inclusive overlap),
    /// excluding cancelled and expired bookings.
    pub fn active_guests(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Guest>, PresenceError> {
        validate_range(start, end)?;
        let all = self.store.get_all()?;
        Ok(select_present(&all, start, end, OverlapRule::Inclusive))
    }

    /// Text-argument form of [`Self::active_guests`].
    pub fn active_guests_between(&self, start: &str, end: &str) -> Result<Vec<Guest>, PresenceError> {
        let (s, e) = parse_period(start, end)?;
        self.active_guests(s, e)
    }

    /// Guests whose stay strictly brackets the window: arrived before
    /// `start` and leaving after `end`.
    pub fn bracketing_guests(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Guest>, PresenceError> {
        validate_range(start, end)?;
        let all = self.store.get_all()?;
        Ok(select_present(
            &all,
            start,
            end,
            OverlapRule::StrictContainment,
        ))
    }

    /// Every ledger guest at `level`, or `None` when nobody is.
    pub fn by_level(&self, level: SkillLevel) -> Result<Option<Vec<Guest>>, PresenceError> {
        let hits: Vec<Guest> = self
            .store
            .get_all()?
            .into_iter()
            .filter(|g| g.skill_level == level)
            .collect();
        Ok(if hits.is_empty() { None } else { Some(hits) })
    }
}

impl<R> PresenceSelector<R>
where
    R: DerefMut,
    R::Target: GuestStore,
{
    /// Active guests with at least one paid lesson.
    ///
    /// Single-parent inference runs over the full active set first, so a
    /// parent without lessons still counts as the party's adult. Changed
    /// flags are written back to the store.
    pub fn eligible_for_lessons(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Guest>, PresenceError> {
        let mut active = self.active_guests(start, end)?;
        let changed = infer_single_parents(&mut active);
        for &i in &changed {
            if let Some(id) = active[i].id {
                self.store.update(id, active[i].clone())?;
            }
        }
        debug!(
            %start,
            %end,
            active = active.len(),
            single_parent_flags_changed = changed.len(),
            "single-parent inference applied"
        );
        Ok(active.into_iter().filter(Guest::has_lessons).collect())
    }
}
