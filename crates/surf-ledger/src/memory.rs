//! In-memory store implementations.
//!
//! Rows are kept in insertion order so lookups by booking number return
//! existing rows in the order they were first written.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use surf_schemas::{DayPlan, Guest, RawBooking};
use uuid::Uuid;

use crate::{DayPlanStore, GuestStore, LedgerError, RawBookingSource, TideOracle};

#[derive(Clone, Debug, Default)]
pub struct InMemoryGuestStore {
    rows: Vec<Guest>,
}

impl InMemoryGuestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with already-persisted rows. Rows without an id get one.
    pub fn from_guests(guests: Vec<Guest>) -> Self {
        let rows = guests
            .into_iter()
            .map(|mut g| {
                if g.id.is_none() {
                    g.id = Some(Uuid::new_v4());
                }
                g
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn guests(&self) -> &[Guest] {
        &self.rows
    }

    pub fn into_guests(self) -> Vec<Guest> {
        self.rows
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.rows.iter().position(|g| g.id == Some(id))
    }
}

impl GuestStore for InMemoryGuestStore {
    fn get_all(&self) -> Result<Vec<Guest>, LedgerError> {
        Ok(self.rows.clone())
    }

    fn get_by_booking_number(&self, booking_number: &str) -> Result<Vec<Guest>, LedgerError> {
        Ok(self
            .rows
            .iter()
            .filter(|g| g.booking_number == booking_number)
            .cloned()
            .collect())
    }

    fn get(&self, id: Uuid) -> Result<Guest, LedgerError> {
        self.position(id)
            .map(|i| self.rows[i].clone())
            .ok_or(LedgerError::NotFound { id })
    }

    fn save(&mut self, mut guest: Guest) -> Result<Guest, LedgerError> {
        guest.id = Some(Uuid::new_v4());
        self.rows.push(guest.clone());
        Ok(guest)
    }

    fn update(&mut self, id: Uuid, mut guest: Guest) -> Result<Guest, LedgerError> {
        let i = self.position(id).ok_or(LedgerError::NotFound { id })?;
        guest.id = Some(id);
        self.rows[i] = guest.clone();
        Ok(guest)
    }

    fn delete(&mut self, id: Uuid) -> Result<bool, LedgerError> {
        match self.position(id) {
            Some(i) => {
                self.rows.remove(i);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryDayPlanStore {
    plans: BTreeMap<NaiveDate, DayPlan>,
}

impl InMemoryDayPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_plans(plans: Vec<DayPlan>) -> Self {
        Self {
            plans: plans.into_iter().map(|p| (p.date, p)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Plans ordered by date.
    pub fn plans(&self) -> Vec<DayPlan> {
        self.plans.values().cloned().collect()
    }
}

impl DayPlanStore for InMemoryDayPlanStore {
    fn get_by_date(&self, date: NaiveDate) -> Result<Option<DayPlan>, LedgerError> {
        Ok(self.plans.get(&date).cloned())
    }

    fn save(&mut self, plan: DayPlan) -> Result<DayPlan, LedgerError> {
        self.plans.insert(plan.date, plan.clone());
        Ok(plan)
    }
}

/// Booking source over rows already held in memory.
#[derive(Clone, Debug, Default)]
pub struct VecBookingSource {
    rows: Vec<RawBooking>,
}

impl VecBookingSource {
    pub fn new(rows: Vec<RawBooking>) -> Self {
        Self { rows }
    }
}

impl RawBookingSource for VecBookingSource {
    fn source_name(&self) -> &'static str {
        "memory"
    }

    fn get_all(&self) -> anyhow::Result<Vec<RawBooking>> {
        Ok(self.rows.clone())
    }
}

/// Tide oracle backed by a fixed day -> low tides table.
#[derive(Clone, Debug, Default)]
pub struct TideTable {
    days: BTreeMap<NaiveDate, (NaiveTime, NaiveTime)>,
}

impl TideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the day's low tides; they are stored in chronological order.
    pub fn insert(&mut self, day: NaiveDate, a: NaiveTime, b: NaiveTime) {
        let pair = if a <= b { (a, b) } else { (b, a) };
        self.days.insert(day, pair);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl TideOracle for TideTable {
    fn get_low_tides(&self, day: NaiveDate) -> Option<(NaiveTime, NaiveTime)> {
        self.days.get(&day).copied()
    }
}
