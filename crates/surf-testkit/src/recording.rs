use chrono::{NaiveDate, NaiveTime};
use surf_ledger::{GuestStore, InMemoryGuestStore, LedgerError, TideOracle};
use surf_schemas::Guest;
use uuid::Uuid;

/// Per-method call counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub save: usize,
    pub save_all: usize,
    /// Rows written by `save_all` calls.
    pub save_all_rows: usize,
    pub update: usize,
    pub delete: usize,
}

impl CallCounts {
    /// Calls that mutate the ledger.
    pub fn writes(&self) -> usize {
        self.save + self.save_all + self.update + self.delete
    }
}

/// In-memory guest store that counts every write call.
#[derive(Clone, Debug, Default)]
pub struct RecordingGuestStore {
    inner: InMemoryGuestStore,
    calls: CallCounts,
}

impl RecordingGuestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(guests: Vec<Guest>) -> Self {
        Self {
            inner: InMemoryGuestStore::from_guests(guests),
            calls: CallCounts::default(),
        }
    }

    pub fn calls(&self) -> CallCounts {
        self.calls
    }

    pub fn reset_calls(&mut self) {
        self.calls = CallCounts::default();
    }

    pub fn guests(&self) -> &[Guest] {
        self.inner.guests()
    }
}

impl GuestStore for RecordingGuestStore {
    fn get_all(&self) -> Result<Vec<Guest>, LedgerError> {
        self.inner.get_all()
    }

    fn get_by_booking_number(&self, booking_number: &str) -> Result<Vec<Guest>, LedgerError> {
        self.inner.get_by_booking_number(booking_number)
    }

    fn get(&self, id: Uuid) -> Result<Guest, LedgerError> {
        self.inner.get(id)
    }

    fn save(&mut self, guest: Guest) -> Result<Guest, LedgerError> {
        self.calls.save += 1;
        self.inner.save(guest)
    }

    fn save_all(&mut self, guests: Vec<Guest>) -> Result<Vec<Guest>, LedgerError> {
        self.calls.save_all += 1;
        self.calls.save_all_rows += guests.len();
        self.inner.save_all(guests)
    }

    fn update(&mut self, id: Uuid, guest: Guest) -> Result<Guest, LedgerError> {
        self.calls.update += 1;
        self.inner.update(id, guest)
    }

    fn delete(&mut self, id: Uuid) -> Result<bool, LedgerError> {
        self.calls.delete += 1;
        self.inner.delete(id)
    }
}

/// Tide oracle answering the same two low tides for every day.
#[derive(Clone, Copy, Debug)]
pub struct FixedTideOracle {
    pub first: NaiveTime,
    pub second: NaiveTime,
}

impl FixedTideOracle {
    pub fn new(first: NaiveTime, second: NaiveTime) -> Self {
        Self { first, second }
    }
}

impl TideOracle for FixedTideOracle {
    fn get_low_tides(&self, _day: NaiveDate) -> Option<(NaiveTime, NaiveTime)> {
        Some((self.first, self.second))
    }
}
