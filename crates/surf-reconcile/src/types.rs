use surf_schemas::Guest;
use uuid::Uuid;

use crate::RowTransformError;

/// One field that differs between an incoming guest and its ledger row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldChange {
    pub field: &'static str,
    pub existing: String,
    pub incoming: String,
}

/// What reconciliation decided for one incoming guest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// No existing row matched; write a new row.
    Insert(Guest),
    /// Matched row `id` differs; replace it with `guest`.
    Update {
        id: Uuid,
        guest: Guest,
        changes: Vec<FieldChange>,
    },
    /// Matched row `id` is identical; no write.
    Unchanged { id: Uuid },
}

/// Decisions for one booking number, in incoming order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupPlan {
    pub decisions: Vec<Decision>,
    /// Existing rows no incoming guest claimed, in ledger order.
    pub unclaimed: Vec<Uuid>,
}

/// A raw row dropped during transform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRow {
    /// Zero-based position in the source feed.
    pub row: usize,
    pub booking_id: String,
    pub error: RowTransformError,
}

/// Outcome of one import pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Booking-number groups processed.
    pub groups: usize,
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: Vec<SkippedRow>,
    pub unclaimed: Vec<Uuid>,
}

impl ReconcileReport {
    /// Ledger writes issued by the pass.
    pub fn writes(&self) -> usize {
        self.inserted + self.updated
    }

    pub fn is_noop(&self) -> bool {
        self.writes() == 0
    }
}
