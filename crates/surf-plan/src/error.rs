use std::fmt;

use chrono::NaiveDate;
use surf_ledger::LedgerError;
use surf_presence::PresenceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The tide oracle has no low tides for `day`.
    MissingLowTide { day: NaiveDate },
    Presence(PresenceError),
    Ledger(LedgerError),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::MissingLowTide { day } => write!(f, "no low tides known for {day}"),
            PlanError::Presence(e) => write!(f, "{e}"),
            PlanError::Ledger(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Presence(e) => Some(e),
            PlanError::Ledger(e) => Some(e),
            PlanError::MissingLowTide { .. } => None,
        }
    }
}

impl From<PresenceError> for PlanError {
    fn from(e: PresenceError) -> Self {
        PlanError::Presence(e)
    }
}

impl From<LedgerError> for PlanError {
    fn from(e: LedgerError) -> Self {
        PlanError::Ledger(e)
    }
}
