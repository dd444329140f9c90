use std::fmt;

use chrono::NaiveDate;
use surf_ledger::LedgerError;

/// Caller misuse of a presence query, or a ledger failure underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceError {
    /// `start` is after `end`.
    InvalidRange { start: NaiveDate, end: NaiveDate },
    /// A period bound given as text is not a calendar date.
    NotADate { value: String },
    Ledger(LedgerError),
}

impl PresenceError {
    /// Invalid caller input, as opposed to a ledger failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PresenceError::InvalidRange { .. } | PresenceError::NotADate { .. }
        )
    }
}

impl fmt::Display for PresenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresenceError::InvalidRange { start, end } => {
                write!(f, "invalid range: start {start} is after end {end}")
            }
            PresenceError::NotADate { value } => {
                write!(f, "not a date (expected YYYY-MM-DD): '{value}'")
            }
            PresenceError::Ledger(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PresenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresenceError::Ledger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LedgerError> for PresenceError {
    fn from(e: LedgerError) -> Self {
        PresenceError::Ledger(e)
    }
}
