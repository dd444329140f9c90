use std::fmt;
use uuid::Uuid;

/// Errors produced by guest and plan stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A row referenced by id does not exist.
    NotFound { id: Uuid },
    /// A persisted row came back without an id.
    MissingId { booking_number: String },
    /// Reading or writing a snapshot file failed.
    Io(String),
    /// A snapshot file exists but could not be decoded.
    Decode(String),
}

impl LedgerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound { .. })
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::NotFound { id } => write!(f, "guest not found: id={id}"),
            LedgerError::MissingId { booking_number } => {
                write!(f, "ledger row without id (booking_number={booking_number})")
            }
            LedgerError::Io(msg) => write!(f, "ledger io error: {msg}"),
            LedgerError::Decode(msg) => write!(f, "ledger decode error: {msg}"),
        }
    }
}

impl std::error::Error for LedgerError {}
