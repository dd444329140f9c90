use std::fmt;

/// Errors produced by CSV parsing in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvIngestError {
    /// An I/O or CSV-library error.
    Io(String),
    /// The header row is missing a required column.
    MissingHeader(String),
    /// A record field could not be parsed into the expected type.
    ParseField {
        row: usize,
        field: &'static str,
        raw: String,
    },
}

impl fmt::Display for CsvIngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvIngestError::Io(msg) => write!(f, "csv io error: {msg}"),
            CsvIngestError::MissingHeader(col) => {
                write!(f, "csv missing required header column: '{col}'")
            }
            CsvIngestError::ParseField { row, field, raw } => {
                write!(f, "csv row {row}: cannot parse field '{field}' from value '{raw}'")
            }
        }
    }
}

impl std::error::Error for CsvIngestError {}

impl From<csv::Error> for CsvIngestError {
    fn from(e: csv::Error) -> Self {
        CsvIngestError::Io(e.to_string())
    }
}
