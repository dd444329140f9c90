//! Tide table parsing.
//!
//! Columns (normalised like booking headers): `date` (`YYYY-MM-DD`),
//! `low_tide_1`, `low_tide_2` (`HH:MM` or `HH:MM:SS`). Unlike booking rows,
//! a malformed tide row fails the whole table: a plan built on a wrong
//! tide is worse than no plan.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use surf_ledger::TideTable;
use tracing::debug;

use crate::bookings::normalize_header;
use crate::CsvIngestError;

fn parse_time(row: usize, field: &'static str, raw: &str) -> Result<NaiveTime, CsvIngestError> {
    let t = raw.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .map_err(|_| CsvIngestError::ParseField {
            row,
            field,
            raw: t.to_string(),
        })
}

pub fn parse_tides_str(src: &str) -> Result<TideTable, CsvIngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(src.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(normalize_header).collect();
    let col = |name: &str| -> Result<usize, CsvIngestError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CsvIngestError::MissingHeader(name.to_string()))
    };
    let (di, ai, bi) = (col("date")?, col("low_tide_1")?, col("low_tide_2")?);

    let mut table = TideTable::new();
    for (n, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // 1-based, header = row 1.
        let row = n + 2;
        let date_raw = rec.get(di).unwrap_or("");
        let day = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d").map_err(|_| {
            CsvIngestError::ParseField {
                row,
                field: "date",
                raw: date_raw.to_string(),
            }
        })?;
        let a = parse_time(row, "low_tide_1", rec.get(ai).unwrap_or(""))?;
        let b = parse_time(row, "low_tide_2", rec.get(bi).unwrap_or(""))?;
        table.insert(day, a, b);
    }
    debug!(days = table.len(), "tide table parsed");
    Ok(table)
}

pub fn load_tide_table(path: &Path) -> Result<TideTable, CsvIngestError> {
    let src = std::fs::read_to_string(path)
        .map_err(|e| CsvIngestError::Io(format!("read '{}': {e}", path.display())))?;
    parse_tides_str(&src)
}
