//! JSON snapshot files for the guest ledger and the plan book.
//!
//! A missing file is an empty ledger. Writes go to a sibling temp file first
//! and are renamed into place, so a crash mid-write leaves the previous
//! snapshot intact.

use std::fs;
use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use surf_schemas::{DayPlan, Guest};
use tracing::debug;

use crate::{InMemoryDayPlanStore, InMemoryGuestStore, LedgerError};

pub const LEDGER_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot<T> {
    schema_version: u32,
    rows: Vec<T>,
}

pub fn load_guest_ledger(path: &Path) -> Result<InMemoryGuestStore, LedgerError> {
    let rows: Vec<Guest> = read_rows(path)?;
    for g in &rows {
        if g.id.is_none() {
            return Err(LedgerError::MissingId {
                booking_number: g.booking_number.clone(),
            });
        }
    }
    debug!(path = %path.display(), rows = rows.len(), "guest ledger loaded");
    Ok(InMemoryGuestStore::from_guests(rows))
}

pub fn save_guest_ledger(path: &Path, store: &InMemoryGuestStore) -> Result<(), LedgerError> {
    write_rows(path, store.guests())
}

pub fn load_plan_book(path: &Path) -> Result<InMemoryDayPlanStore, LedgerError> {
    let rows: Vec<DayPlan> = read_rows(path)?;
    debug!(path = %path.display(), plans = rows.len(), "plan book loaded");
    Ok(InMemoryDayPlanStore::from_plans(rows))
}

pub fn save_plan_book(path: &Path, store: &InMemoryDayPlanStore) -> Result<(), LedgerError> {
    write_rows(path, &store.plans())
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LedgerError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| LedgerError::Io(format!("read '{}': {e}", path.display())))?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let snap: Snapshot<T> = serde_json::from_str(&raw)
        .map_err(|e| LedgerError::Decode(format!("'{}': {e}", path.display())))?;
    if snap.schema_version != LEDGER_SCHEMA_VERSION {
        return Err(LedgerError::Decode(format!(
            "'{}': unsupported schema_version {} (expected {})",
            path.display(),
            snap.schema_version,
            LEDGER_SCHEMA_VERSION
        )));
    }
    Ok(snap.rows)
}

fn write_rows<T: Serialize + Clone>(path: &Path, rows: &[T]) -> Result<(), LedgerError> {
    let snap = Snapshot {
        schema_version: LEDGER_SCHEMA_VERSION,
        rows: rows.to_vec(),
    };
    let body = serde_json::to_string_pretty(&snap)
        .map_err(|e| LedgerError::Io(format!("encode '{}': {e}", path.display())))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| LedgerError::Io(format!("mkdir '{}': {e}", parent.display())))?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body).map_err(|e| LedgerError::Io(format!("write '{}': {e}", tmp.display())))?;
    fs::rename(&tmp, path)
        .map_err(|e| LedgerError::Io(format!("rename into '{}': {e}", path.display())))?;
    Ok(())
}
