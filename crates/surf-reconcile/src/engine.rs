use std::collections::HashMap;

use surf_ledger::{GuestStore, LedgerError, RawBookingSource};
use surf_schemas::{Guest, RawBooking};
use tracing::{debug, info, warn};

use crate::diff::diff_guests;
use crate::identity::is_probable_match;
use crate::transform::{guest_from_raw, TransformOptions};
use crate::{Decision, GroupPlan, ReconcileReport, SkippedRow};

/// Match one booking number's incoming guests against its existing rows.
///
/// Each incoming guest claims the first unclaimed existing row (ledger
/// order) that [`is_probable_match`] accepts. Claims are tracked by index,
/// so one existing row pairs with at most one incoming guest per pass.
///
/// Existing rows must carry ids; a row without one is
/// [`LedgerError::MissingId`].
pub fn plan_group(incoming: Vec<Guest>, existing: &[Guest]) -> Result<GroupPlan, LedgerError> {
    let mut claimed = vec![false; existing.len()];
    let mut decisions = Vec::with_capacity(incoming.len());

    for guest in incoming {
        let hit = existing
            .iter()
            .enumerate()
            .find(|(i, row)| !claimed[*i] && is_probable_match(&guest, row));

        let Some((i, row)) = hit else {
            decisions.push(Decision::Insert(guest));
            continue;
        };
        claimed[i] = true;
        let id = row.id.ok_or_else(|| LedgerError::MissingId {
            booking_number: row.booking_number.clone(),
        })?;

        let changes = diff_guests(&guest, row);
        if changes.is_empty() {
            decisions.push(Decision::Unchanged { id });
        } else {
            let mut guest = guest;
            guest.id = Some(id);
            guest.single_parent = row.single_parent;
            decisions.push(Decision::Update { id, guest, changes });
        }
    }

    let unclaimed = existing
        .iter()
        .zip(&claimed)
        .filter(|(_, c)| !**c)
        .filter_map(|(row, _)| row.id)
        .collect();

    Ok(GroupPlan {
        decisions,
        unclaimed,
    })
}

/// Applies a booking feed to a guest store.
///
/// Re-running with the same feed issues no writes.
#[derive(Clone, Debug, Default)]
pub struct ReconciliationEngine {
    options: TransformOptions,
}

impl ReconciliationEngine {
    pub fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Reconcile `rows` into `store`.
    ///
    /// Bad rows are skipped and reported. Store failures abort the pass;
    /// writes already issued for earlier booking numbers stay.
    pub fn reconcile<S: GuestStore + ?Sized>(
        &self,
        store: &mut S,
        rows: &[RawBooking],
    ) -> Result<ReconcileReport, LedgerError> {
        let mut report = ReconcileReport::default();

        for (booking_number, incoming) in self.group_rows(rows, &mut report) {
            report.groups += 1;
            let existing = store.get_by_booking_number(&booking_number)?;

            if existing.is_empty() {
                let n = incoming.len();
                store.save_all(incoming)?;
                report.inserted += n;
                debug!(booking_number = %booking_number, inserted = n, "new booking");
                continue;
            }

            let plan = plan_group(incoming, &existing)?;
            self.apply(store, &booking_number, plan, &mut report)?;
        }

        info!(
            groups = report.groups,
            inserted = report.inserted,
            updated = report.updated,
            unchanged = report.unchanged,
            skipped = report.skipped.len(),
            unclaimed = report.unclaimed.len(),
            "reconcile complete"
        );
        Ok(report)
    }

    /// Pull every row from `source` and reconcile it.
    pub fn reconcile_from_source<S: GuestStore + ?Sized>(
        &self,
        store: &mut S,
        source: &dyn RawBookingSource,
    ) -> anyhow::Result<ReconcileReport> {
        let rows = source.get_all()?;
        debug!(source = source.source_name(), rows = rows.len(), "booking feed read");
        Ok(self.reconcile(store, &rows)?)
    }

    /// Transform rows and group them by booking number, first-seen order.
    fn group_rows(
        &self,
        rows: &[RawBooking],
        report: &mut ReconcileReport,
    ) -> Vec<(String, Vec<Guest>)> {
        let mut groups: Vec<(String, Vec<Guest>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (row, raw) in rows.iter().enumerate() {
            let guest = match guest_from_raw(raw, &self.options) {
                Ok(g) => g,
                Err(error) => {
                    warn!(row, booking_id = %raw.booking_id, %error, "skipping booking row");
                    report.skipped.push(SkippedRow {
                        row,
                        booking_id: raw.booking_id.clone(),
                        error,
                    });
                    continue;
                }
            };
            let slot = *index
                .entry(guest.booking_number.clone())
                .or_insert_with(|| {
                    groups.push((guest.booking_number.clone(), Vec::new()));
                    groups.len() - 1
                });
            groups[slot].1.push(guest);
        }
        groups
    }

    fn apply<S: GuestStore + ?Sized>(
        &self,
        store: &mut S,
        booking_number: &str,
        plan: GroupPlan,
        report: &mut ReconcileReport,
    ) -> Result<(), LedgerError> {
        for decision in plan.decisions {
            match decision {
                Decision::Insert(guest) => {
                    let saved = store.save(guest)?;
                    report.inserted += 1;
                    debug!(booking_number, id = ?saved.id, "new traveller on existing booking");
                }
                Decision::Update { id, guest, changes } => {
                    let fields: Vec<&str> = changes.iter().map(|c| c.field).collect();
                    store.update(id, guest)?;
                    report.updated += 1;
                    debug!(booking_number, %id, ?fields, "guest updated");
                }
                Decision::Unchanged { id } => {
                    report.unchanged += 1;
                    debug!(booking_number, %id, "guest unchanged");
                }
            }
        }
        if !plan.unclaimed.is_empty() {
            debug!(
                booking_number,
                unclaimed = plan.unclaimed.len(),
                "existing rows not present in feed; kept"
            );
        }
        report.unclaimed.extend(plan.unclaimed);
        Ok(())
    }
}
