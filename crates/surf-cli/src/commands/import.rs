use anyhow::Result;
use surf_ingest::CsvBookingSource;
use surf_ledger::{load_guest_ledger, save_guest_ledger};
use surf_reconcile::{ReconciliationEngine, TransformOptions};

use super::CliContext;

pub fn import(ctx: &CliContext, csv: &str) -> Result<()> {
    let mut store = load_guest_ledger(&ctx.ledger_path)?;
    let engine = ReconciliationEngine::new(TransformOptions {
        date_formats: ctx.camp.date_formats.clone(),
    });

    let source = CsvBookingSource::new(csv);
    let report = engine.reconcile_from_source(&mut store, &source)?;

    if !report.is_noop() {
        save_guest_ledger(&ctx.ledger_path, &store)?;
    }

    for s in &report.skipped {
        println!(
            "skipped row={} booking_id={} reason=\"{}\"",
            s.row, s.booking_id, s.error
        );
    }
    println!(
        "inserted={} updated={} unchanged={} skipped={} unclaimed={}",
        report.inserted,
        report.updated,
        report.unchanged,
        report.skipped.len(),
        report.unclaimed.len()
    );
    println!("ledger_rows={}", store.len());
    Ok(())
}
