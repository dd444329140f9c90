use anyhow::{Context, Result};
use surf_ingest::load_tide_table;
use surf_ledger::{
    load_guest_ledger, load_plan_book, save_guest_ledger, save_plan_book, InMemoryDayPlanStore,
    InMemoryGuestStore, TideTable,
};
use surf_plan::DayPlanner;
use surf_presence::{split_range, Period};
use surf_schemas::{DayPlan, SlotKind};

use super::{parse_date, CliContext};

fn slot_line(plan: &DayPlan) -> String {
    let start = |k| {
        plan.slot(k)
            .map(|s| s.start.format("%H:%M").to_string())
            .unwrap_or_default()
    };
    let count = |k| plan.slot(k).map(|s| s.guest_count()).unwrap_or(0);
    format!(
        "date={} slot_a={} slot_a_guests={} slot_b={} slot_b_guests={} non_participating={}",
        plan.date,
        start(SlotKind::A),
        count(SlotKind::A),
        start(SlotKind::B),
        count(SlotKind::B),
        plan.non_participating.len()
    )
}

type FilePlanner<'a> = DayPlanner<'a, InMemoryGuestStore, InMemoryDayPlanStore, TideTable>;

/// Load the ledger, plan book and tide table, run `f`, write both stores back.
fn with_planner<R>(ctx: &CliContext, f: impl FnOnce(&mut FilePlanner<'_>) -> Result<R>) -> Result<R> {
    let tides = load_tide_table(&ctx.camp.tides_path)
        .with_context(|| format!("load tides {}", ctx.camp.tides_path.display()))?;
    let mut guests = load_guest_ledger(&ctx.ledger_path)?;
    let mut plans = load_plan_book(&ctx.camp.plans_path)?;

    let out = {
        let mut planner = DayPlanner::new(&mut guests, &mut plans, &tides);
        f(&mut planner)?
    };

    save_guest_ledger(&ctx.ledger_path, &guests)?;
    save_plan_book(&ctx.camp.plans_path, &plans)?;
    Ok(out)
}

pub fn plan(ctx: &CliContext, date: Option<&str>) -> Result<()> {
    let date = ctx.date_or_today(date)?;
    let plan = with_planner(ctx, |p| Ok(p.plan_day(date)?))?;

    println!("{}", slot_line(&plan));
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

/// Plans every camp week from the one holding `date` through the one
/// holding `until` (just the first week when `until` is absent).
pub fn week(ctx: &CliContext, date: Option<&str>, until: Option<&str>) -> Result<()> {
    let date = ctx.date_or_today(date)?;
    let until = match until {
        Some(raw) => parse_date(raw)?,
        None => date,
    };
    let weeks = split_range(date, until, Period::Weekly)?;

    let plans = with_planner(ctx, |p| {
        let mut out = Vec::new();
        for (first_day, _) in &weeks {
            out.extend(p.plan_week(*first_day)?);
        }
        Ok(out)
    })?;

    for plan in &plans {
        println!("{}", slot_line(plan));
    }
    Ok(())
}
