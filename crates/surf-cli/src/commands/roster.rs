use anyhow::{anyhow, Result};
use surf_ledger::{load_guest_ledger, save_guest_ledger};
use surf_presence::{parse_period, select_present, OverlapRule, PresenceSelector, RosterSummary};
use surf_schemas::SkillLevel;

use super::{guest_line, CliContext, RuleArg};

fn print_summary(s: &RosterSummary) {
    println!(
        "total={} adults={} teens={} kids={} with_lessons={} without_lessons={} single_parents={}",
        s.total, s.adults, s.teens, s.kids, s.with_lessons, s.without_lessons, s.single_parents
    );
    for level in SkillLevel::ALL {
        println!("level=\"{level}\" count={}", s.count_for(level));
    }
}

pub fn roster(
    ctx: &CliContext,
    start: &str,
    end: &str,
    rule: RuleArg,
    level: Option<&str>,
) -> Result<()> {
    let (start, end) = parse_period(start, end)?;
    let store = load_guest_ledger(&ctx.ledger_path)?;
    let selector = PresenceSelector::new(&store);
    let rule = OverlapRule::from(rule);

    let guests = match level {
        Some(raw) => {
            let level = SkillLevel::parse(raw).ok_or_else(|| {
                anyhow!("unknown --level '{raw}' (BEGINNER, BEGINNER PLUS, INTERMEDIATE, ADVANCED)")
            })?;
            match selector.by_level(level)? {
                Some(at_level) => select_present(&at_level, start, end, rule),
                None => {
                    println!("level=\"{level}\" none");
                    Vec::new()
                }
            }
        }
        None => match rule {
            OverlapRule::Inclusive => selector.active_guests(start, end)?,
            OverlapRule::StrictContainment => selector.bracketing_guests(start, end)?,
        },
    };
    for g in &guests {
        println!("{}", guest_line(g));
    }
    print_summary(&RosterSummary::from_guests(&guests));
    Ok(())
}

pub fn lessons(ctx: &CliContext, start: &str, end: &str) -> Result<()> {
    let (start, end) = parse_period(start, end)?;
    let mut store = load_guest_ledger(&ctx.ledger_path)?;

    let eligible = PresenceSelector::new(&mut store).eligible_for_lessons(start, end)?;
    // Single-parent flags may have changed.
    save_guest_ledger(&ctx.ledger_path, &store)?;

    for g in &eligible {
        println!("{}", guest_line(g));
    }
    print_summary(&RosterSummary::from_guests(&eligible));
    Ok(())
}
