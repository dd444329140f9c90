use chrono::NaiveDate;
use surf_ledger::{DayPlanStore, GuestStore, TideOracle};
use surf_presence::{calendar, PresenceSelector};
use surf_schemas::{DayPlan, Guest};
use tracing::{debug, info};

use crate::{allocate, build_day_plan, slot_starts, PlanError};

/// Builds and stores day plans.
///
/// A date that already has a stored plan gets it back unchanged; nothing is
/// recomputed, even when the ledger has moved on since.
pub struct DayPlanner<'a, G: ?Sized, P: ?Sized, T: ?Sized> {
    guests: &'a mut G,
    plans: &'a mut P,
    tides: &'a T,
}

impl<'a, G, P, T> DayPlanner<'a, G, P, T>
where
    G: GuestStore + ?Sized,
    P: DayPlanStore + ?Sized,
    T: TideOracle + ?Sized,
{
    pub fn new(guests: &'a mut G, plans: &'a mut P, tides: &'a T) -> Self {
        Self {
            guests,
            plans,
            tides,
        }
    }

    /// Stored plan for `date`, or a freshly built (and stored) one.
    pub fn plan_day(&mut self, date: NaiveDate) -> Result<DayPlan, PlanError> {
        if let Some(existing) = self.plans.get_by_date(date)? {
            debug!(%date, "stored plan returned");
            return Ok(existing);
        }

        let plan = self.build(date)?;
        let saved = self.plans.save(plan)?;
        info!(
            %date,
            in_water = saved.guest_count(),
            non_participating = saved.non_participating.len(),
            "day plan created"
        );
        Ok(saved)
    }

    /// Plans for every day (Sunday to Saturday) of the camp week holding
    /// `date`.
    pub fn plan_week(&mut self, date: NaiveDate) -> Result<Vec<DayPlan>, PlanError> {
        let (sunday, _) = calendar::week_bounds(date);
        calendar::week_dates(sunday)
            .into_iter()
            .map(|d| self.plan_day(d))
            .collect()
    }

    fn build(&mut self, date: NaiveDate) -> Result<DayPlan, PlanError> {
        // Resolve tides first so a missing day does not touch the ledger.
        let (slot_a, slot_b) = slot_starts(date, self.tides)?;

        let mut selector = PresenceSelector::new(&mut *self.guests);
        let eligible = selector.eligible_for_lessons(date, date)?;
        let non_participating: Vec<Guest> = selector
            .active_guests(date, date)?
            .into_iter()
            .filter(|g| !g.has_lessons())
            .collect();

        let groups = allocate(&eligible);
        debug!(%date, eligible = eligible.len(), groups = groups.len(), "groups allocated");

        Ok(DayPlan {
            date,
            slots: build_day_plan(groups, slot_a, slot_b),
            non_participating,
        })
    }
}
