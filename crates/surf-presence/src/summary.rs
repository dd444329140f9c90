use surf_schemas::{AgeBand, Guest, SkillLevel};

/// Head counts for a roster window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub total: usize,
    pub adults: usize,
    pub teens: usize,
    pub kids: usize,
    pub with_lessons: usize,
    pub without_lessons: usize,
    pub single_parents: usize,
    /// One entry per skill level, in `SkillLevel::ALL` order.
    pub per_level: Vec<(SkillLevel, usize)>,
}

impl RosterSummary {
    pub fn from_guests(guests: &[Guest]) -> Self {
        let mut s = RosterSummary {
            per_level: SkillLevel::ALL.iter().map(|l| (*l, 0)).collect(),
            ..Default::default()
        };
        for g in guests {
            s.total += 1;
            match g.age_band {
                AgeBand::Adult => s.adults += 1,
                AgeBand::Teen => s.teens += 1,
                AgeBand::Kid => s.kids += 1,
            }
            if g.has_lessons() {
                s.with_lessons += 1;
            } else {
                s.without_lessons += 1;
            }
            if g.single_parent {
                s.single_parents += 1;
            }
            if let Some(slot) = s.per_level.iter_mut().find(|(l, _)| *l == g.skill_level) {
                slot.1 += 1;
            }
        }
        s
    }

    pub fn count_for(&self, level: SkillLevel) -> usize {
        self.per_level
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
