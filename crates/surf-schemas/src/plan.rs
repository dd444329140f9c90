use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::class::{AgeBand, SkillLevel};
use crate::guest::Guest;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub certification: String,
}

/// Lesson group: guests of one (skill level, age band) bucket.
///
/// `guests` keeps allocation order. Guests are snapshots of the ledger rows
/// at planning time so a stored plan does not change when the ledger does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub skill_level: SkillLevel,
    pub age_band: AgeBand,
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub instructors: Vec<Instructor>,
}

impl Group {
    pub fn new(skill_level: SkillLevel, age_band: AgeBand) -> Self {
        Self {
            skill_level,
            age_band,
            guests: Vec::new(),
            instructors: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn key(&self) -> (SkillLevel, AgeBand) {
        (self.skill_level, self.age_band)
    }
}

/// The two lesson slots of a planning day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SlotKind {
    A,
    B,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub kind: SlotKind,
    pub start: NaiveDateTime,
    pub groups: Vec<Group>,
}

impl Slot {
    pub fn new(kind: SlotKind, start: NaiveDateTime) -> Self {
        Self {
            kind,
            start,
            groups: Vec::new(),
        }
    }

    pub fn guest_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

/// Full lesson schedule for one calendar day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
    /// Active guests with no paid lessons; on camp but not in the water.
    #[serde(default)]
    pub non_participating: Vec<Guest>,
}

impl DayPlan {
    pub fn slot(&self, kind: SlotKind) -> Option<&Slot> {
        self.slots.iter().find(|s| s.kind == kind)
    }

    pub fn guest_count(&self) -> usize {
        self.slots.iter().map(Slot::guest_count).sum()
    }
}
