use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::class::{AgeBand, BookingStatus, SkillLevel};

/// One traveller tracked for lesson planning (a ledger row).
///
/// `id` is `None` until the guest store persists the row. `age_band` and
/// `skill_level` are the classified form of the two `*_label` fields; call
/// [`Guest::normalize`] after changing a label so they stay in sync.
///
/// Invariant: `arrival <= departure`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Option<NaiveDate>,
    pub gender: String,
    pub age_band: AgeBand,
    pub age_band_label: String,
    pub skill_level: SkillLevel,
    pub skill_level_label: String,
    pub booking_number: String,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
    pub booking_status: BookingStatus,
    pub lesson_count: u32,
    #[serde(default)]
    pub lesson_package: String,
    /// Derived by presence selection; never read from the booking feed.
    #[serde(default)]
    pub single_parent: bool,
}

impl Guest {
    /// Fill the blank age band with the adult label and re-derive the
    /// classified fields from the display labels.
    ///
    /// This is the single place where the "blank means adult" rule lives.
    pub fn normalize(&mut self) {
        if self.age_band_label.trim().is_empty() {
            self.age_band_label = AgeBand::DEFAULT_ADULT_LABEL.to_string();
        }
        self.age_band = AgeBand::classify(&self.age_band_label);
        self.skill_level = SkillLevel::classify(&self.skill_level_label);
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_active(&self) -> bool {
        self.booking_status.is_active()
    }

    pub fn has_lessons(&self) -> bool {
        self.lesson_count > 0
    }
}
