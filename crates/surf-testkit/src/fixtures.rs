use chrono::{NaiveDate, NaiveTime};
use surf_schemas::{AgeBand, BookingStatus, Guest, LessonQuantity, RawBooking, SkillLevel};

/// `NaiveDate` from y/m/d. Panics on an impossible date (test input only).
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap_or_else(|| panic!("bad date {y}-{m}-{day}"))
}

/// `NaiveTime` from h/m.
pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_else(|| panic!("bad time {h}:{m}"))
}

/// Builder for ledger guests.
///
/// Defaults: adult, BEGINNER, booking TEST001, 2025-06-01..2025-06-07,
/// confirmed, 3 lessons, "Standard Package".
#[derive(Clone, Debug)]
pub struct GuestBuilder {
    guest: Guest,
}

impl GuestBuilder {
    pub fn new(first_name: &str) -> Self {
        Self {
            guest: Guest {
                id: None,
                first_name: first_name.to_string(),
                last_name: "Tester".to_string(),
                birthday: None,
                gender: "F".to_string(),
                age_band: AgeBand::Adult,
                age_band_label: AgeBand::DEFAULT_ADULT_LABEL.to_string(),
                skill_level: SkillLevel::Beginner,
                skill_level_label: "BEGINNER".to_string(),
                booking_number: "TEST001".to_string(),
                arrival: d(2025, 6, 1),
                departure: d(2025, 6, 7),
                booking_status: BookingStatus::Confirmed,
                lesson_count: 3,
                lesson_package: "Standard Package".to_string(),
                single_parent: false,
            },
        }
    }

    pub fn booking(mut self, booking_number: &str) -> Self {
        self.guest.booking_number = booking_number.to_string();
        self
    }

    pub fn stay(mut self, arrival: NaiveDate, departure: NaiveDate) -> Self {
        self.guest.arrival = arrival;
        self.guest.departure = departure;
        self
    }

    pub fn age_band(mut self, label: &str) -> Self {
        self.guest.age_band_label = label.to_string();
        self
    }

    pub fn kid(self) -> Self {
        self.age_band("Kids 5-12")
    }

    pub fn teen(self) -> Self {
        self.age_band("Teens 13-18")
    }

    pub fn level(mut self, label: &str) -> Self {
        self.guest.skill_level_label = label.to_string();
        self
    }

    pub fn gender(mut self, gender: &str) -> Self {
        self.guest.gender = gender.to_string();
        self
    }

    pub fn status(mut self, raw: &str) -> Self {
        self.guest.booking_status = BookingStatus::parse(raw);
        self
    }

    pub fn lessons(mut self, n: u32) -> Self {
        self.guest.lesson_count = n;
        self
    }

    /// Normalized guest, `id` unset.
    pub fn build(self) -> Guest {
        self.guest.normalized()
    }
}

/// Builder for raw booking rows, mirroring [`GuestBuilder`] defaults.
#[derive(Clone, Debug)]
pub struct RawBookingBuilder {
    row: RawBooking,
}

impl RawBookingBuilder {
    pub fn new(booker_id: &str, first_name: &str) -> Self {
        Self {
            row: RawBooking {
                booking_id: format!("{booker_id}-{first_name}"),
                booker_id: booker_id.to_string(),
                first_name: first_name.to_string(),
                last_name: "Tester".to_string(),
                birthday: String::new(),
                gender: "F".to_string(),
                group: AgeBand::DEFAULT_ADULT_LABEL.to_string(),
                level: "BEGINNER".to_string(),
                arrival: "2025-06-01".to_string(),
                departure: "2025-06-07".to_string(),
                booking_status: "confirmed".to_string(),
                lesson_products: vec![LessonQuantity::new("lessons_3_pack", "3")],
                lesson_package: "Standard Package".to_string(),
            },
        }
    }

    pub fn stay(mut self, arrival: &str, departure: &str) -> Self {
        self.row.arrival = arrival.to_string();
        self.row.departure = departure.to_string();
        self
    }

    pub fn group(mut self, label: &str) -> Self {
        self.row.group = label.to_string();
        self
    }

    pub fn level(mut self, label: &str) -> Self {
        self.row.level = label.to_string();
        self
    }

    pub fn gender(mut self, gender: &str) -> Self {
        self.row.gender = gender.to_string();
        self
    }

    pub fn status(mut self, raw: &str) -> Self {
        self.row.booking_status = raw.to_string();
        self
    }

    pub fn last_name(mut self, last_name: &str) -> Self {
        self.row.last_name = last_name.to_string();
        self
    }

    pub fn lessons(mut self, quantity: &str) -> Self {
        self.row.lesson_products = vec![LessonQuantity::new("lessons_3_pack", quantity)];
        self
    }

    pub fn build(self) -> RawBooking {
        self.row
    }
}
