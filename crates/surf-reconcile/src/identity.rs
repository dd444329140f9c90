use surf_schemas::Guest;

/// Heuristic identity between an incoming guest and an existing ledger row.
///
/// Booking number, gender, age band and both stay dates must be equal.
/// Names are not compared: they are the field most often corrected between
/// exports.
pub fn is_probable_match(candidate: &Guest, existing: &Guest) -> bool {
    candidate.booking_number == existing.booking_number
        && candidate.gender == existing.gender
        && candidate.age_band == existing.age_band
        && candidate.arrival == existing.arrival
        && candidate.departure == existing.departure
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use surf_schemas::{AgeBand, BookingStatus, SkillLevel};

    fn guest(first: &str, gender: &str, band: &str) -> Guest {
        Guest {
            id: None,
            first_name: first.to_string(),
            last_name: "Costa".to_string(),
            birthday: None,
            gender: gender.to_string(),
            age_band: AgeBand::Adult,
            age_band_label: band.to_string(),
            skill_level: SkillLevel::Beginner,
            skill_level_label: "BEGINNER".to_string(),
            booking_number: "BN1".to_string(),
            arrival: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            departure: NaiveDate::from_ymd_opt(2025, 7, 8).unwrap(),
            booking_status: BookingStatus::Confirmed,
            lesson_count: 3,
            lesson_package: String::new(),
            single_parent: false,
        }
        .normalized()
    }

    #[test]
    fn name_changes_still_match() {
        let a = guest("Joao", "M", "Adults >18 years");
        let b = guest("João", "M", "Adults >18 years");
        assert!(is_probable_match(&a, &b));
    }

    #[test]
    fn age_band_compares_classified_value() {
        let a = guest("Rui", "M", "Adults >18 years");
        let b = guest("Rui", "M", "adult");
        assert!(is_probable_match(&a, &b));

        let kid = guest("Rui", "M", "Kids 5-12");
        assert!(!is_probable_match(&a, &kid));
    }

    #[test]
    fn any_date_or_gender_difference_breaks_match() {
        let a = guest("Ines", "F", "Adults >18 years");

        let mut b = a.clone();
        b.departure = NaiveDate::from_ymd_opt(2025, 7, 9).unwrap();
        assert!(!is_probable_match(&a, &b));

        let mut c = a.clone();
        c.gender = "M".to_string();
        assert!(!is_probable_match(&a, &c));

        let mut d = a.clone();
        d.booking_number = "BN2".to_string();
        assert!(!is_probable_match(&a, &d));
    }
}
