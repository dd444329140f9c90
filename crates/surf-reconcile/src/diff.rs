use std::fmt::Debug;

use surf_schemas::Guest;

use crate::FieldChange;

fn push_if_changed<T: PartialEq + Debug>(
    field: &'static str,
    existing: &T,
    incoming: &T,
    out: &mut Vec<FieldChange>,
) {
    if existing != incoming {
        out.push(FieldChange {
            field,
            existing: format!("{existing:?}"),
            incoming: format!("{incoming:?}"),
        });
    }
}

/// Field-level differences between `incoming` and `existing`.
///
/// `id` is identity, not content, and `single_parent` is derived by presence
/// selection after import; neither is compared. Output follows declaration
/// order of the compared fields.
pub fn diff_guests(incoming: &Guest, existing: &Guest) -> Vec<FieldChange> {
    let mut out = Vec::new();
    let (e, i) = (existing, incoming);

    push_if_changed("first_name", &e.first_name, &i.first_name, &mut out);
    push_if_changed("last_name", &e.last_name, &i.last_name, &mut out);
    push_if_changed("birthday", &e.birthday, &i.birthday, &mut out);
    push_if_changed("gender", &e.gender, &i.gender, &mut out);
    push_if_changed("age_band", &e.age_band, &i.age_band, &mut out);
    push_if_changed("age_band_label", &e.age_band_label, &i.age_band_label, &mut out);
    push_if_changed("skill_level", &e.skill_level, &i.skill_level, &mut out);
    push_if_changed(
        "skill_level_label",
        &e.skill_level_label,
        &i.skill_level_label,
        &mut out,
    );
    push_if_changed("booking_number", &e.booking_number, &i.booking_number, &mut out);
    push_if_changed("arrival", &e.arrival, &i.arrival, &mut out);
    push_if_changed("departure", &e.departure, &i.departure, &mut out);
    push_if_changed("booking_status", &e.booking_status, &i.booking_status, &mut out);
    push_if_changed("lesson_count", &e.lesson_count, &i.lesson_count, &mut out);
    push_if_changed("lesson_package", &e.lesson_package, &i.lesson_package, &mut out);

    out
}

/// True when any compared field differs. A `false` here means no write.
pub fn has_changed(incoming: &Guest, existing: &Guest) -> bool {
    !diff_guests(incoming, existing).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use surf_schemas::{AgeBand, BookingStatus, SkillLevel};
    use uuid::Uuid;

    fn base() -> Guest {
        Guest {
            id: None,
            first_name: "Lena".to_string(),
            last_name: "Berg".to_string(),
            birthday: NaiveDate::from_ymd_opt(1990, 3, 4),
            gender: "F".to_string(),
            age_band: AgeBand::Adult,
            age_band_label: "Adults >18 years".to_string(),
            skill_level: SkillLevel::Beginner,
            skill_level_label: "BEGINNER".to_string(),
            booking_number: "BN9".to_string(),
            arrival: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            departure: NaiveDate::from_ymd_opt(2025, 6, 7).unwrap(),
            booking_status: BookingStatus::Confirmed,
            lesson_count: 3,
            lesson_package: "Standard Package".to_string(),
            single_parent: false,
        }
    }

    #[test]
    fn identity_and_derived_flag_are_ignored() {
        let incoming = base();
        let mut existing = base();
        existing.id = Some(Uuid::new_v4());
        existing.single_parent = true;

        assert!(!has_changed(&incoming, &existing));
    }

    #[test]
    fn reports_each_changed_field_with_both_values() {
        let existing = base();
        let mut incoming = base();
        incoming.lesson_count = 5;
        incoming.skill_level_label = "INTERMEDIATE".to_string();
        incoming.skill_level = SkillLevel::Intermediate;

        let changes = diff_guests(&incoming, &existing);
        let fields: Vec<_> = changes.iter().map(|c| c.field).collect();
        assert_eq!(fields, vec!["skill_level", "skill_level_label", "lesson_count"]);

        let lc = &changes[2];
        assert_eq!(lc.existing, "3");
        assert_eq!(lc.incoming, "5");
    }

    #[test]
    fn status_change_is_detected() {
        let existing = base();
        let mut incoming = base();
        incoming.booking_status = BookingStatus::Cancelled;
        assert!(has_changed(&incoming, &existing));
    }
}
