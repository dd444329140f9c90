//! Group allocation and slot splitting.
//!
//! # Invariants under test
//! - Ten same-level, same-band guests split 5 / 5 across slots A and B,
//!   same key, order preserved.
//! - Groups at capacity stay whole in slot A.
//! - Slot B groups follow first-seen group order; overflow keeps its order.

use surf_plan::{allocate, build_day_plan, SLOT_CAPACITY};
use surf_schemas::{AgeBand, Guest, SkillLevel, SlotKind};
use surf_testkit::{d, t, GuestBuilder};

fn named(prefix: &str, n: usize, level: &str, band: &str) -> Vec<Guest> {
    (0..n)
        .map(|i| {
            GuestBuilder::new(&format!("{prefix}{i}"))
                .level(level)
                .age_band(band)
                .build()
        })
        .collect()
}

fn names(g: &surf_schemas::Group) -> Vec<String> {
    g.guests.iter().map(|x| x.first_name.clone()).collect()
}

#[test]
fn ten_uniform_guests_split_five_and_five() {
    let guests = named("g", 10, "BEGINNER", "18-60");
    let groups = allocate(&guests);
    assert_eq!(groups.len(), 1);

    let day = d(2025, 7, 2);
    let slots = build_day_plan(groups, day.and_time(t(9, 0)), day.and_time(t(10, 30)));

    let a = &slots[0];
    let b = &slots[1];
    assert_eq!(a.kind, SlotKind::A);
    assert_eq!(b.kind, SlotKind::B);
    assert_eq!(a.groups.len(), 1);
    assert_eq!(b.groups.len(), 1);
    assert_eq!(a.groups[0].len(), SLOT_CAPACITY);
    assert_eq!(b.groups[0].len(), 5);
    assert_eq!(a.groups[0].key(), (SkillLevel::Beginner, AgeBand::Adult));
    assert_eq!(b.groups[0].key(), a.groups[0].key());
    assert_eq!(names(&a.groups[0]), vec!["g0", "g1", "g2", "g3", "g4"]);
    assert_eq!(names(&b.groups[0]), vec!["g5", "g6", "g7", "g8", "g9"]);
}

#[test]
fn overflow_follows_first_seen_group_order() {
    let mut guests = named("kid", 7, "BEGINNER", "Kids 5-12");
    guests.extend(named("adv", 5, "ADVANCED", "Adults >18 years"));
    guests.extend(named("int", 12, "INTERMEDIATE", "Adults >18 years"));

    let day = d(2025, 7, 2);
    let slots = build_day_plan(allocate(&guests), day.and_time(t(9, 0)), day.and_time(t(10, 30)));

    let a_sizes: Vec<_> = slots[0].groups.iter().map(|g| g.len()).collect();
    assert_eq!(a_sizes, vec![5, 5, 5]);

    let b_keys: Vec<_> = slots[1].groups.iter().map(|g| g.key()).collect();
    assert_eq!(
        b_keys,
        vec![
            (SkillLevel::Beginner, AgeBand::Kid),
            (SkillLevel::Intermediate, AgeBand::Adult),
        ]
    );
    assert_eq!(names(&slots[1].groups[0]), vec!["kid5", "kid6"]);
    // Everything past the first five goes to slot B, even past ten.
    assert_eq!(slots[1].groups[1].len(), 7);
    assert_eq!(slots[0].guest_count() + slots[1].guest_count(), guests.len());
}
