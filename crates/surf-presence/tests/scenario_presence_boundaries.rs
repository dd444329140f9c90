//! Presence windows and their boundary days.
//!
//! # Invariants under test
//! - Inclusive overlap: a guest leaving on the single queried day is
//!   present; one who left before it is not.
//! - Strict containment excludes a guest whose departure equals the window
//!   end, while inclusive overlap keeps them.
//! - Raw rows are read with the import's date formats; rows whose dates
//!   do not parse come back as skipped, never silently dropped.
//! - Cancelled and expired bookings are never active.
//! - A level query answers `None` when no guest carries the level.
//! - An inverted range is a validation error.

use surf_presence::{filter_raw_bookings, OverlapRule, PresenceError, PresenceSelector};
use surf_reconcile::{RowTransformError, TransformOptions};
use surf_schemas::SkillLevel;
use surf_testkit::{d, GuestBuilder, RawBookingBuilder, RecordingGuestStore};

fn names(guests: &[surf_schemas::Guest]) -> Vec<String> {
    guests.iter().map(|g| g.first_name.clone()).collect()
}

#[test]
fn single_day_window_is_inclusive_on_departure() {
    let store = RecordingGuestStore::seeded(vec![
        GuestBuilder::new("Leaving").stay(d(2025, 7, 1), d(2025, 7, 3)).build(),
        GuestBuilder::new("Gone").stay(d(2025, 6, 25), d(2025, 6, 29)).build(),
    ]);
    let sel = PresenceSelector::new(&store);

    let present = sel.active_guests(d(2025, 7, 3), d(2025, 7, 3)).unwrap();
    assert_eq!(names(&present), vec!["Leaving"]);
}

#[test]
fn strict_containment_differs_from_inclusive_on_window_end() {
    let store = RecordingGuestStore::seeded(vec![GuestBuilder::new("Edge")
        .stay(d(2025, 6, 29), d(2025, 7, 3))
        .build()]);
    let sel = PresenceSelector::new(&store);
    let (start, end) = (d(2025, 7, 1), d(2025, 7, 3));

    assert!(sel.bracketing_guests(start, end).unwrap().is_empty());
    assert_eq!(names(&sel.active_guests(start, end).unwrap()), vec!["Edge"]);
}

#[test]
fn raw_rows_filter_by_either_rule() {
    let rows = vec![
        RawBookingBuilder::new("BN1", "Edge").stay("2025-06-29", "2025-07-03").build(),
        RawBookingBuilder::new("BN2", "Around").stay("2025-06-29", "2025-07-05").build(),
        RawBookingBuilder::new("BN3", "Garbled").stay("soon", "2025-07-05").build(),
    ];
    let (start, end) = (d(2025, 7, 1), d(2025, 7, 3));
    let opts = TransformOptions::default();

    let strict =
        filter_raw_bookings(&rows, start, end, OverlapRule::StrictContainment, &opts).unwrap();
    assert_eq!(strict.rows.len(), 1);
    assert_eq!(strict.rows[0].first_name, "Around");

    let inclusive = filter_raw_bookings(&rows, start, end, OverlapRule::Inclusive, &opts).unwrap();
    assert_eq!(inclusive.rows.len(), 2);
    assert_eq!(inclusive.skipped.len(), 1);
    assert_eq!(inclusive.skipped[0].row, 2);
    assert!(matches!(
        inclusive.skipped[0].error,
        RowTransformError::InvalidDate { field: "arrival", .. }
    ));
}

#[test]
fn raw_rows_accept_every_import_date_format() {
    let rows = vec![
        RawBookingBuilder::new("BN1", "Euro").stay("29.06.2025", "05.07.2025").build(),
        RawBookingBuilder::new("BN2", "Slashed").stay("29/06/2025", "03/07/2025").build(),
        RawBookingBuilder::new("BN3", "Stamped").stay("2025-06-29 00:00:00", "2025-07-05").build(),
    ];
    let (start, end) = (d(2025, 7, 1), d(2025, 7, 3));
    let opts = TransformOptions::default();

    let inclusive = filter_raw_bookings(&rows, start, end, OverlapRule::Inclusive, &opts).unwrap();
    assert_eq!(inclusive.rows.len(), 3);
    assert!(inclusive.skipped.is_empty());

    let strict =
        filter_raw_bookings(&rows, start, end, OverlapRule::StrictContainment, &opts).unwrap();
    let names: Vec<&str> = strict.rows.iter().map(|r| r.first_name.as_str()).collect();
    assert_eq!(names, vec!["Euro", "Stamped"]);

    // Configured formats replace the defaults here as they do on import.
    let us_only = TransformOptions {
        date_formats: vec!["%m/%d/%Y".to_string()],
    };
    let narrowed =
        filter_raw_bookings(&rows, start, end, OverlapRule::Inclusive, &us_only).unwrap();
    assert!(narrowed.rows.is_empty());
    assert_eq!(narrowed.skipped.len(), 3);
}

#[test]
fn raw_filter_rejects_inverted_window() {
    let err = filter_raw_bookings(
        &[],
        d(2025, 7, 10),
        d(2025, 7, 1),
        OverlapRule::Inclusive,
        &TransformOptions::default(),
    )
    .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn cancelled_and_expired_are_never_active() {
    let store = RecordingGuestStore::seeded(vec![
        GuestBuilder::new("Here").build(),
        GuestBuilder::new("Cancelled").status("cancelled").build(),
        GuestBuilder::new("Expired").status("Expired").build(),
        GuestBuilder::new("Pending").status("pending").build(),
    ]);
    let sel = PresenceSelector::new(&store);

    let present = sel.active_guests(d(2025, 6, 1), d(2025, 6, 7)).unwrap();
    assert_eq!(names(&present), vec!["Here", "Pending"]);
}

#[test]
fn level_query_returns_none_for_an_empty_level() {
    let store = RecordingGuestStore::seeded(vec![
        GuestBuilder::new("Rookie").build(),
        GuestBuilder::new("Ripper").level("ADVANCED").build(),
        GuestBuilder::new("Ripper2").level("advanced").booking("BN7").build(),
    ]);
    let sel = PresenceSelector::new(&store);

    let advanced = sel.by_level(SkillLevel::Advanced).unwrap().unwrap();
    assert_eq!(names(&advanced), vec!["Ripper", "Ripper2"]);

    let beginners = sel.by_level(SkillLevel::Beginner).unwrap().unwrap();
    assert_eq!(names(&beginners), vec!["Rookie"]);

    assert_eq!(sel.by_level(SkillLevel::Intermediate).unwrap(), None);
    assert_eq!(store.calls().writes(), 0);
}

#[test]
fn inverted_range_is_rejected() {
    let store = RecordingGuestStore::new();
    let sel = PresenceSelector::new(&store);

    let err = sel.active_guests(d(2025, 7, 10), d(2025, 7, 1)).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err,
        PresenceError::InvalidRange {
            start: d(2025, 7, 10),
            end: d(2025, 7, 1)
        }
    );

    let err = sel.active_guests_between("2025-07-01", "tomorrow").unwrap_err();
    assert!(matches!(err, PresenceError::NotADate { .. }));
}
