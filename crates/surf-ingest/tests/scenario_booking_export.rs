//! Booking export -> raw rows.
//!
//! # Invariants under test
//! - Quoted cells, mixed header spelling and column order are handled.
//! - Every `lessons_*` column becomes one product quantity, header order.
//! - Cell values are passed through raw (bad dates are not rejected here).
//! - Blank lines are skipped; short rows read as blank cells.
//! - `CsvBookingSource` reads the file through the booking-source contract.

use std::io::Write;

use surf_ingest::{parse_bookings_str, CsvBookingSource, CsvIngestError};
use surf_ledger::RawBookingSource;
use surf_schemas::LessonQuantity;

const EXPORT: &str = "\
Booking ID,Booker ID,First Name,Last Name,Birthday,Gender,Group,Level,Arrival,Departure,Booking Status,Lessons (3-Pack),Lessons Single,Surf Lesson Package Name
101,BN1,\"Ana, Maria\",Silva,1990-01-02,F,Adults >18 years,BEGINNER,2025-06-01,2025-06-07,confirmed,1,2,Standard Package

102,BN1,Lia,Silva,,F,Kids 5-12,,2025-06-01,not a date,confirmed,,,Kids Package
103,BN2,Tom,Short,1985-05-05,M
";

#[test]
fn export_rows_are_read_raw() {
    let rows = parse_bookings_str(EXPORT).unwrap();
    assert_eq!(rows.len(), 3);

    let ana = &rows[0];
    assert_eq!(ana.booking_id, "101");
    assert_eq!(ana.booker_id, "BN1");
    assert_eq!(ana.first_name, "Ana, Maria");
    assert_eq!(
        ana.lesson_products,
        vec![
            LessonQuantity::new("lessons_3_pack", "1"),
            LessonQuantity::new("lessons_single", "2"),
        ]
    );
    assert_eq!(ana.lesson_package, "Standard Package");

    let lia = &rows[1];
    assert_eq!(lia.departure, "not a date");
    assert_eq!(lia.level, "");
    assert_eq!(lia.lesson_products[0].quantity, "");

    let tom = &rows[2];
    assert_eq!(tom.arrival, "");
    assert_eq!(tom.booking_status, "");
}

#[test]
fn csv_source_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(EXPORT.as_bytes())
        .unwrap();

    let source = CsvBookingSource::new(&path);
    assert_eq!(source.source_name(), "csv");
    assert_eq!(source.get_all().unwrap().len(), 3);

    let missing = CsvBookingSource::new(dir.path().join("nope.csv"));
    let err = missing.get_all().unwrap_err();
    assert!(err.to_string().contains("nope.csv"));
    assert!(matches!(
        err.downcast_ref::<CsvIngestError>(),
        Some(CsvIngestError::Io(_))
    ));
}
