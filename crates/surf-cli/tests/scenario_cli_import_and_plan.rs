//! `surf` end to end against files in a temp dir.
//!
//! # Invariants under test
//! - `import` reports inserts, then reports a clean no-op on re-run.
//! - A malformed export row is reported and skipped.
//! - `roster` honours the boundary rule flag and the level filter;
//!   `lessons` flags single parents.
//! - One camp file passes `--strict-config` for every command.
//! - `plan` prints the same stored plan twice; `week --until` walks
//!   whole camp weeks.
//! - Inverted ranges, bad dates and unknown ids fail with a message.
//! - `config-hash` prints a 64-hex hash.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const EXPORT: &str = "\
Booking ID,Booker ID,First Name,Last Name,Gender,Group,Level,Arrival,Departure,Booking Status,Lessons (3-Pack)
1,BN1,Ana,Silva,F,Adults >18 years,BEGINNER,2025-06-01,2025-06-07,confirmed,1
2,BN1,Lia,Silva,F,Kids 5-12,BEGINNER,2025-06-01,2025-06-07,confirmed,1
3,BN2,Tom,Reis,M,Adults >18 years,ADVANCED,2025-06-03,2025-06-05,confirmed,2
4,BN3,Bad,Row,M,,,someday,2025-06-05,confirmed,1
";

const TIDES: &str = "date,low_tide_1,low_tide_2\n2025-06-04,04:10,16:40\n";

struct Camp {
    _dir: tempfile::TempDir,
    root: PathBuf,
    config: PathBuf,
}

impl Camp {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        fs::write(root.join("export.csv"), EXPORT).unwrap();
        fs::write(root.join("tides.csv"), TIDES).unwrap();
        let config = root.join("camp.yaml");
        let yaml = format!(
            "camp:\n  name: Test Camp\n  timezone: Europe/Lisbon\nstorage:\n  ledger_path: \"{}\"\n  plans_path: \"{}\"\ntides:\n  path: \"{}\"\n",
            slash(&root.join("ledger.json")),
            slash(&root.join("plans.json")),
            slash(&root.join("tides.csv")),
        );
        fs::write(&config, yaml).unwrap();
        Self {
            _dir: dir,
            root,
            config,
        }
    }

    fn surf(&self) -> Command {
        let mut cmd = Command::cargo_bin("surf").unwrap();
        cmd.current_dir(&self.root)
            .env_remove("SURF_LEDGER_PATH")
            .env_remove("SURF_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config);
        cmd
    }

    fn import(&self) -> assert_cmd::assert::Assert {
        self.surf()
            .arg("import")
            .arg("--csv")
            .arg(self.root.join("export.csv"))
            .assert()
    }
}

fn slash(p: &Path) -> String {
    p.to_string_lossy().replace('\\', "/")
}

#[test]
fn import_is_idempotent_and_reports_bad_rows() {
    let camp = Camp::new();

    camp.import()
        .success()
        .stdout(predicate::str::contains(
            "inserted=3 updated=0 unchanged=0 skipped=1 unclaimed=0",
        ))
        .stdout(predicate::str::contains("skipped row=3 booking_id=4"));

    camp.import()
        .success()
        .stdout(predicate::str::contains(
            "inserted=0 updated=0 unchanged=3 skipped=1 unclaimed=0",
        ));
}

#[test]
fn roster_and_lessons_read_the_ledger() {
    let camp = Camp::new();
    camp.import().success();

    camp.surf()
        .args(["roster", "--start", "2025-06-05", "--end", "2025-06-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total=3"));

    camp.surf()
        .args([
            "roster", "--start", "2025-06-03", "--end", "2025-06-05", "--rule", "strict",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("total=2"))
        .stdout(predicate::str::contains("Tom Reis").not());

    camp.surf()
        .args(["lessons", "--start", "2025-06-02", "--end", "2025-06-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name=\"Ana Silva\""))
        .stdout(predicate::str::contains("single_parents=1"));
}

#[test]
fn plan_is_stored_and_returned_unchanged() {
    let camp = Camp::new();
    camp.import().success();

    let first = camp
        .surf()
        .args(["plan", "--date", "2025-06-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "date=2025-06-04 slot_a=15:10 slot_a_guests=3 slot_b=16:40 slot_b_guests=0",
        ))
        .get_output()
        .stdout
        .clone();

    let second = camp
        .surf()
        .args(["plan", "--date", "2025-06-04"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(first, second);
    assert!(camp.root.join("plans.json").exists());

    camp.surf()
        .args(["plan", "--date", "2025-06-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no low tides known for 2025-06-05"));
}

#[test]
fn roster_level_filter_reports_empty_levels() {
    let camp = Camp::new();
    camp.import().success();

    camp.surf()
        .args(["roster", "--start", "2025-06-05", "--end", "2025-06-05", "--level", "advanced"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name=\"Tom Reis\""))
        .stdout(predicate::str::contains("Ana Silva").not())
        .stdout(predicate::str::contains("total=1"))
        .stdout(predicate::str::contains("level=\"ADVANCED\" count=1"));

    camp.surf()
        .args(["roster", "--start", "2025-06-05", "--end", "2025-06-05", "--level", "INTERMEDIATE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("level=\"INTERMEDIATE\" none"))
        .stdout(predicate::str::contains("total=0"));

    camp.surf()
        .args(["roster", "--start", "2025-06-05", "--end", "2025-06-05", "--level", "pro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown --level 'pro'"));
}

#[test]
fn one_camp_file_passes_strict_config_everywhere() {
    let camp = Camp::new();

    camp.surf()
        .arg("--strict-config")
        .arg("import")
        .arg("--csv")
        .arg(camp.root.join("export.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("inserted=3"));

    for args in [
        vec!["roster", "--start", "2025-06-05", "--end", "2025-06-05"],
        vec!["lessons", "--start", "2025-06-02", "--end", "2025-06-02"],
        vec!["plan", "--date", "2025-06-04"],
    ] {
        camp.surf().arg("--strict-config").args(&args).assert().success();
    }

    // A typo is still caught.
    let typo = camp.root.join("typo.yaml");
    fs::write(&typo, "storage:\n  ledger_pth: other.json\n").unwrap();
    camp.surf()
        .arg("--config")
        .arg(&typo)
        .arg("--strict-config")
        .args(["roster", "--start", "2025-06-05", "--end", "2025-06-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/storage/ledger_pth"));
}

#[test]
fn week_until_plans_every_camp_week_in_range() {
    let camp = Camp::new();
    let mut tides = String::from("date,low_tide_1,low_tide_2\n");
    for day in 1..=14 {
        tides.push_str(&format!("2025-06-{day:02},04:00,16:00\n"));
    }
    fs::write(camp.root.join("tides.csv"), tides).unwrap();
    camp.import().success();

    let out = camp
        .surf()
        .args(["week", "--date", "2025-06-04", "--until", "2025-06-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("date=2025-06-01 slot_a=14:30"))
        .stdout(predicate::str::contains("date=2025-06-14 "))
        .get_output()
        .stdout
        .clone();
    let lines = String::from_utf8(out).unwrap();
    assert_eq!(lines.lines().filter(|l| l.starts_with("date=")).count(), 14);

    camp.surf()
        .args(["week", "--date", "2025-06-09", "--until", "2025-06-04"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));
}

#[test]
fn misuse_fails_with_a_message() {
    let camp = Camp::new();
    camp.import().success();

    camp.surf()
        .args(["roster", "--start", "2025-07-10", "--end", "2025-07-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));

    camp.surf()
        .args(["roster", "--start", "2025-07-01", "--end", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a date"));

    camp.surf()
        .args(["delete", "--id", "00000000-0000-4000-8000-000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("guest not found"));
}

#[test]
fn config_hash_prints_hash_and_json() {
    let camp = Camp::new();
    Command::cargo_bin("surf")
        .unwrap()
        .arg("config-hash")
        .arg(&camp.config)
        .assert()
        .success()
        .stdout(predicate::str::is_match("config_hash=[0-9a-f]{64}").unwrap())
        .stdout(predicate::str::contains("\"name\":\"Test Camp\""));
}
