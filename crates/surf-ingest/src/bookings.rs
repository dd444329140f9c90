//! Booking export parsing.
//!
//! ## Column contract (after header normalisation, order-independent)
//!
//! | Column                     | Required | Notes                                 |
//! |----------------------------|----------|---------------------------------------|
//! | `booking_id`               | yes      |                                       |
//! | `booker_id`                | yes      | becomes the ledger booking number     |
//! | `first_name`, `last_name`  | yes      |                                       |
//! | `gender`                   | yes      |                                       |
//! | `arrival`, `departure`     | yes      | any configured date format            |
//! | `birthday`                 | no       |                                       |
//! | `group`                    | no       | free-text age band                    |
//! | `level`                    | no       | free-text skill level                 |
//! | `booking_status`           | no       |                                       |
//! | `surf_lesson_package_name` | no       |                                       |
//! | `lessons_*`                | no       | one quantity column per product       |
//! | `number_of_surf_lessons`   | no       | used only when no `lessons_*` exists  |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use surf_ledger::RawBookingSource;
use surf_schemas::{LessonQuantity, RawBooking};
use tracing::debug;

use crate::CsvIngestError;

const REQUIRED: [&str; 7] = [
    "booking_id",
    "booker_id",
    "first_name",
    "last_name",
    "gender",
    "arrival",
    "departure",
];

const LESSON_PREFIX: &str = "lessons_";
const LESSON_TOTAL: &str = "number_of_surf_lessons";

/// Export header -> column key: trimmed, `%` spelled out, spaces and dashes
/// to underscores, parentheses dropped, lowercased.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .replace('%', "percent")
        .replace(' ', "_")
        .replace(['(', ')'], "")
        .replace('-', "_")
        .to_lowercase()
}

struct Columns {
    index: HashMap<String, usize>,
    /// (product name, column index), header order.
    lessons: Vec<(String, usize)>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CsvIngestError> {
        let mut index = HashMap::new();
        let mut lessons = Vec::new();
        for (i, h) in headers.iter().enumerate() {
            let key = normalize_header(h);
            if key.starts_with(LESSON_PREFIX) {
                lessons.push((key.clone(), i));
            }
            index.entry(key).or_insert(i);
        }
        if lessons.is_empty() {
            if let Some(&i) = index.get(LESSON_TOTAL) {
                lessons.push((LESSON_TOTAL.to_string(), i));
            }
        }
        for col in REQUIRED {
            if !index.contains_key(col) {
                return Err(CsvIngestError::MissingHeader(col.to_string()));
            }
        }
        Ok(Self { index, lessons })
    }

    fn cell(&self, rec: &csv::StringRecord, name: &str) -> String {
        self.index
            .get(name)
            .and_then(|&i| rec.get(i))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }
}

/// Parse a booking export held in memory.
///
/// Blank lines are skipped. Short rows read missing cells as blank.
pub fn parse_bookings_str(src: &str) -> Result<Vec<RawBooking>, CsvIngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(src.as_bytes());

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let cols = Columns::from_headers(&headers)?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if rec.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let c = |name: &str| cols.cell(&rec, name);
        out.push(RawBooking {
            booking_id: c("booking_id"),
            booker_id: c("booker_id"),
            first_name: c("first_name"),
            last_name: c("last_name"),
            birthday: c("birthday"),
            gender: c("gender"),
            group: c("group"),
            level: c("level"),
            arrival: c("arrival"),
            departure: c("departure"),
            booking_status: c("booking_status"),
            lesson_products: cols
                .lessons
                .iter()
                .map(|(product, i)| {
                    LessonQuantity::new(product.clone(), rec.get(*i).unwrap_or("").trim())
                })
                .collect(),
            lesson_package: c("surf_lesson_package_name"),
        });
    }
    debug!(rows = out.len(), lesson_columns = cols.lessons.len(), "booking csv parsed");
    Ok(out)
}

/// Parse a booking export at `path`. See [`parse_bookings_str`].
pub fn parse_bookings_file(path: &Path) -> Result<Vec<RawBooking>, CsvIngestError> {
    let src = std::fs::read_to_string(path)
        .map_err(|e| CsvIngestError::Io(format!("read '{}': {e}", path.display())))?;
    parse_bookings_str(&src)
}

/// [`RawBookingSource`] over a CSV export on disk. The file is read on
/// every `get_all` call.
#[derive(Clone, Debug)]
pub struct CsvBookingSource {
    path: PathBuf,
}

impl CsvBookingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RawBookingSource for CsvBookingSource {
    fn source_name(&self) -> &'static str {
        "csv"
    }

    fn get_all(&self) -> anyhow::Result<Vec<RawBooking>> {
        parse_bookings_file(&self.path)
            .with_context(|| format!("load booking export {}", self.path.display()))
    }
}
