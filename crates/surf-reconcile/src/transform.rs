//! Raw booking row -> transient (unpersisted) guest.

use std::fmt;

use chrono::NaiveDate;
use surf_schemas::{AgeBand, BookingStatus, Guest, RawBooking, SkillLevel};

/// Date formats tried in order when no configuration overrides them.
pub const DEFAULT_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformOptions {
    /// chrono format strings, tried in order.
    pub date_formats: Vec<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// A single raw row that cannot become a guest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowTransformError {
    MissingField { field: &'static str },
    InvalidDate { field: &'static str, value: String },
    InvalidQuantity { product: String, value: String },
    /// Departure before arrival.
    InvertedStay {
        arrival: NaiveDate,
        departure: NaiveDate,
    },
}

impl fmt::Display for RowTransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowTransformError::MissingField { field } => write!(f, "missing field '{field}'"),
            RowTransformError::InvalidDate { field, value } => {
                write!(f, "invalid date in '{field}': '{value}'")
            }
            RowTransformError::InvalidQuantity { product, value } => {
                write!(f, "invalid lesson quantity for '{product}': '{value}'")
            }
            RowTransformError::InvertedStay { arrival, departure } => {
                write!(f, "departure {departure} is before arrival {arrival}")
            }
        }
    }
}

impl std::error::Error for RowTransformError {}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, RowTransformError> {
    let v = value.trim();
    if v.is_empty() {
        Err(RowTransformError::MissingField { field })
    } else {
        Ok(v)
    }
}

fn parse_date(
    field: &'static str,
    value: &str,
    opts: &TransformOptions,
) -> Result<NaiveDate, RowTransformError> {
    let v = value.trim();
    // Spreadsheet exports sometimes carry a midnight time component.
    let day_part = v.split(['T', ' ']).next().unwrap_or(v);
    for candidate in [v, day_part] {
        for fmt in &opts.date_formats {
            if let Ok(d) = NaiveDate::parse_from_str(candidate, fmt) {
                return Ok(d);
            }
        }
    }
    Err(RowTransformError::InvalidDate {
        field,
        value: v.to_string(),
    })
}

/// Parse one lesson-product cell. Blank is zero; integral floats ("2.0")
/// are accepted because spreadsheet exports produce them.
pub fn parse_lesson_count(product: &str, raw: &str) -> Result<u32, RowTransformError> {
    let t = raw.trim();
    if t.is_empty() {
        return Ok(0);
    }
    if let Ok(n) = t.parse::<u32>() {
        return Ok(n);
    }
    match t.parse::<f64>() {
        Ok(x) if x.is_finite() && x >= 0.0 && x.fract() == 0.0 && x <= f64::from(u32::MAX) => {
            Ok(x as u32)
        }
        _ => Err(RowTransformError::InvalidQuantity {
            product: product.to_string(),
            value: t.to_string(),
        }),
    }
}

/// Arrival and departure of a raw row, parsed with `opts`.
///
/// Both dates are required and the stay must not be inverted.
pub fn parse_stay(
    raw: &RawBooking,
    opts: &TransformOptions,
) -> Result<(NaiveDate, NaiveDate), RowTransformError> {
    let arrival = parse_date("arrival", required("arrival", &raw.arrival)?, opts)?;
    let departure = parse_date("departure", required("departure", &raw.departure)?, opts)?;
    if arrival > departure {
        return Err(RowTransformError::InvertedStay { arrival, departure });
    }
    Ok((arrival, departure))
}

/// Build the normalized guest for one raw row.
///
/// The booker id becomes the booking number. A blank level is recorded as
/// BEGINNER; a blank age band becomes the adult label via
/// [`Guest::normalize`].
pub fn guest_from_raw(raw: &RawBooking, opts: &TransformOptions) -> Result<Guest, RowTransformError> {
    let booking_number = required("booker_id", &raw.booker_id)?;
    let first_name = required("first_name", &raw.first_name)?;
    let (arrival, departure) = parse_stay(raw, opts)?;

    let birthday = if raw.birthday.trim().is_empty() {
        None
    } else {
        Some(parse_date("birthday", &raw.birthday, opts)?)
    };

    let mut lesson_count: u32 = 0;
    for p in &raw.lesson_products {
        let n = parse_lesson_count(&p.product, &p.quantity)?;
        lesson_count = lesson_count.saturating_add(n);
    }

    let skill_level_label = match raw.level.trim() {
        "" => SkillLevel::Beginner.as_str().to_string(),
        s => s.to_string(),
    };

    let guest = Guest {
        id: None,
        first_name: first_name.to_string(),
        last_name: raw.last_name.trim().to_string(),
        birthday,
        gender: raw.gender.trim().to_string(),
        age_band: AgeBand::Adult,
        age_band_label: raw.group.trim().to_string(),
        skill_level: SkillLevel::Beginner,
        skill_level_label,
        booking_number: booking_number.to_string(),
        arrival,
        departure,
        booking_status: BookingStatus::parse(&raw.booking_status),
        lesson_count,
        lesson_package: raw.lesson_package.trim().to_string(),
        single_parent: false,
    };
    Ok(guest.normalized())
}
