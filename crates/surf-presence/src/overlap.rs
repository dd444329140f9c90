use chrono::NaiveDate;

/// How a stay `[arrival, departure]` is tested against a period
/// `[start, end]`. Boundary days differ between the two; callers choose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlapRule {
    /// Stay brackets the whole period: `arrival < start && departure > end`.
    /// Touching a boundary day is not enough.
    StrictContainment,
    /// Standard interval intersection: `arrival <= end && departure >= start`.
    Inclusive,
}

impl OverlapRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlapRule::StrictContainment => "strict",
            OverlapRule::Inclusive => "inclusive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "strict_containment" => Some(OverlapRule::StrictContainment),
            "inclusive" => Some(OverlapRule::Inclusive),
            _ => None,
        }
    }
}

pub fn overlaps(
    rule: OverlapRule,
    arrival: NaiveDate,
    departure: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
) -> bool {
    match rule {
        OverlapRule::StrictContainment => arrival < start && departure > end,
        OverlapRule::Inclusive => arrival <= end && departure >= start,
    }
}
