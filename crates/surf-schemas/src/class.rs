use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AgeBand
// ---------------------------------------------------------------------------

/// Coarse age category used for lesson grouping.
///
/// Classification is done once from the booking's free-text group label.
/// Teen and kid markers win over adult markers; anything unrecognised
/// (including a blank label) is an adult.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeBand {
    Adult,
    Teen,
    Kid,
}

impl AgeBand {
    /// Label written into the ledger when the feed leaves the group blank.
    pub const DEFAULT_ADULT_LABEL: &'static str = "Adults >18 years";

    pub fn classify(label: &str) -> Self {
        let lower = label.trim().to_ascii_lowercase();
        if lower.is_empty() {
            return AgeBand::Adult;
        }
        let compact: String = lower.chars().filter(|c| !c.is_whitespace()).collect();
        if lower.contains("teen") || compact.contains("13-18") {
            AgeBand::Teen
        } else if lower.contains("kid") || lower.contains("child") || compact.contains("5-12") {
            AgeBand::Kid
        } else {
            AgeBand::Adult
        }
    }

    pub fn is_adult(&self) -> bool {
        *self == AgeBand::Adult
    }

    /// Kids and teens both count as dependants for single-parent inference.
    pub fn is_minor(&self) -> bool {
        matches!(self, AgeBand::Teen | AgeBand::Kid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::Adult => "ADULT",
            AgeBand::Teen => "TEEN",
            AgeBand::Kid => "KID",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SkillLevel
// ---------------------------------------------------------------------------

/// Surf proficiency tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillLevel {
    Beginner,
    BeginnerPlus,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::BeginnerPlus,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];

    /// Unknown or blank levels fall back to `Beginner`.
    pub fn classify(label: &str) -> Self {
        Self::parse(label).unwrap_or(SkillLevel::Beginner)
    }

    /// Strict parse; `None` for anything that is not one of the four tiers.
    pub fn parse(label: &str) -> Option<Self> {
        let norm = label
            .trim()
            .to_ascii_uppercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        match norm.as_str() {
            "BEGINNER" => Some(SkillLevel::Beginner),
            "BEGINNER PLUS" => Some(SkillLevel::BeginnerPlus),
            "INTERMEDIATE" => Some(SkillLevel::Intermediate),
            "ADVANCED" => Some(SkillLevel::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "BEGINNER",
            SkillLevel::BeginnerPlus => "BEGINNER PLUS",
            SkillLevel::Intermediate => "INTERMEDIATE",
            SkillLevel::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Booking lifecycle status as reported by the booking system.
///
/// Only `Cancelled` and `Expired` take a guest off camp; every other value,
/// including ones we do not recognise, keeps the guest active.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Expired,
    Other(String),
}

impl BookingStatus {
    pub fn parse(raw: &str) -> Self {
        let t = raw.trim();
        match t.to_ascii_lowercase().as_str() {
            "confirmed" => BookingStatus::Confirmed,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            "expired" => BookingStatus::Expired,
            _ => BookingStatus::Other(t.to_string()),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::Expired)
    }

    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Expired => "expired",
            BookingStatus::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        BookingStatus::parse(&s)
    }
}

impl From<BookingStatus> for String {
    fn from(s: BookingStatus) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_band_labels_from_the_booking_feed() {
        assert_eq!(AgeBand::classify("Adults >18 years"), AgeBand::Adult);
        assert_eq!(AgeBand::classify("Teens 13-18"), AgeBand::Teen);
        assert_eq!(AgeBand::classify("13 - 18"), AgeBand::Teen);
        assert_eq!(AgeBand::classify("Kids 5-12"), AgeBand::Kid);
        assert_eq!(AgeBand::classify("5 - 12"), AgeBand::Kid);
        assert_eq!(AgeBand::classify("18-60"), AgeBand::Adult);
        assert_eq!(AgeBand::classify("   "), AgeBand::Adult);
    }

    #[test]
    fn skill_level_parse_and_fallback() {
        assert_eq!(SkillLevel::parse("beginner plus"), Some(SkillLevel::BeginnerPlus));
        assert_eq!(SkillLevel::parse("BEGINNER_PLUS"), Some(SkillLevel::BeginnerPlus));
        assert_eq!(SkillLevel::parse(" Advanced "), Some(SkillLevel::Advanced));
        assert_eq!(SkillLevel::parse("pro"), None);
        assert_eq!(SkillLevel::classify("pro"), SkillLevel::Beginner);
        assert_eq!(SkillLevel::classify(""), SkillLevel::Beginner);
    }

    #[test]
    fn booking_status_activity() {
        assert!(!BookingStatus::parse("Cancelled").is_active());
        assert!(!BookingStatus::parse("canceled").is_active());
        assert!(!BookingStatus::parse("expired").is_active());
        assert!(BookingStatus::parse("confirmed").is_active());
        assert!(BookingStatus::parse("pending").is_active());
        assert_eq!(BookingStatus::parse(" pending ").as_str(), "pending");
    }
}
