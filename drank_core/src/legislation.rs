//! Static drink-driving legislation reference (Belgium, 2025).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Limit for drivers of motor vehicles, in per-mille
pub const GENERAL_LIMIT_PER_MILLE: f64 = 0.5;

/// Limit for professional and novice drivers, in per-mille
pub const PROFESSIONAL_LIMIT_PER_MILLE: f64 = 0.2;

pub const JURISDICTION: &str = "Belgium";

pub const TITLE: &str = "Belgian legislation (2025)";

/// Reference points shown on the legislation screen
pub const NOTES: [&str; 4] = [
    "Drivers of motor vehicles are subject to a legal limit of 0.5‰ (per mille).",
    "Professional drivers and novice drivers: 0.2‰.",
    "Alcohol checks are carried out frequently on the road.",
    "Penalties range from fines to driving bans and prison sentences.",
];

/// Category of driver, which decides the applicable limit
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DriverClass {
    #[default]
    General,
    Professional,
    Novice,
}

impl DriverClass {
    pub fn limit_per_mille(&self) -> f64 {
        match self {
            DriverClass::General => GENERAL_LIMIT_PER_MILLE,
            DriverClass::Professional | DriverClass::Novice => PROFESSIONAL_LIMIT_PER_MILLE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DriverClass::General => "general",
            DriverClass::Professional => "professional",
            DriverClass::Novice => "novice",
        }
    }
}

impl fmt::Display for DriverClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(DriverClass::General),
            "professional" | "pro" => Ok(DriverClass::Professional),
            "novice" => Ok(DriverClass::Novice),
            _ => Err(Error::InvalidInput {
                field: "driver class",
                value: s.to_string(),
            }),
        }
    }
}

/// Result of checking a BAC against the applicable limit
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LimitAssessment {
    pub driver_class: DriverClass,
    pub limit: f64,
    pub over_limit: bool,
}

/// Check a BAC against the limit for `driver_class`.
///
/// Reaching the limit counts as being over it.
pub fn assess(bac: f64, driver_class: DriverClass) -> LimitAssessment {
    let limit = driver_class.limit_per_mille();
    LimitAssessment {
        driver_class,
        limit,
        over_limit: bac >= limit,
    }
}

/// Full reference text, one line per entry
pub fn reference_text() -> String {
    let mut text = String::from(TITLE);
    text.push('\n');
    for note in NOTES {
        text.push_str("  • ");
        text.push_str(note);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits() {
        assert_eq!(DriverClass::General.limit_per_mille(), 0.5);
        assert_eq!(DriverClass::Professional.limit_per_mille(), 0.2);
        assert_eq!(DriverClass::Novice.limit_per_mille(), 0.2);
    }

    #[test]
    fn test_assess_threshold_inclusive() {
        assert!(assess(0.5, DriverClass::General).over_limit);
        assert!(!assess(0.499, DriverClass::General).over_limit);
        assert!(assess(0.3, DriverClass::Novice).over_limit);
        assert!(!assess(0.0, DriverClass::Professional).over_limit);
    }

    #[test]
    fn test_reference_text_mentions_limits() {
        let text = reference_text();
        assert!(text.starts_with(TITLE));
        assert!(text.contains("0.5‰"));
        assert!(text.contains("0.2‰"));
        assert_eq!(text.lines().count(), 1 + NOTES.len());
    }

    #[test]
    fn test_driver_class_parsing() {
        assert_eq!("Novice".parse::<DriverClass>().unwrap(), DriverClass::Novice);
        assert_eq!("pro".parse::<DriverClass>().unwrap(), DriverClass::Professional);
        assert!("truck".parse::<DriverClass>().is_err());
    }
}
