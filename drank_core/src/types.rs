//! Core domain types for DrankCalc.
//!
//! This module defines the value types shared by the calculators:
//! - Sex and drink type enumerations
//! - Per-drink standard serving constants
//! - Calculation input and result bundles
//!
//! None of these are persisted; they live for a single calculation.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Person
// ============================================================================

/// Biological sex, used to pick the Widmark distribution ratio
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" => Ok(Sex::Male),
            "female" | "f" | "woman" => Ok(Sex::Female),
            _ => Err(Error::InvalidInput {
                field: "sex",
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Drinks
// ============================================================================

/// Standard serving of a drink type
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrinkProfile {
    /// Alcohol by volume, in percent
    pub abv_percent: f64,
    /// Serving volume in millilitres
    pub volume_ml: f64,
}

const BEER: DrinkProfile = DrinkProfile {
    abv_percent: 5.0,
    volume_ml: 330.0,
};

const WINE: DrinkProfile = DrinkProfile {
    abv_percent: 12.0,
    volume_ml: 100.0,
};

const SPIRIT: DrinkProfile = DrinkProfile {
    abv_percent: 40.0,
    volume_ml: 35.0,
};

/// Kind of drink consumed
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DrinkType {
    #[default]
    Beer,
    Wine,
    Whiskey,
    Vodka,
    Rum,
    Gin,
}

impl DrinkType {
    pub const ALL: [DrinkType; 6] = [
        DrinkType::Beer,
        DrinkType::Wine,
        DrinkType::Whiskey,
        DrinkType::Vodka,
        DrinkType::Rum,
        DrinkType::Gin,
    ];

    /// Standard serving constants for this drink
    pub fn profile(&self) -> DrinkProfile {
        match self {
            DrinkType::Beer => BEER,
            DrinkType::Wine => WINE,
            DrinkType::Whiskey | DrinkType::Vodka | DrinkType::Rum | DrinkType::Gin => SPIRIT,
        }
    }

    pub fn standard_abv_percent(&self) -> f64 {
        self.profile().abv_percent
    }

    pub fn standard_volume_ml(&self) -> f64 {
        self.profile().volume_ml
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkType::Beer => "beer",
            DrinkType::Wine => "wine",
            DrinkType::Whiskey => "whiskey",
            DrinkType::Vodka => "vodka",
            DrinkType::Rum => "rum",
            DrinkType::Gin => "gin",
        }
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrinkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beer" => Ok(DrinkType::Beer),
            "wine" => Ok(DrinkType::Wine),
            "whiskey" | "whisky" => Ok(DrinkType::Whiskey),
            "vodka" => Ok(DrinkType::Vodka),
            "rum" => Ok(DrinkType::Rum),
            "gin" => Ok(DrinkType::Gin),
            _ => Err(Error::InvalidInput {
                field: "drink type",
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Calculation bundles
// ============================================================================

/// Parsed, validated input for a single calculation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculationInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Collected and validated, but not used by either formula
    pub age_years: u32,
    pub sex: Sex,
    pub drink: DrinkType,
    pub drink_count: u32,
    /// ABV override in percent; only honoured when > 0
    pub custom_abv_percent: Option<f64>,
    pub hours_since_last_drink: f64,
}

/// Output of a single calculation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationResult {
    /// Body mass index in kg/m²
    pub bmi: f64,
    /// Estimated blood alcohol concentration in per-mille
    pub bac: f64,
}
