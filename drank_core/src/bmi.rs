//! Body mass index calculation and classification.

use serde::Serialize;
use std::fmt;

/// Compute BMI from weight in kilograms and height in centimetres.
///
/// Callers supply positive values; there is no error path.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// WHO weight classification of a BMI value
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseClassI,
    ObeseClassII,
    ObeseClassIII,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ObeseClassI
        } else if bmi < 40.0 {
            BmiCategory::ObeseClassII
        } else {
            BmiCategory::ObeseClassIII
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal weight",
            BmiCategory::Overweight => "overweight",
            BmiCategory::ObeseClassI => "obese (class I)",
            BmiCategory::ObeseClassII => "obese (class II)",
            BmiCategory::ObeseClassIII => "obese (class III)",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
