//! Runs both calculators over a parsed input.

use crate::bac::estimate_bac;
use crate::bmi::{calculate_bmi, BmiCategory};
use crate::legislation::{assess, DriverClass, LimitAssessment};
use crate::{CalculationInput, CalculationResult};

/// Compute BMI and BAC for a single input.
///
/// The two values are independent; neither influences the other.
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let bmi = calculate_bmi(input.weight_kg, input.height_cm);
    let bac = estimate_bac(
        input.weight_kg,
        input.sex,
        input.drink_count,
        input.drink,
        input.custom_abv_percent,
        input.hours_since_last_drink,
    );

    tracing::debug!(
        "Calculated BMI {:.2} and BAC {:.3} for {} x {}",
        bmi,
        bac,
        input.drink_count,
        input.drink
    );

    CalculationResult { bmi, bac }
}

impl CalculationResult {
    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi)
    }

    pub fn assess(&self, driver_class: DriverClass) -> LimitAssessment {
        assess(self.bac, driver_class)
    }
}
