//! Blood alcohol concentration estimate (Widmark-style).
//!
//! The estimate runs in these steps:
//! - Resolve the effective ABV (custom override if positive, else standard)
//! - Convert the serving to grams of ethanol
//! - Scale by drink count, body weight in pounds and the distribution ratio
//! - Subtract hourly elimination and clamp at zero
//!
//! The result is in per-mille (‰).

use crate::{DrinkType, Sex};

/// Density of ethanol in g/mL
pub const ETHANOL_DENSITY_G_PER_ML: f64 = 0.789;

/// Kilograms to pounds
pub const LBS_PER_KG: f64 = 2.20462;

/// Scaling constant of the pound-based Widmark formula
pub const WIDMARK_SCALE: f64 = 5.14;

/// BAC eliminated per hour
pub const ELIMINATION_PER_HOUR: f64 = 0.015;

/// Body-water distribution ratio for the given sex
pub fn distribution_ratio(sex: Sex) -> f64 {
    match sex {
        Sex::Male => 0.68,
        Sex::Female => 0.55,
    }
}

/// ABV to use for a drink: the override wins only when it is > 0
pub fn effective_abv_percent(drink: DrinkType, custom_abv_percent: Option<f64>) -> f64 {
    custom_abv_percent
        .filter(|abv| *abv > 0.0)
        .unwrap_or_else(|| drink.standard_abv_percent())
}

/// Grams of ethanol in one standard serving of `drink`
pub fn alcohol_grams_per_drink(drink: DrinkType, custom_abv_percent: Option<f64>) -> f64 {
    let abv = effective_abv_percent(drink, custom_abv_percent);
    drink.standard_volume_ml() * (abv / 100.0) * ETHANOL_DENSITY_G_PER_ML
}

/// Estimate BAC in per-mille.
///
/// Serving volume always comes from the drink type; only the ABV can be
/// overridden. The result is never negative.
pub fn estimate_bac(
    weight_kg: f64,
    sex: Sex,
    drink_count: u32,
    drink: DrinkType,
    custom_abv_percent: Option<f64>,
    hours_since_last_drink: f64,
) -> f64 {
    let total_grams = f64::from(drink_count) * alcohol_grams_per_drink(drink, custom_abv_percent);
    let weight_lbs = weight_kg * LBS_PER_KG;

    let raw = (total_grams * WIDMARK_SCALE) / (weight_lbs * distribution_ratio(sex));
    let bac = raw - ELIMINATION_PER_HOUR * hours_since_last_drink;

    tracing::trace!(
        total_grams,
        raw,
        hours_since_last_drink,
        "BAC estimate before clamping: {}",
        bac
    );

    bac.max(0.0)
}
