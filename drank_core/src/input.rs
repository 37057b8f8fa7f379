//! Parsing of raw form fields into a [`CalculationInput`].
//!
//! Every free-text field must parse, except the custom ABV which silently
//! falls back to "no override". A failure means no calculation is run.
//!
//! Weight and height are held to human ranges so both formulas stay finite
//! and BMI stays strictly positive.

use crate::{CalculationInput, DrinkType, Error, Result, Sex};
use std::str::FromStr;

pub const MIN_WEIGHT_KG: f64 = 1.0;
pub const MAX_WEIGHT_KG: f64 = 700.0;
pub const MIN_HEIGHT_CM: f64 = 30.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;
pub const MAX_ABV_PERCENT: f64 = 100.0;

/// Raw field values as a form collects them
#[derive(Clone, Debug, Default)]
pub struct FormInput {
    pub weight: String,
    pub height: String,
    pub age: String,
    pub sex: Sex,
    pub drink: DrinkType,
    pub drink_count: String,
    pub custom_abv: String,
    pub hours_since_last_drink: String,
}

impl FormInput {
    /// Validate and convert every field
    pub fn parse(&self) -> Result<CalculationInput> {
        let input = CalculationInput {
            weight_kg: parse_weight(&self.weight)?,
            height_cm: parse_height(&self.height)?,
            age_years: parse_field("age", &self.age)?,
            sex: self.sex,
            drink: self.drink,
            drink_count: parse_field("drink count", &self.drink_count)?,
            custom_abv_percent: parse_custom_abv(&self.custom_abv),
            hours_since_last_drink: parse_non_negative(
                "hours since last drink",
                &self.hours_since_last_drink,
            )?,
        };

        tracing::debug!("Parsed form input: {:?}", input);
        Ok(input)
    }
}

/// Lenient ABV override: anything outside (0, 100] is ignored
pub fn parse_custom_abv(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|abv| *abv > 0.0 && *abv <= MAX_ABV_PERCENT)
}

/// Weight in kilograms, between `MIN_WEIGHT_KG` and `MAX_WEIGHT_KG` inclusive
pub fn parse_weight(raw: &str) -> Result<f64> {
    parse_in_range("weight", raw, MIN_WEIGHT_KG, MAX_WEIGHT_KG)
}

/// Height in centimetres, between `MIN_HEIGHT_CM` and `MAX_HEIGHT_CM` inclusive
pub fn parse_height(raw: &str) -> Result<f64> {
    parse_in_range("height", raw, MIN_HEIGHT_CM, MAX_HEIGHT_CM)
}

/// Parse a trimmed field with its `FromStr` implementation
pub fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse::<T>().map_err(|_| Error::InvalidInput {
        field,
        value: raw.to_string(),
    })
}

fn parse_in_range(field: &'static str, raw: &str, min: f64, max: f64) -> Result<f64> {
    let value: f64 = parse_field(field, raw)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidInput {
            field,
            value: raw.to_string(),
        })
    }
}

/// Parse a finite real number >= 0
pub fn parse_non_negative(field: &'static str, raw: &str) -> Result<f64> {
    let value: f64 = parse_field(field, raw)?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidInput {
            field,
            value: raw.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> FormInput {
        FormInput {
            weight: "80".into(),
            height: "180".into(),
            age: "30".into(),
            sex: Sex::Male,
            drink: DrinkType::Beer,
            drink_count: "2".into(),
            custom_abv: String::new(),
            hours_since_last_drink: "0".into(),
        }
    }

    fn assert_invalid(form: &FormInput, expected_field: &str) {
        match form.parse() {
            Err(Error::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected invalid {}, got {:?}", expected_field, other),
        }
    }

    #[test]
    fn test_parse_valid_form() {
        let input = sample_form().parse().unwrap();
        assert_eq!(input.weight_kg, 80.0);
        assert_eq!(input.height_cm, 180.0);
        assert_eq!(input.age_years, 30);
        assert_eq!(input.drink_count, 2);
        assert_eq!(input.custom_abv_percent, None);
        assert_eq!(input.hours_since_last_drink, 0.0);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut form = sample_form();
        form.weight = " 72.5 ".into();
        form.hours_since_last_drink = "1.5\n".into();
        let input = form.parse().unwrap();
        assert_eq!(input.weight_kg, 72.5);
        assert_eq!(input.hours_since_last_drink, 1.5);
    }

    #[test]
    fn test_custom_abv_lenient() {
        assert_eq!(parse_custom_abv("7.5"), Some(7.5));
        assert_eq!(parse_custom_abv(" 40 "), Some(40.0));
        assert_eq!(parse_custom_abv("0"), None);
        assert_eq!(parse_custom_abv("-3"), None);
        assert_eq!(parse_custom_abv("strong"), None);
        assert_eq!(parse_custom_abv(""), None);
        assert_eq!(parse_custom_abv("inf"), None);
        assert_eq!(parse_custom_abv("NaN"), None);
        assert_eq!(parse_custom_abv("100"), Some(100.0));
        assert_eq!(parse_custom_abv("100.5"), None);
        assert_eq!(parse_custom_abv("1e308"), None);
    }

    #[test]
    fn test_unparseable_abv_never_fails_form() {
        let mut form = sample_form();
        form.custom_abv = "lots".into();
        assert!(form.parse().is_ok());
    }

    #[test]
    fn test_required_fields_rejected() {
        let mut form = sample_form();
        form.weight = String::new();
        assert_invalid(&form, "weight");

        let mut form = sample_form();
        form.height = "tall".into();
        assert_invalid(&form, "height");

        let mut form = sample_form();
        form.age = "30.5".into();
        assert_invalid(&form, "age");

        let mut form = sample_form();
        form.drink_count = "-1".into();
        assert_invalid(&form, "drink count");

        let mut form = sample_form();
        form.hours_since_last_drink = "soon".into();
        assert_invalid(&form, "hours since last drink");
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let mut form = sample_form();
        form.weight = "0".into();
        assert_invalid(&form, "weight");

        let mut form = sample_form();
        form.height = "-170".into();
        assert_invalid(&form, "height");

        let mut form = sample_form();
        form.hours_since_last_drink = "-2".into();
        assert_invalid(&form, "hours since last drink");

        let mut form = sample_form();
        form.weight = "inf".into();
        assert_invalid(&form, "weight");
    }

    #[test]
    fn test_extreme_magnitudes_rejected() {
        for weight in ["1e-320", "0.5", "700.1", "1e200"] {
            let mut form = sample_form();
            form.weight = weight.into();
            assert_invalid(&form, "weight");
        }

        for height in ["1e-300", "29.9", "300.1", "1e200"] {
            let mut form = sample_form();
            form.height = height.into();
            assert_invalid(&form, "height");
        }

        assert_eq!(parse_weight("1").unwrap(), MIN_WEIGHT_KG);
        assert_eq!(parse_height("300").unwrap(), MAX_HEIGHT_CM);
    }

    #[test]
    fn test_accepted_inputs_give_finite_results() {
        let extremes = [
            ("1", "30", u32::MAX, "100"),
            ("1", "300", u32::MAX, "100"),
            ("700", "30", 0, ""),
            ("700", "300", 1, "0.001"),
        ];

        for (weight, height, count, abv) in extremes {
            for drink in DrinkType::ALL {
                for sex in [Sex::Male, Sex::Female] {
                    let form = FormInput {
                        weight: weight.into(),
                        height: height.into(),
                        age: "30".into(),
                        sex,
                        drink,
                        drink_count: count.to_string(),
                        custom_abv: abv.into(),
                        hours_since_last_drink: "0".into(),
                    };
                    let result = crate::calculate(&form.parse().unwrap());
                    assert!(result.bmi.is_finite() && result.bmi > 0.0);
                    assert!(result.bac.is_finite() && result.bac >= 0.0);
                }
            }
        }
    }
}
