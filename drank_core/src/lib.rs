#![forbid(unsafe_code)]

//! Core domain model and calculations for DrankCalc.
//!
//! This crate provides:
//! - Domain types (sex, drink types, calculation input and result)
//! - BMI calculation and classification
//! - Widmark-style BAC estimation
//! - Parsing of raw form fields
//! - The drink-driving legislation reference
//! - Configuration and logging

pub mod types;
pub mod error;
pub mod bmi;
pub mod bac;
pub mod input;
pub mod calculator;
pub mod legislation;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use bmi::{calculate_bmi, BmiCategory};
pub use bac::estimate_bac;
pub use input::{parse_custom_abv, FormInput};
pub use calculator::calculate;
pub use legislation::{assess, DriverClass, LimitAssessment};
pub use config::Config;
