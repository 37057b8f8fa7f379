//! Configuration file support for DrankCalc.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/drankcalc/config.toml`.
//! Every section is optional; missing values fall back to defaults.

use crate::legislation::DriverClass;
use crate::{DrinkType, Error, Result, Sex};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Highest number of decimals accepted for displayed values
const MAX_PRECISION: usize = 10;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub drink: DrinkConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Personal defaults used when a value is not given on the command line
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(default)]
    pub sex: Sex,
}

/// Drink defaults
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct DrinkConfig {
    #[serde(default)]
    pub default_type: DrinkType,
}

/// Output formatting
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_bmi_precision")]
    pub bmi_precision: usize,

    #[serde(default = "default_bac_precision")]
    pub bac_precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bmi_precision: default_bmi_precision(),
            bac_precision: default_bac_precision(),
        }
    }
}

/// Which legal limit the warning is checked against
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct LimitsConfig {
    #[serde(default)]
    pub driver_class: DriverClass,
}

// Default value functions
fn default_bmi_precision() -> usize {
    2
}

fn default_bac_precision() -> usize {
    3
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::default_config_path())
    }

    /// Load configuration from a specific path, falling back to defaults if
    /// the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("drankcalc").join("config.toml")
    }

    /// Check values that serde cannot constrain
    pub fn validate(&self) -> Result<()> {
        if let Some(weight) = self.profile.weight_kg {
            if !(weight.is_finite() && weight > 0.0) {
                return Err(Error::Config(format!(
                    "profile.weight_kg must be positive, got {}",
                    weight
                )));
            }
        }

        if let Some(height) = self.profile.height_cm {
            if !(height.is_finite() && height > 0.0) {
                return Err(Error::Config(format!(
                    "profile.height_cm must be positive, got {}",
                    height
                )));
            }
        }

        if self.display.bmi_precision > MAX_PRECISION || self.display.bac_precision > MAX_PRECISION
        {
            return Err(Error::Config(format!(
                "display precision must be at most {}",
                MAX_PRECISION
            )));
        }

        Ok(())
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.profile.weight_kg, None);
        assert_eq!(config.profile.sex, Sex::Male);
        assert_eq!(config.drink.default_type, DrinkType::Beer);
        assert_eq!(config.display.bmi_precision, 2);
        assert_eq!(config.display.bac_precision, 3);
        assert_eq!(config.limits.driver_class, DriverClass::General);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.profile.weight_kg = Some(68.0);
        config.profile.sex = Sex::Female;
        config.drink.default_type = DrinkType::Wine;

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[profile]
weight_kg = 80.0
sex = "female"

[limits]
driver_class = "novice"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.profile.weight_kg, Some(80.0));
        assert_eq!(config.profile.height_cm, None);
        assert_eq!(config.profile.sex, Sex::Female);
        assert_eq!(config.limits.driver_class, DriverClass::Novice);
        assert_eq!(config.display.bac_precision, 3); // default
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.profile.height_cm = Some(182.0);
        config.display.bmi_precision = 1;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("absent.toml");

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        std::fs::write(&path, "[profile]\nweight_kg = -5.0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));

        std::fs::write(&path, "[display]\nbac_precision = 40\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));

        std::fs::write(&path, "[drink]\ndefault_type = \"cider\"\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
