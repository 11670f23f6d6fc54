//! # Analysis Settings
//!
//! Defaults a front end falls back on when the user leaves a field blank:
//! sweep increment, dynamic factors and nth-point count. Settings serialize to
//! a small JSON file; missing keys take their defaults so hand-written files
//! can list only what they change.
//!
//! ## Example
//!
//! ```rust
//! use envelope_core::settings::AnalysisSettings;
//!
//! let settings = AnalysisSettings::from_json_str(r#"{ "impact_factor": 0.35 }"#).unwrap();
//! assert_eq!(settings.impact_factor, 0.35);
//! assert_eq!(settings.increment_in, 1.0);
//! assert_eq!(settings.increment_ft(), 1.0 / 12.0);
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::DynamicFactors;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::{Feet, Inches};

/// Default sweep increment (inches)
pub const DEFAULT_INCREMENT_IN: f64 = 1.0;

/// Default number of span divisions for nth-point profiles
pub const DEFAULT_NTH_POINTS: usize = 10;

/// Engine defaults, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Step between train positions (inches)
    pub increment_in: f64,

    /// Impact factor applied to governing values
    pub impact_factor: f64,

    /// Distribution factor applied to governing values
    pub distribution_factor: f64,

    /// Span divisions for nth-point profiles
    pub nth_points: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            increment_in: DEFAULT_INCREMENT_IN,
            impact_factor: 0.0,
            distribution_factor: 1.0,
            nth_points: DEFAULT_NTH_POINTS,
        }
    }
}

impl AnalysisSettings {
    /// Parse settings from JSON text
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: AnalysisSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read settings", path.display().to_string(), e.to_string())
        })?;
        let settings: AnalysisSettings =
            serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
                reason: format!("Invalid JSON in {}: {}", path.display(), e),
            })?;
        settings.validate()?;
        debug!("loaded analysis settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a JSON file
    pub fn save(&self, path: &Path) -> CalcResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| {
            CalcError::file_error("write settings", path.display().to_string(), e.to_string())
        })
    }

    /// Check every field is usable by the engine
    pub fn validate(&self) -> CalcResult<()> {
        require_positive(
            "increment_in",
            self.increment_in,
            "Increment must be a finite positive length",
        )?;
        self.dynamic_factors().validate()?;
        if self.nth_points == 0 {
            return Err(CalcError::invalid_parameter(
                "nth_points",
                "0",
                "Number of span divisions must be at least 1",
            ));
        }
        Ok(())
    }

    /// Sweep increment converted to feet
    pub fn increment_ft(&self) -> f64 {
        Feet::from(Inches(self.increment_in)).value()
    }

    /// Impact and distribution factors
    pub fn dynamic_factors(&self) -> DynamicFactors {
        DynamicFactors::new(self.impact_factor, self.distribution_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn test_defaults() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.increment_in, 1.0);
        assert_eq!(settings.dynamic_factors(), DynamicFactors::default());
        assert_eq!(settings.nth_points, 10);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let settings =
            AnalysisSettings::from_json_str(r#"{ "increment_in": 6.0, "nth_points": 20 }"#).unwrap();
        assert_eq!(settings.increment_ft(), 0.5);
        assert_eq!(settings.nth_points, 20);
        assert_eq!(settings.distribution_factor, 1.0);
    }

    #[test]
    fn test_invalid_json_values() {
        let err = AnalysisSettings::from_json_str(r#"{ "impact_factor": -1.0 }"#).unwrap_err();
        assert_eq!(err.field(), Some("impact_factor"));

        let err = AnalysisSettings::from_json_str(r#"{ "nth_points": 0 }"#).unwrap_err();
        assert_eq!(err.field(), Some("nth_points"));

        let err = AnalysisSettings::from_json_str("not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_dir().join("envelope_settings_roundtrip.json");
        let settings = AnalysisSettings {
            increment_in: 3.0,
            impact_factor: 0.28,
            distribution_factor: 0.5,
            nth_points: 8,
        };
        settings.save(&path).unwrap();

        let loaded = AnalysisSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_dir().join("envelope_settings_does_not_exist.json");
        let err = AnalysisSettings::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
