//! Reference Axle Patterns
//!
//! A pattern is the fixed, span-independent part of a moving load: the
//! ordered base axles plus the trailing axle repeated to cover long spans.
//! Patterns are read-only; span-specific trains are derived from them by
//! [`AxleTrain::from_pattern`](super::AxleTrain::from_pattern).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// One axle of a train, front-to-back.
///
/// `spacing_ft` is the gap to the axle ahead of this one. The lead axle
/// carries a placeholder spacing of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axle {
    /// Axle load (kips)
    pub load_kips: f64,
    /// Distance from the preceding axle (ft)
    pub spacing_ft: f64,
}

impl Axle {
    /// Create an axle
    pub const fn new(load_kips: f64, spacing_ft: f64) -> Self {
        Axle {
            load_kips,
            spacing_ft,
        }
    }
}

/// Cooper E-80 axle loads (kips), two locomotives front-to-back then the
/// first 8 kip unit of the trailing load
const COOPER_E80_LOADS_KIPS: [f64; 19] = [
    40.0, 80.0, 80.0, 80.0, 80.0, 52.0, 52.0, 52.0, 52.0, //
    40.0, 80.0, 80.0, 80.0, 80.0, 52.0, 52.0, 52.0, 52.0, //
    8.0,
];

/// Cooper E-80 axle spacings (ft), each measured to the preceding axle
const COOPER_E80_SPACINGS_FT: [f64; 19] = [
    0.0, 8.0, 5.0, 5.0, 5.0, 9.0, 5.0, 6.0, 5.0, //
    8.0, 8.0, 5.0, 5.0, 5.0, 9.0, 5.0, 6.0, 5.0, //
    5.5,
];

/// Trailing uniform load of 8 kip/ft, modelled as 8 kip axles at 1 ft
const COOPER_E80_TRAILING: Axle = Axle::new(8.0, 1.0);

/// The Cooper E-80 reference train, built once per process.
pub static COOPER_E80: Lazy<AxlePattern> = Lazy::new(AxlePattern::cooper_e80);

/// A named base axle layout plus the axle appended to extend it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxlePattern {
    /// Display name (e.g., "Cooper E-80")
    pub name: String,
    /// Base axles, lead axle first
    pub axles: Vec<Axle>,
    /// Axle appended repeatedly until the train covers the span
    pub trailing: Axle,
}

impl AxlePattern {
    /// Create a pattern from its parts. Call [`validate`](Self::validate)
    /// before relying on it.
    pub fn new(name: impl Into<String>, axles: Vec<Axle>, trailing: Axle) -> Self {
        AxlePattern {
            name: name.into(),
            axles,
            trailing,
        }
    }

    /// Build the Cooper E-80 pattern. Prefer the shared [`COOPER_E80`].
    pub fn cooper_e80() -> Self {
        let axles = COOPER_E80_LOADS_KIPS
            .iter()
            .zip(COOPER_E80_SPACINGS_FT.iter())
            .map(|(&load, &spacing)| Axle::new(load, spacing))
            .collect();
        AxlePattern::new("Cooper E-80", axles, COOPER_E80_TRAILING)
    }

    /// Sum of all base spacings (ft)
    pub fn base_length_ft(&self) -> f64 {
        self.axles.iter().map(|axle| axle.spacing_ft).sum()
    }

    /// Check the pattern can be swept.
    ///
    /// Loads must be positive, spacings non-negative, the lead spacing zero,
    /// and the trailing spacing positive so extension terminates.
    pub fn validate(&self) -> CalcResult<()> {
        let Some(lead) = self.axles.first() else {
            return Err(CalcError::invalid_parameter(
                "axles",
                "[]",
                "Axle pattern must contain at least one axle",
            ));
        };
        if lead.spacing_ft != 0.0 {
            return Err(CalcError::invalid_parameter(
                "axles[0].spacing_ft",
                lead.spacing_ft.to_string(),
                "Lead axle spacing is a placeholder and must be zero",
            ));
        }

        for (i, axle) in self.axles.iter().enumerate() {
            if !(axle.load_kips.is_finite() && axle.load_kips > 0.0) {
                return Err(CalcError::invalid_parameter(
                    format!("axles[{}].load_kips", i),
                    axle.load_kips.to_string(),
                    "Axle load must be a finite positive force",
                ));
            }
            if !(axle.spacing_ft.is_finite() && axle.spacing_ft >= 0.0) {
                return Err(CalcError::invalid_parameter(
                    format!("axles[{}].spacing_ft", i),
                    axle.spacing_ft.to_string(),
                    "Axle spacing must be finite and non-negative",
                ));
            }
        }

        if !(self.trailing.load_kips.is_finite() && self.trailing.load_kips > 0.0) {
            return Err(CalcError::invalid_parameter(
                "trailing.load_kips",
                self.trailing.load_kips.to_string(),
                "Trailing axle load must be a finite positive force",
            ));
        }
        if !(self.trailing.spacing_ft.is_finite() && self.trailing.spacing_ft > 0.0) {
            return Err(CalcError::invalid_parameter(
                "trailing.spacing_ft",
                self.trailing.spacing_ft.to_string(),
                "Trailing axle spacing must be positive or the train never covers the span",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooper_e80_layout() {
        let pattern = &*COOPER_E80;
        assert_eq!(pattern.axles.len(), 19);
        assert_eq!(pattern.axles[0], Axle::new(40.0, 0.0));
        assert_eq!(pattern.axles[18], Axle::new(8.0, 5.5));
        assert_eq!(pattern.trailing, Axle::new(8.0, 1.0));
        assert_eq!(pattern.base_length_ft(), 109.5);
        assert!(pattern.validate().is_ok());
    }

    #[test]
    fn test_locomotive_weight() {
        // Each E-80 locomotive + tender: 40 + 4*80 + 4*52 = 568 kips
        let total: f64 = COOPER_E80.axles.iter().map(|a| a.load_kips).sum();
        assert_eq!(total, 2.0 * 568.0 + 8.0);
    }

    #[test]
    fn test_validate_rejects_bad_patterns() {
        let empty = AxlePattern::new("empty", vec![], Axle::new(8.0, 1.0));
        assert!(empty.validate().is_err());

        let shifted = AxlePattern::new("shifted", vec![Axle::new(10.0, 2.0)], Axle::new(8.0, 1.0));
        assert_eq!(
            shifted.validate().unwrap_err().field(),
            Some("axles[0].spacing_ft")
        );

        let zero_load = AxlePattern::new(
            "zero",
            vec![Axle::new(10.0, 0.0), Axle::new(0.0, 5.0)],
            Axle::new(8.0, 1.0),
        );
        assert_eq!(
            zero_load.validate().unwrap_err().field(),
            Some("axles[1].load_kips")
        );

        let stuck = AxlePattern::new("stuck", vec![Axle::new(10.0, 0.0)], Axle::new(8.0, 0.0));
        assert_eq!(
            stuck.validate().unwrap_err().field(),
            Some("trailing.spacing_ft")
        );
    }

    #[test]
    fn test_pattern_serialization() {
        let json = serde_json::to_string(&*COOPER_E80).unwrap();
        assert!(json.contains("Cooper E-80"));
        let roundtrip: AxlePattern = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, *COOPER_E80);
    }
}
