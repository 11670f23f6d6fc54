//! # Unit Types
//!
//! Type-safe length wrappers. Lightweight `f64` newtypes that serialize as
//! plain numbers.
//!
//! ## US Customary Units
//!
//! Railway bridge live load (Cooper E-80) is tabulated in US customary units.
//! Spans and axle spacings are in feet, sweep increments are entered in
//! inches. Forces (kips) and moments (kip-ft) travel as `f64` fields named
//! with a unit suffix.
//!
//! ## Example
//!
//! ```rust
//! use envelope_core::units::{Feet, Inches};
//!
//! let increment = Inches(6.0);
//! let increment_ft: Feet = increment.into();
//! assert_eq!(increment_ft.0, 0.5);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

impl Feet {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}
