//! # Moving-Load Calculations
//!
//! The envelope engine, leaves first:
//!
//! - [`sweep`] - Discrete train positions for a span and increment
//! - [`response`] - Reactions, moment and shear for one train position
//! - [`envelope`] - Governing moment/shear at one point, with dynamic factors
//! - [`profile`] - Envelopes at nth points along the span
//! - [`moving_load`] - Owning context that reuses the train and sweep per span
//!
//! Every function here is pure: no shared mutable state, no I/O, and
//! identical inputs give bit-identical outputs.

pub mod envelope;
pub mod moving_load;
pub mod profile;
pub mod response;
pub mod sweep;

// Re-export commonly used types
pub use envelope::{envelope, max_moment, max_shear, DynamicFactors, EnvelopeResult, PointEnvelope};
pub use moving_load::{GoverningPlacement, MovingLoadAnalysis};
pub use profile::{moment_profile, shear_profile, ProfilePoint, ProfileResult};
pub use response::{evaluate, PositionResponse};
pub use sweep::PositionSweep;

use serde::{Deserialize, Serialize};

/// Where along the span to evaluate, as entered by a user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum EvaluationPoint {
    /// Distance from the left support (ft)
    Absolute(f64),
    /// Fraction of the span (0.5 = mid-span)
    SpanFraction(f64),
}

impl EvaluationPoint {
    /// Distance from the left support for a span of `span_ft`
    pub fn resolve(&self, span_ft: f64) -> f64 {
        match *self {
            EvaluationPoint::Absolute(x_ft) => x_ft,
            EvaluationPoint::SpanFraction(ratio) => ratio * span_ft,
        }
    }
}

impl Default for EvaluationPoint {
    fn default() -> Self {
        EvaluationPoint::SpanFraction(0.5)
    }
}
