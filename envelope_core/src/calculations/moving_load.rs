//! Moving-Load Analysis Context
//!
//! Owns the extended train and position sweep for one span and increment so
//! repeated point and profile queries reuse them instead of rebuilding.
//!
//! ## Example
//! ```rust
//! use envelope_core::calculations::moving_load::MovingLoadAnalysis;
//! use envelope_core::calculations::envelope::DynamicFactors;
//!
//! let analysis = MovingLoadAnalysis::new(100.0, 1.0).unwrap();
//! let factors = DynamicFactors::default();
//!
//! let at_midspan = analysis.envelope(50.0, factors).unwrap();
//! println!("M = {:.2} kip-ft with the train at {:.2} ft",
//!     at_midspan.moment.max_value, at_midspan.moment.position_ft);
//!
//! let curve = analysis.moment_profile(10, factors).unwrap();
//! assert_eq!(curve.len(), 11);
//! ```

use serde::{Deserialize, Serialize};

use super::envelope::{self, DynamicFactors, EnvelopeResult, PointEnvelope};
use super::profile::{self, ProfileResult};
use super::sweep::PositionSweep;
use crate::errors::CalcResult;
use crate::loads::{AxlePattern, AxlePlacement, AxleTrain};
use crate::settings::AnalysisSettings;

/// Governing envelope plus where every axle sits at that train position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoverningPlacement {
    /// Governing value and train position
    pub envelope: EnvelopeResult,
    /// All axles at the governing position, lead first
    pub axles: Vec<AxlePlacement>,
}

impl GoverningPlacement {
    /// Axles strictly between the supports
    pub fn on_span(&self) -> impl Iterator<Item = &AxlePlacement> + '_ {
        self.axles.iter().filter(|a| a.on_span)
    }
}

/// Analysis context for one span crossed by one train at one increment.
#[derive(Debug, Clone)]
pub struct MovingLoadAnalysis {
    train: AxleTrain,
    sweep: PositionSweep,
}

impl MovingLoadAnalysis {
    /// Cooper E-80 over `span_ft`, swept in steps of `increment_ft`.
    pub fn new(span_ft: f64, increment_ft: f64) -> CalcResult<Self> {
        let train = AxleTrain::build_extended(span_ft)?;
        let sweep = PositionSweep::for_train(&train, increment_ft)?;
        Ok(MovingLoadAnalysis { train, sweep })
    }

    /// Any axle pattern over `span_ft`.
    pub fn with_pattern(pattern: &AxlePattern, span_ft: f64, increment_ft: f64) -> CalcResult<Self> {
        let train = AxleTrain::from_pattern(pattern, span_ft)?;
        let sweep = PositionSweep::for_train(&train, increment_ft)?;
        Ok(MovingLoadAnalysis { train, sweep })
    }

    /// Cooper E-80 over `span_ft` with the increment taken from settings.
    pub fn from_settings(span_ft: f64, settings: &AnalysisSettings) -> CalcResult<Self> {
        settings.validate()?;
        Self::new(span_ft, settings.increment_ft())
    }

    /// Span length (ft)
    pub fn span_ft(&self) -> f64 {
        self.train.span_ft()
    }

    /// The extended train
    pub fn train(&self) -> &AxleTrain {
        &self.train
    }

    /// The position sweep
    pub fn sweep(&self) -> &PositionSweep {
        &self.sweep
    }

    /// Governing moment at `x_ft`
    pub fn max_moment(&self, x_ft: f64, factors: DynamicFactors) -> CalcResult<EnvelopeResult> {
        envelope::max_moment(self.span_ft(), x_ft, &self.train, self.sweep.positions(), factors)
    }

    /// Governing shear at `x_ft`
    pub fn max_shear(&self, x_ft: f64, factors: DynamicFactors) -> CalcResult<EnvelopeResult> {
        envelope::max_shear(self.span_ft(), x_ft, &self.train, self.sweep.positions(), factors)
    }

    /// Governing moment and shear at `x_ft`
    pub fn envelope(&self, x_ft: f64, factors: DynamicFactors) -> CalcResult<PointEnvelope> {
        envelope::envelope(self.span_ft(), x_ft, &self.train, self.sweep.positions(), factors)
    }

    /// Maximum moment at `n + 1` evenly spaced points
    pub fn moment_profile(&self, n: usize, factors: DynamicFactors) -> CalcResult<ProfileResult> {
        profile::moment_profile(self.span_ft(), n, &self.train, self.sweep.positions(), factors)
    }

    /// Maximum shear at `n + 1` evenly spaced points
    pub fn shear_profile(&self, n: usize, factors: DynamicFactors) -> CalcResult<ProfileResult> {
        profile::shear_profile(self.span_ft(), n, &self.train, self.sweep.positions(), factors)
    }

    /// Train layout at the position governing moment at `x_ft`
    pub fn moment_train_position(
        &self,
        x_ft: f64,
        factors: DynamicFactors,
    ) -> CalcResult<GoverningPlacement> {
        let envelope = self.max_moment(x_ft, factors)?;
        Ok(self.place(envelope))
    }

    /// Train layout at the position governing shear at `x_ft`
    pub fn shear_train_position(
        &self,
        x_ft: f64,
        factors: DynamicFactors,
    ) -> CalcResult<GoverningPlacement> {
        let envelope = self.max_shear(x_ft, factors)?;
        Ok(self.place(envelope))
    }

    fn place(&self, envelope: EnvelopeResult) -> GoverningPlacement {
        GoverningPlacement {
            envelope,
            axles: self.train.placements(envelope.position_ft),
        }
    }
}
