//! Moving-Load Envelope at a Point
//!
//! Sweeps the train across the span and keeps the governing (algebraically
//! largest) moment or shear at one evaluation point, together with the train
//! position that produced it. Ties go to the first position in sweep order.
//! The governing value is then amplified by the dynamic factors
//! `(1 + impact) * distribution`; the position is reported unscaled.
//!
//! ## Example
//! ```rust
//! use envelope_core::calculations::envelope::{max_moment, DynamicFactors};
//! use envelope_core::calculations::sweep::PositionSweep;
//! use envelope_core::loads::AxleTrain;
//!
//! let train = AxleTrain::build_extended(100.0).unwrap();
//! let sweep = PositionSweep::for_train(&train, 1.0).unwrap();
//!
//! let m = max_moment(100.0, 50.0, &train, sweep.positions(), DynamicFactors::default()).unwrap();
//! assert!((m.max_value - 12876.0).abs() < 1e-6);
//! assert_eq!(m.position_ft, 19.0);
//! ```

use serde::{Deserialize, Serialize};

use super::response::{moment_at, shear_at};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::loads::AxleTrain;

/// Dynamic amplification applied to the governing static response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicFactors {
    /// Impact factor (0.0 = static)
    pub impact_factor: f64,
    /// Live load distribution factor (1.0 = full load to this member)
    pub distribution_factor: f64,
}

impl Default for DynamicFactors {
    fn default() -> Self {
        DynamicFactors {
            impact_factor: 0.0,
            distribution_factor: 1.0,
        }
    }
}

impl DynamicFactors {
    /// Create a factor pair
    pub fn new(impact_factor: f64, distribution_factor: f64) -> Self {
        DynamicFactors {
            impact_factor,
            distribution_factor,
        }
    }

    /// Combined multiplier `(1 + impact) * distribution`
    pub fn amplification(&self) -> f64 {
        (1.0 + self.impact_factor) * self.distribution_factor
    }

    /// Scale a static response. Applied as `value * (1 + impact) * distribution`.
    pub fn apply(&self, value: f64) -> f64 {
        value * (1.0 + self.impact_factor) * self.distribution_factor
    }

    /// Impact must be finite and greater than -1; distribution must be finite.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.impact_factor.is_finite() && self.impact_factor > -1.0) {
            return Err(CalcError::invalid_parameter(
                "impact_factor",
                self.impact_factor.to_string(),
                "Impact factor must be finite and greater than -1",
            ));
        }
        if !self.distribution_factor.is_finite() {
            return Err(CalcError::invalid_parameter(
                "distribution_factor",
                self.distribution_factor.to_string(),
                "Distribution factor must be finite",
            ));
        }
        Ok(())
    }
}

/// Governing response at a point and the train position causing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeResult {
    /// Amplified maximum (kip-ft for moment, kips for shear)
    pub max_value: f64,
    /// Train position of the maximum, unscaled (ft)
    pub position_ft: f64,
}

/// Moment and shear envelopes at the same point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointEnvelope {
    /// Evaluation point (ft from left support)
    pub x_ft: f64,
    /// Governing moment (kip-ft)
    pub moment: EnvelopeResult,
    /// Governing shear (kips)
    pub shear: EnvelopeResult,
}

/// The train must have been extended for exactly this span.
pub(crate) fn check_train_span(span_ft: f64, train: &AxleTrain) -> CalcResult<()> {
    require_positive("span_ft", span_ft, "Span must be a finite positive length")?;
    if span_ft != train.span_ft() {
        return Err(CalcError::invalid_parameter(
            "span_ft",
            span_ft.to_string(),
            format!(
                "Train was extended for a {} ft span; rebuild it for this span",
                train.span_ft()
            ),
        ));
    }
    Ok(())
}

/// Check span, train and evaluation point before any sweeping.
fn validate_point(span_ft: f64, x_ft: f64, train: &AxleTrain) -> CalcResult<()> {
    check_train_span(span_ft, train)?;
    if !(0.0..=span_ft).contains(&x_ft) {
        return Err(CalcError::invalid_parameter(
            "x_ft",
            x_ft.to_string(),
            format!("Evaluation point must lie within the span [0, {}]", span_ft),
        ));
    }
    Ok(())
}

/// First position holding the largest response, as `(value, position)`.
fn governing<F>(operation: &str, positions: &[f64], response: F) -> CalcResult<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    positions
        .iter()
        .map(|&p| (response(p), p))
        .fold(None, |best: Option<(f64, f64)>, (value, p)| match best {
            Some((best_value, _)) if value <= best_value => best,
            _ => Some((value, p)),
        })
        .ok_or_else(|| {
            CalcError::degenerate_result(operation, "Position sweep contains no train positions")
        })
}

fn check_inputs(
    span_ft: f64,
    x_ft: f64,
    train: &AxleTrain,
    factors: &DynamicFactors,
) -> CalcResult<()> {
    validate_point(span_ft, x_ft, train)?;
    factors.validate()
}

/// Governing moment at `x_ft` over all `positions`.
pub fn max_moment(
    span_ft: f64,
    x_ft: f64,
    train: &AxleTrain,
    positions: &[f64],
    factors: DynamicFactors,
) -> CalcResult<EnvelopeResult> {
    check_inputs(span_ft, x_ft, train, &factors)?;
    let (value, position_ft) = governing("max_moment", positions, |p| {
        moment_at(span_ft, x_ft, train, p)
    })?;
    Ok(EnvelopeResult {
        max_value: factors.apply(value),
        position_ft,
    })
}

/// Governing shear at `x_ft` over all `positions`.
pub fn max_shear(
    span_ft: f64,
    x_ft: f64,
    train: &AxleTrain,
    positions: &[f64],
    factors: DynamicFactors,
) -> CalcResult<EnvelopeResult> {
    check_inputs(span_ft, x_ft, train, &factors)?;
    let (value, position_ft) = governing("max_shear", positions, |p| {
        shear_at(span_ft, x_ft, train, p)
    })?;
    Ok(EnvelopeResult {
        max_value: factors.apply(value),
        position_ft,
    })
}

/// Moment and shear envelopes at `x_ft` in one call.
pub fn envelope(
    span_ft: f64,
    x_ft: f64,
    train: &AxleTrain,
    positions: &[f64],
    factors: DynamicFactors,
) -> CalcResult<PointEnvelope> {
    Ok(PointEnvelope {
        x_ft,
        moment: max_moment(span_ft, x_ft, train, positions, factors)?,
        shear: max_shear(span_ft, x_ft, train, positions, factors)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::sweep::PositionSweep;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn setup(span: f64, increment: f64) -> (AxleTrain, PositionSweep) {
        let train = AxleTrain::build_extended(span).unwrap();
        let sweep = PositionSweep::for_train(&train, increment).unwrap();
        (train, sweep)
    }

    #[test]
    fn test_midspan_100ft() {
        let (train, sweep) = setup(100.0, 1.0);
        let f = DynamicFactors::default();

        let m = max_moment(100.0, 50.0, &train, sweep.positions(), f).unwrap();
        assert_relative_eq!(m.max_value, 12876.0, epsilon = 1e-6);
        assert_eq!(m.position_ft, 19.0);

        let v = max_shear(100.0, 50.0, &train, sweep.positions(), f).unwrap();
        assert_relative_eq!(v.max_value, 151.36, epsilon = 1e-6);
        assert_eq!(v.position_ft, -43.0);
    }

    #[test]
    fn test_short_span() {
        // One 80 kip driver at mid-span governs: PL/4 + neighbours
        let (train, sweep) = setup(10.0, 1.0);
        let e = envelope(10.0, 5.0, &train, sweep.positions(), DynamicFactors::default()).unwrap();
        assert_relative_eq!(e.moment.max_value, 200.0, epsilon = 1e-9);
        assert_eq!(e.moment.position_ft, 3.0);
        assert_relative_eq!(e.shear.max_value, 40.0, epsilon = 1e-9);
        assert_eq!(e.shear.position_ft, 3.0);
    }

    #[test]
    fn test_dynamic_factors_scale_value_not_position() {
        let (train, sweep) = setup(100.0, 1.0);
        let base = max_moment(100.0, 50.0, &train, sweep.positions(), DynamicFactors::default()).unwrap();
        let f = DynamicFactors::new(0.25, 0.5);
        let scaled = max_moment(100.0, 50.0, &train, sweep.positions(), f).unwrap();

        assert_eq!(scaled.position_ft, base.position_ft);
        assert_relative_eq!(scaled.max_value, base.max_value * 0.625, epsilon = 1e-9);
        assert_eq!(f.amplification(), 0.625);
    }

    #[test]
    fn test_supports_are_valid_points() {
        let (train, sweep) = setup(100.0, 1.0);
        let f = DynamicFactors::default();

        // Every moment at the right support is zero: first position wins
        let at_right = max_moment(100.0, 100.0, &train, sweep.positions(), f).unwrap();
        assert_eq!(at_right.max_value, 0.0);
        assert_eq!(at_right.position_ft, -100.0);

        let at_left = max_moment(100.0, 0.0, &train, sweep.positions(), f).unwrap();
        assert_abs_diff_eq!(at_left.max_value, 0.0, epsilon = 1e-9);

        let shear_left = max_shear(100.0, 0.0, &train, sweep.positions(), f).unwrap();
        assert_relative_eq!(shear_left.max_value, 569.6, epsilon = 1e-9);
        assert_eq!(shear_left.position_ft, -20.0);
    }

    #[test]
    fn test_idempotent() {
        let (train, sweep) = setup(73.0, 0.5);
        let f = DynamicFactors::new(0.3, 0.8);
        let a = envelope(73.0, 21.9, &train, sweep.positions(), f).unwrap();
        let b = envelope(73.0, 21.9, &train, sweep.positions(), f).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.moment.max_value.to_bits(), b.moment.max_value.to_bits());
    }

    #[test]
    fn test_tie_breaks_to_first_position() {
        let (train, _) = setup(10.0, 1.0);
        let positions = [-10.0, -10.0, 500.0];
        let v = max_shear(10.0, 5.0, &train, &positions, DynamicFactors::default()).unwrap();
        assert_eq!(v.max_value, 0.0);
        assert_eq!(v.position_ft, -10.0);

        let positions = [600.0, -10.0];
        let v = max_shear(10.0, 5.0, &train, &positions, DynamicFactors::default()).unwrap();
        assert_eq!(v.position_ft, 600.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let (train, sweep) = setup(100.0, 1.0);
        let p = sweep.positions();
        let f = DynamicFactors::default();

        let err = max_moment(100.0, -0.1, &train, p, f).unwrap_err();
        assert_eq!(err.field(), Some("x_ft"));
        let err = max_shear(100.0, 100.5, &train, p, f).unwrap_err();
        assert_eq!(err.field(), Some("x_ft"));
        let err = max_moment(0.0, 0.0, &train, p, f).unwrap_err();
        assert_eq!(err.field(), Some("span_ft"));

        let err = max_moment(100.0, 50.0, &train, p, DynamicFactors::new(-1.0, 1.0)).unwrap_err();
        assert_eq!(err.field(), Some("impact_factor"));
        let err = max_shear(100.0, 50.0, &train, p, DynamicFactors::new(-1.5, 1.0)).unwrap_err();
        assert_eq!(err.field(), Some("impact_factor"));
        let err = max_shear(100.0, 50.0, &train, p, DynamicFactors::new(0.0, f64::NAN)).unwrap_err();
        assert_eq!(err.field(), Some("distribution_factor"));
    }

    #[test]
    fn test_train_for_other_span_rejected() {
        // A 10 ft train is far too short to cover a 200 ft span
        let (short_train, short_sweep) = setup(10.0, 1.0);
        let f = DynamicFactors::default();

        let err = max_moment(200.0, 100.0, &short_train, short_sweep.positions(), f).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert_eq!(err.field(), Some("span_ft"));
        let err = max_shear(200.0, 100.0, &short_train, short_sweep.positions(), f).unwrap_err();
        assert_eq!(err.field(), Some("span_ft"));
        assert!(envelope(5.0, 2.5, &short_train, short_sweep.positions(), f).is_err());

        let (train, sweep) = setup(200.0, 1.0);
        let m = max_moment(200.0, 100.0, &train, sweep.positions(), f).unwrap();
        assert_relative_eq!(m.max_value, 47426.0, epsilon = 1e-6);
        assert_eq!(m.position_ft, -26.0);
    }

    #[test]
    fn test_empty_sweep_is_degenerate() {
        let (train, _) = setup(10.0, 1.0);
        let err = max_moment(10.0, 5.0, &train, &[], DynamicFactors::default()).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_RESULT");
    }
}
