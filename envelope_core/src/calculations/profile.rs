//! Nth-Point Envelope Profiles
//!
//! Repeats the point envelope at `n + 1` evenly spaced points
//! `x_i = i * span / n` to trace the maximum moment or shear curve along the
//! span. Only the amplified magnitude is kept per point.
//!
//! Cost is `O(n * positions * axles)`; this is the most expensive query in
//! the engine. Build the train and sweep once per span and reuse them, as
//! [`MovingLoadAnalysis`](super::moving_load::MovingLoadAnalysis) does.
//!
//! With the `parallel` feature the evaluation points are mapped with rayon.
//! Each point still reduces sequentially, so results are identical.

use log::trace;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::envelope::{check_train_span, max_moment, max_shear, DynamicFactors, EnvelopeResult};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::loads::AxleTrain;

/// One sampled point of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Evaluation point (ft from left support)
    pub x_ft: f64,
    /// Amplified maximum at this point (kip-ft or kips)
    pub max_value: f64,
}

/// Maximum response at each nth point, left support to right support.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileResult {
    /// Sampled points in increasing `x_ft`
    pub points: Vec<ProfilePoint>,
}

impl ProfileResult {
    /// Number of sampled points (`n + 1`)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if nothing was sampled
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the sampled points
    pub fn iter(&self) -> std::slice::Iter<'_, ProfilePoint> {
        self.points.iter()
    }

    /// Point with the largest value (first one on ties)
    pub fn peak(&self) -> Option<&ProfilePoint> {
        self.points.iter().fold(None, |best, point| match best {
            Some(b) if point.max_value <= b.max_value => Some(b),
            _ => Some(point),
        })
    }

    /// `(x, value)` pairs, the shape plotting code consumes
    pub fn as_pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x_ft, p.max_value)).collect()
    }
}

/// `n + 1` evenly spaced points from 0 to `span_ft` inclusive.
///
/// The last point is pinned to the span so rounding in `n * span / n` can
/// never push it outside the beam.
pub fn evaluation_points(span_ft: f64, n: usize) -> CalcResult<Vec<f64>> {
    require_positive("span_ft", span_ft, "Span must be a finite positive length")?;
    if n == 0 {
        return Err(CalcError::invalid_parameter(
            "n",
            "0",
            "Number of span divisions must be at least 1",
        ));
    }
    Ok((0..=n)
        .map(|i| (i as f64 * span_ft / n as f64).min(span_ft))
        .collect())
}

fn sweep_points<F>(xs: Vec<f64>, point_envelope: F) -> CalcResult<ProfileResult>
where
    F: Fn(f64) -> CalcResult<EnvelopeResult> + Sync,
{
    let sample = |x_ft: f64| -> CalcResult<ProfilePoint> {
        let result = point_envelope(x_ft)?;
        trace!(
            "profile x = {:.3} ft: {:.3} (train at {:.3} ft)",
            x_ft,
            result.max_value,
            result.position_ft
        );
        Ok(ProfilePoint {
            x_ft,
            max_value: result.max_value,
        })
    };

    #[cfg(feature = "parallel")]
    let points = xs.into_par_iter().map(sample).collect::<CalcResult<Vec<_>>>()?;
    #[cfg(not(feature = "parallel"))]
    let points = xs.into_iter().map(sample).collect::<CalcResult<Vec<_>>>()?;

    Ok(ProfileResult { points })
}

/// Maximum moment at each of the `n + 1` nth points.
pub fn moment_profile(
    span_ft: f64,
    n: usize,
    train: &AxleTrain,
    positions: &[f64],
    factors: DynamicFactors,
) -> CalcResult<ProfileResult> {
    let xs = evaluation_points(span_ft, n)?;
    check_train_span(span_ft, train)?;
    factors.validate()?;
    sweep_points(xs, |x| max_moment(span_ft, x, train, positions, factors))
}

/// Maximum shear at each of the `n + 1` nth points.
pub fn shear_profile(
    span_ft: f64,
    n: usize,
    train: &AxleTrain,
    positions: &[f64],
    factors: DynamicFactors,
) -> CalcResult<ProfileResult> {
    let xs = evaluation_points(span_ft, n)?;
    check_train_span(span_ft, train)?;
    factors.validate()?;
    sweep_points(xs, |x| max_shear(span_ft, x, train, positions, factors))
}
