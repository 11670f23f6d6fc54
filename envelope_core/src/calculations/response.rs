//! Single-Position Structural Response
//!
//! Reactions, moment and shear at a point `x` of a simply-supported span for
//! one train position. Each axle is located by two distances:
//!
//! - `a = span + position - offset`
//! - `b = span - a`
//!
//! An axle is on-span only when strictly between the supports, so an axle
//! sitting exactly on a support line contributes nothing.
//!
//! ## Influence-Line Sums
//!
//! ```text
//! M(p) = (sum R2_j) * (L - x) - sum F_j * (a_j - x)   over on-span axles with a_j > x
//! V(p) = | sum R1_j - sum F_j |                       over on-span axles with a_j < x
//! ```
//!
//! The per-axle terms live on [`AxleGeometry`] so every entry point (single
//! point, train-position queries, nth-point sweeps) shares them.
//!
//! ## Example
//! ```rust
//! use envelope_core::calculations::response::evaluate;
//! use envelope_core::loads::AxleTrain;
//!
//! // Lead 40 kip axle alone at mid-span of a 10 ft beam
//! let train = AxleTrain::build_extended(10.0).unwrap();
//! let r = evaluate(10.0, 5.0, &train, -5.0);
//! assert_eq!(r.moment_kipft, 100.0); // PL/4
//! assert_eq!(r.shear_kips, 20.0);    // P/2
//! ```

use serde::{Deserialize, Serialize};

use crate::loads::AxleTrain;

/// One axle's distances from the supports for a given train position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxleGeometry {
    /// `span + position - offset` (ft)
    pub a_ft: f64,
    /// `span - a` (ft)
    pub b_ft: f64,
}

impl AxleGeometry {
    /// Locate an axle with cumulative offset `offset_ft` at train position `position_ft`.
    #[inline]
    pub fn locate(span_ft: f64, position_ft: f64, offset_ft: f64) -> Self {
        let a_ft = span_ft + position_ft - offset_ft;
        AxleGeometry {
            a_ft,
            b_ft: span_ft - a_ft,
        }
    }

    /// `0 < b < L`
    #[inline]
    pub fn on_span(&self, span_ft: f64) -> bool {
        0.0 < self.b_ft && self.b_ft < span_ft
    }

    /// R1 contribution: `F * b / L` when `0 < b < L`
    #[inline]
    pub fn reaction_left(&self, load_kips: f64, span_ft: f64) -> f64 {
        if self.on_span(span_ft) {
            load_kips * self.b_ft / span_ft
        } else {
            0.0
        }
    }

    /// R2 contribution: `F * a / L` when `0 < a < L`
    ///
    /// Guarded on `a` rather than `b`; the two tests agree except in the last
    /// bit at a support line, and both are kept as written.
    #[inline]
    pub fn reaction_right(&self, load_kips: f64, span_ft: f64) -> f64 {
        if 0.0 < self.a_ft && self.a_ft < span_ft {
            load_kips * self.a_ft / span_ft
        } else {
            0.0
        }
    }

    /// Direct moment term `F * (a - x)` for on-span axles with `a > x`
    #[inline]
    pub fn moment_term(&self, load_kips: f64, span_ft: f64, x_ft: f64) -> f64 {
        if self.on_span(span_ft) && self.a_ft > x_ft {
            load_kips * (self.a_ft - x_ft)
        } else {
            0.0
        }
    }

    /// Shear term `F` for on-span axles with `a < x`
    #[inline]
    pub fn shear_term(&self, load_kips: f64, span_ft: f64, x_ft: f64) -> f64 {
        if self.on_span(span_ft) && self.a_ft < x_ft {
            load_kips
        } else {
            0.0
        }
    }
}

/// Full response for one train position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionResponse {
    /// Train position evaluated (ft)
    pub position_ft: f64,
    /// Left support reaction (kips)
    pub reaction_left_kips: f64,
    /// Right support reaction (kips)
    pub reaction_right_kips: f64,
    /// Moment at the evaluation point (kip-ft)
    pub moment_kipft: f64,
    /// Shear magnitude at the evaluation point (kips)
    pub shear_kips: f64,
}

/// Evaluate reactions, moment and shear at `x_ft` with the train at `position_ft`.
pub fn evaluate(span_ft: f64, x_ft: f64, train: &AxleTrain, position_ft: f64) -> PositionResponse {
    let mut r1 = 0.0;
    let mut r2 = 0.0;
    let mut m = 0.0;
    let mut v = 0.0;

    for (axle, offset) in train.iter() {
        let g = AxleGeometry::locate(span_ft, position_ft, offset);
        let load = axle.load_kips;
        m += g.moment_term(load, span_ft, x_ft);
        v += g.shear_term(load, span_ft, x_ft);
        r1 += g.reaction_left(load, span_ft);
        r2 += g.reaction_right(load, span_ft);
    }

    PositionResponse {
        position_ft,
        reaction_left_kips: r1,
        reaction_right_kips: r2,
        moment_kipft: r2 * (span_ft - x_ft) - m,
        shear_kips: (r1 - v).abs(),
    }
}

/// Moment at `x_ft` only. Same sums as [`evaluate`], skipping the shear terms.
pub fn moment_at(span_ft: f64, x_ft: f64, train: &AxleTrain, position_ft: f64) -> f64 {
    let mut r2 = 0.0;
    let mut m = 0.0;
    for (axle, offset) in train.iter() {
        let g = AxleGeometry::locate(span_ft, position_ft, offset);
        m += g.moment_term(axle.load_kips, span_ft, x_ft);
        r2 += g.reaction_right(axle.load_kips, span_ft);
    }
    r2 * (span_ft - x_ft) - m
}

/// Shear magnitude at `x_ft` only. Same sums as [`evaluate`], skipping the moment terms.
pub fn shear_at(span_ft: f64, x_ft: f64, train: &AxleTrain, position_ft: f64) -> f64 {
    let mut r1 = 0.0;
    let mut v = 0.0;
    for (axle, offset) in train.iter() {
        let g = AxleGeometry::locate(span_ft, position_ft, offset);
        v += g.shear_term(axle.load_kips, span_ft, x_ft);
        r1 += g.reaction_left(axle.load_kips, span_ft);
    }
    (r1 - v).abs()
}
