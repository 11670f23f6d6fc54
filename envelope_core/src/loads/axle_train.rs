//! Span-Specific Axle Trains
//!
//! An [`AxleTrain`] is a base [`AxlePattern`] extended with trailing axles so
//! that it loads every point the train can occupy while crossing a span of a
//! given length. Each span gets its own copy; the shared pattern is never
//! touched.
//!
//! The cumulative offset of every axle from the lead axle is computed once at
//! construction, so response evaluation is a single pass over the axles.
//!
//! ## Example
//! ```rust
//! use envelope_core::loads::AxleTrain;
//!
//! let train = AxleTrain::build_extended(100.0).unwrap();
//! assert_eq!(train.appended_axles(), 100);
//! assert_eq!(train.total_length_ft(), 209.5);
//! assert_eq!(train.cumulative_offset(1), 8.0);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::pattern::{Axle, AxlePattern, COOPER_E80};
use crate::errors::{require_positive, CalcResult};

/// Extended axle train for one span length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxleTrain {
    /// Span the train was extended to cover (ft)
    span_ft: f64,
    /// Base axles followed by appended trailing axles
    axles: Vec<Axle>,
    /// Distance from the lead axle to each axle (ft), same order as `axles`
    offsets_ft: Vec<f64>,
    /// Number of axles taken from the base pattern
    base_axle_count: usize,
    /// Length of the base pattern alone (ft)
    base_length_ft: f64,
}

/// Where one axle sits for a given train position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxlePlacement {
    /// Index in the train (0 = lead axle)
    pub index: usize,
    /// Axle load (kips)
    pub load_kips: f64,
    /// Axle coordinate along the span (ft); outside `0..span` when off the beam
    pub coordinate_ft: f64,
    /// Whether the axle is strictly between the supports
    pub on_span: bool,
}

impl AxleTrain {
    /// Extend the Cooper E-80 reference pattern to cover `span_ft`.
    pub fn build_extended(span_ft: f64) -> CalcResult<Self> {
        Self::from_pattern(&COOPER_E80, span_ft)
    }

    /// Extend an arbitrary pattern to cover `span_ft`.
    ///
    /// Trailing axles are appended one at a time until the added length is at
    /// least the span. The loop stops at the first length meeting the bound.
    pub fn from_pattern(pattern: &AxlePattern, span_ft: f64) -> CalcResult<Self> {
        require_positive("span_ft", span_ft, "Span must be a finite positive length")?;
        pattern.validate()?;

        let base_length_ft = pattern.base_length_ft();
        let mut axles = pattern.axles.clone();
        let base_axle_count = axles.len();

        let mut extension_ft = 0.0;
        while extension_ft < span_ft {
            axles.push(pattern.trailing);
            extension_ft += pattern.trailing.spacing_ft;
        }

        let offsets_ft = axles
            .iter()
            .scan(0.0, |offset, axle| {
                *offset += axle.spacing_ft;
                Some(*offset)
            })
            .collect();

        let train = AxleTrain {
            span_ft,
            axles,
            offsets_ft,
            base_axle_count,
            base_length_ft,
        };

        debug!(
            "{}: appended {} trailing axles for {:.2} ft span ({} axles, {:.2} ft long)",
            pattern.name,
            train.appended_axles(),
            span_ft,
            train.axle_count(),
            train.total_length_ft()
        );

        Ok(train)
    }

    /// Sum of spacings for axles `0..=j`: distance from the lead axle to axle `j` (ft).
    ///
    /// # Panics
    ///
    /// Panics if `j >= self.axle_count()`.
    pub fn cumulative_offset(&self, j: usize) -> f64 {
        self.offsets_ft[j]
    }

    /// Span this train was extended for (ft)
    pub fn span_ft(&self) -> f64 {
        self.span_ft
    }

    /// All axles, lead first
    pub fn axles(&self) -> &[Axle] {
        &self.axles
    }

    /// Cumulative offsets, one per axle
    pub fn offsets_ft(&self) -> &[f64] {
        &self.offsets_ft
    }

    /// Iterate axles with their cumulative offsets
    pub fn iter(&self) -> impl Iterator<Item = (&Axle, f64)> + '_ {
        self.axles.iter().zip(self.offsets_ft.iter().copied())
    }

    /// Total number of axles including appended ones
    pub fn axle_count(&self) -> usize {
        self.axles.len()
    }

    /// Number of axles from the base pattern
    pub fn base_axle_count(&self) -> usize {
        self.base_axle_count
    }

    /// Number of trailing axles appended for this span
    pub fn appended_axles(&self) -> usize {
        self.axles.len() - self.base_axle_count
    }

    /// Length of the base pattern alone (ft)
    pub fn base_length_ft(&self) -> f64 {
        self.base_length_ft
    }

    /// Distance from the lead axle to the last axle (ft)
    pub fn total_length_ft(&self) -> f64 {
        self.offsets_ft.last().copied().unwrap_or(0.0)
    }

    /// Length added by the trailing axles (ft)
    pub fn extension_length_ft(&self) -> f64 {
        self.total_length_ft() - self.base_length_ft
    }

    /// Sum of all axle loads (kips)
    pub fn total_load_kips(&self) -> f64 {
        self.axles.iter().map(|axle| axle.load_kips).sum()
    }

    /// Locate every axle for a train position.
    ///
    /// The coordinate is `span + position - offset`, the same distance the
    /// response calculation measures; axles are on-span when strictly inside
    /// the supports.
    pub fn placements(&self, position_ft: f64) -> Vec<AxlePlacement> {
        let span = self.span_ft;
        self.iter()
            .enumerate()
            .map(|(index, (axle, offset))| {
                let a = span + position_ft - offset;
                let b = span - a;
                AxlePlacement {
                    index,
                    load_kips: axle.load_kips,
                    coordinate_ft: a,
                    on_span: 0.0 < b && b < span,
                }
            })
            .collect()
    }
}
