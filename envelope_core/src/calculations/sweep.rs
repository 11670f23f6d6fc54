//! Train Position Sweep
//!
//! Discretizes the crossing of the span into train positions. A position `p`
//! is how far the train's reference edge has advanced past the left support;
//! the sweep runs from `-span` (lead axle at the far support) to the total
//! train length (last axle leaving), inclusive, in steps of `increment`.
//!
//! The number of positions is `floor((train_length + span) / increment) + 1`
//! and scales every downstream calculation, so the increment is the main
//! accuracy/speed trade-off. Sweeps longer than [`MAX_POSITIONS`] are
//! rejected as an invalid increment rather than allocated.
//!
//! Each position is computed from its index, not by repeatedly adding the
//! increment. With increments that are not exact binary fractions (1 inch =
//! 1/12 ft) the positions, and so a reported governing position, can differ
//! in the last bits from a running-sum sweep.
//!
//! ## Example
//! ```rust
//! use envelope_core::calculations::sweep::PositionSweep;
//! use envelope_core::loads::AxleTrain;
//!
//! let train = AxleTrain::build_extended(100.0).unwrap();
//! let sweep = PositionSweep::for_train(&train, 1.0).unwrap();
//!
//! assert_eq!(sweep.first(), Some(-100.0));
//! assert_eq!(sweep.len(), 310); // (209.5 + 100) / 1 -> 309 steps, 310 samples
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::loads::AxleTrain;

/// Largest number of train positions a single sweep may hold.
pub const MAX_POSITIONS: usize = 10_000_000;

/// Ordered train positions for one (span, increment) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSweep {
    /// Span swept over (ft)
    span_ft: f64,
    /// Step between positions (ft)
    increment_ft: f64,
    /// Upper bound on positions: total train length (ft)
    bound_ft: f64,
    /// Positions from `-span_ft` upward (ft)
    positions: Vec<f64>,
}

impl PositionSweep {
    /// Generate the sweep for a span crossed by the extended Cooper E-80 train.
    pub fn generate(span_ft: f64, increment_ft: f64) -> CalcResult<Self> {
        let train = AxleTrain::build_extended(span_ft)?;
        Self::for_train(&train, increment_ft)
    }

    /// Generate the sweep for an already extended train.
    ///
    /// Positions are `-span + i * increment` for `i = 0, 1, ...` while they do
    /// not exceed the train length. Computing each position from its index
    /// keeps long sweeps from accumulating rounding drift.
    pub fn for_train(train: &AxleTrain, increment_ft: f64) -> CalcResult<Self> {
        require_positive(
            "increment_ft",
            increment_ft,
            "Increment must be a finite positive length",
        )?;

        let span_ft = train.span_ft();
        let bound_ft = train.total_length_ft();
        let count = Self::expected_len(span_ft, bound_ft, increment_ft)
            .filter(|&n| n <= MAX_POSITIONS)
            .ok_or_else(|| {
                CalcError::invalid_parameter(
                    "increment_ft",
                    increment_ft.to_string(),
                    format!(
                        "Increment is too small: sweep would exceed {} train positions",
                        MAX_POSITIONS
                    ),
                )
            })?;

        let mut positions = Vec::with_capacity(count);
        for i in 0..=count {
            let p = -span_ft + i as f64 * increment_ft;
            if p > bound_ft {
                break;
            }
            positions.push(p);
        }

        debug!(
            "position sweep: {} positions from {:.3} to {:.3} ft (step {:.4} ft)",
            positions.len(),
            -span_ft,
            bound_ft,
            increment_ft
        );

        Ok(PositionSweep {
            span_ft,
            increment_ft,
            bound_ft,
            positions,
        })
    }

    /// Closed-form sample count `floor((bound + span) / increment) + 1`.
    ///
    /// `None` when the count is not finite or does not fit in `usize`.
    pub fn expected_len(span_ft: f64, bound_ft: f64, increment_ft: f64) -> Option<usize> {
        let steps = ((bound_ft + span_ft) / increment_ft).floor();
        if !steps.is_finite() || steps < 0.0 || steps >= usize::MAX as f64 {
            return None;
        }
        (steps as usize).checked_add(1)
    }

    /// Positions in sweep order
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the sweep holds no positions
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// First position (ft)
    pub fn first(&self) -> Option<f64> {
        self.positions.first().copied()
    }

    /// Last position (ft)
    pub fn last(&self) -> Option<f64> {
        self.positions.last().copied()
    }

    /// Span swept over (ft)
    pub fn span_ft(&self) -> f64 {
        self.span_ft
    }

    /// Step between positions (ft)
    pub fn increment_ft(&self) -> f64 {
        self.increment_ft
    }

    /// Largest position allowed (ft)
    pub fn bound_ft(&self) -> f64 {
        self.bound_ft
    }
}

impl AsRef<[f64]> for PositionSweep {
    fn as_ref(&self) -> &[f64] {
        &self.positions
    }
}
