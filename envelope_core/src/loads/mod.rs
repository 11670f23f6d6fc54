//! Moving axle loads
//!
//! This module describes the train that crosses the span.
//!
//! # Overview
//!
//! - [`Axle`] - A single concentrated axle load and its spacing to the axle ahead
//! - [`AxlePattern`] - A named base layout plus the trailing axle used to extend it
//! - [`COOPER_E80`] - The Cooper E-80 reference pattern (19 axles, 8 kip/ft trailing load)
//! - [`AxleTrain`] - A pattern extended to cover one particular span
//!
//! # Example
//!
//! ```
//! use envelope_core::loads::{AxleTrain, COOPER_E80};
//!
//! let train = AxleTrain::build_extended(60.0).unwrap();
//! assert_eq!(train.base_length_ft(), COOPER_E80.base_length_ft());
//! assert!(train.extension_length_ft() >= 60.0);
//! ```

pub mod axle_train;
pub mod pattern;

pub use axle_train::{AxlePlacement, AxleTrain};
pub use pattern::{Axle, AxlePattern, COOPER_E80};
