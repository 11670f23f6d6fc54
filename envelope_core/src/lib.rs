//! # envelope_core - Moving-Load Envelope Engine
//!
//! `envelope_core` computes envelope values of bending moment and shear on a
//! simply-supported span crossed by a train of discrete axle loads (Cooper
//! E-80 by default). For a chosen cross-section it answers: as the train
//! passes, what is the largest moment and shear there, and where is the train
//! when it happens?
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable trains and sweeps
//! - **JSON-First**: Inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use envelope_core::{DynamicFactors, MovingLoadAnalysis};
//!
//! // 100 ft span, train advanced 1 ft per step
//! let analysis = MovingLoadAnalysis::new(100.0, 1.0)?;
//! let result = analysis.envelope(50.0, DynamicFactors::new(0.3, 1.0))?;
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! println!("{}", json);
//! # Ok::<(), envelope_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`loads`] - Axle patterns and span-specific extended trains
//! - [`calculations`] - Position sweep, response, envelopes and profiles
//! - [`settings`] - Engine defaults persisted as JSON
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod loads;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    DynamicFactors, EnvelopeResult, EvaluationPoint, MovingLoadAnalysis, PointEnvelope,
    PositionSweep, ProfileResult,
};
pub use errors::{CalcError, CalcResult};
pub use loads::{Axle, AxlePattern, AxleTrain, COOPER_E80};
pub use settings::AnalysisSettings;
