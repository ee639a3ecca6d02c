//! Capture probability calculation.
//!
//! This module provides pure functions for estimating the chance that a single
//! throw captures a creature. All logic is deterministic and side-effect free;
//! identical inputs always produce identical output.
//!
//! # Architecture
//!
//! - **Context**: [`CatchAttempt`] bundles the target and encounter state
//! - **Devices**: [`CaptureDevice`] resolves each ball's multiplier rule
//! - **Formula**: [`compute_catch_probability`] runs the capture threshold formula
//!
//! Multiplier tables are read through [`TablesOracle`](crate::env::TablesOracle).

pub mod context;
pub mod device;
pub mod formula;

pub use context::{CatchAttempt, EncounterContext, Target};
pub use device::{CaptureDevice, DeviceMultiplier, SpecialDevice};
pub use formula::{
    CatchBreakdown, CatchOutcome, catch_value, compute_catch_probability, explain_catch,
    probability_from_catch_value,
};
