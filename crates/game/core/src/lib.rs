//! Deterministic catch rules shared by the compendium tools.
//!
//! `compendium-core` defines the capture-probability calculator and the
//! multiplier tables it reads. Everything here is pure: no I/O, no shared
//! state, safe to call from any number of threads. Content loading lives in
//! `compendium-content`.
pub mod catch;
pub mod config;
pub mod env;
pub mod error;

pub use catch::{
    CaptureDevice, CatchAttempt, CatchBreakdown, CatchOutcome, DeviceMultiplier,
    EncounterContext, SpecialDevice, Target, compute_catch_probability, explain_catch,
};
pub use config::CatchConfig;
pub use env::{CatchTables, MultiplierEntry, MultiplierTable, TableError, TablesOracle};
pub use error::CompendiumError;
