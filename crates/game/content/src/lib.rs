//! Data-driven content definitions and loaders.
//!
//! This crate houses static compendium content and provides loaders for RON/TOML data files:
//! - Capture-device and status-condition multiplier tables (TOML)
//! - Species catalog with base catch rates (RON)
//!
//! Content is read-only input to the calculator in `compendium-core`.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogError, SpeciesCatalog, SpeciesEntry};

#[cfg(feature = "loaders")]
pub use loaders::{Compendium, ContentFactory, LoadResult, SpeciesLoader, TablesLoader};
