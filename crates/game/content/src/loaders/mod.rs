//! Content loaders for reading compendium data from files.
//!
//! This module converts TOML/RON files into core tables and content catalogs.

pub mod factory;
pub mod species;
pub mod tables;

pub use factory::{Compendium, ContentFactory};
pub use species::SpeciesLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
