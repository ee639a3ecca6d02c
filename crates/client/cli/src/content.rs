//! Content loading with fallbacks for the CLI.

use anyhow::Result;
use compendium_content::{Compendium, ContentFactory, SpeciesCatalog};
use compendium_core::CatchTables;

use crate::config::CliConfig;

/// Loads tables and species from the configured data directory.
///
/// Missing files are tolerated: tables fall back to the built-in set and the
/// catalog is left empty. Files that exist but fail to parse are errors.
pub fn load(config: &CliConfig) -> Result<Compendium> {
    let factory = ContentFactory::new(&config.data_dir);
    tracing::debug!("Loading content from {}", factory.data_dir().display());

    let tables = if factory.tables_path().exists() {
        factory.load_tables()?
    } else {
        tracing::warn!(
            "{} not found, using built-in tables",
            factory.tables_path().display()
        );
        CatchTables::standard()
    };

    let species = if factory.species_path().exists() {
        factory.load_species()?
    } else {
        tracing::warn!(
            "{} not found, species lookups are unavailable",
            factory.species_path().display()
        );
        SpeciesCatalog::default()
    };

    Ok(Compendium { tables, species })
}
