//! Content factory for loading compendium data from a directory.

use std::path::{Path, PathBuf};

use compendium_core::CatchTables;

use crate::catalog::SpeciesCatalog;
use crate::loaders::{LoadResult, SpeciesLoader, TablesLoader};

/// Everything the calculator front ends read from disk.
#[derive(Clone, Debug)]
pub struct Compendium {
    pub tables: CatchTables,
    pub species: SpeciesCatalog,
}

/// Content factory that loads compendium content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── tables.toml
/// └── species.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const TABLES_FILE: &'static str = "tables.toml";
    pub const SPECIES_FILE: &'static str = "species.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory of the data files bundled with this crate.
    pub fn bundled_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tables_path(&self) -> PathBuf {
        self.data_dir.join(Self::TABLES_FILE)
    }

    pub fn species_path(&self) -> PathBuf {
        self.data_dir.join(Self::SPECIES_FILE)
    }

    /// Load multiplier tables from `tables.toml`.
    pub fn load_tables(&self) -> LoadResult<CatchTables> {
        TablesLoader::load(&self.tables_path())
    }

    /// Load the species catalog from `species.ron`.
    pub fn load_species(&self) -> LoadResult<SpeciesCatalog> {
        SpeciesLoader::load(&self.species_path())
    }

    /// Load every content file.
    pub fn load_all(&self) -> LoadResult<Compendium> {
        Ok(Compendium {
            tables: self.load_tables()?,
            species: self.load_species()?,
        })
    }
}
