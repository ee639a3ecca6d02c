//! Species catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{SpeciesCatalog, SpeciesEntry};
use crate::loaders::{LoadResult, read_file};

/// Species catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SpeciesCatalogRon {
    species: Vec<(u32, String, u32)>, // (number, name, base_catch_rate)
}

/// Loader for the species catalog from RON files.
pub struct SpeciesLoader;

impl SpeciesLoader {
    /// Load species catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the species list
    ///
    /// # Returns
    ///
    /// Returns a validated SpeciesCatalog ordered by number.
    pub fn load(path: &Path) -> LoadResult<SpeciesCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid species file {}: {}", path.display(), e))?;

        tracing::debug!(
            species = catalog.len(),
            "Loaded species catalog from {}",
            path.display()
        );

        Ok(catalog)
    }

    /// Parse and validate a species catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<SpeciesCatalog> {
        let data: SpeciesCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species RON: {}", e))?;

        let entries = data
            .species
            .into_iter()
            .map(|(number, name, rate)| SpeciesEntry::new(number, name, rate))
            .collect();

        Ok(SpeciesCatalog::new(entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tuple_rows() {
        let catalog = SpeciesLoader::parse(
            r#"(
                species: [
                    (25, "Pikachu", 190),
                    (1, "Bulbasaur", 45),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.iter().next().unwrap().name, "Bulbasaur");
        assert_eq!(catalog.find("pikachu").unwrap().base_catch_rate, 190);
    }

    #[test]
    fn validation_errors_are_reported() {
        let err = SpeciesLoader::parse(r#"(species: [(1, "Bulbasaur", 300)])"#).unwrap_err();

        assert!(err.to_string().contains("Bulbasaur"));
    }
}
