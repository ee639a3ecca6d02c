//! Species catalog.
//!
//! The catalog is the browsable list of creatures and the source of each
//! target's base catch rate. Names are unique ignoring ASCII case, numbers are
//! unique, and every catch rate is in `1..=255`.

use compendium_core::Target;

/// A single species row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesEntry {
    /// National catalog number.
    pub number: u32,
    pub name: String,
    pub base_catch_rate: u32,
}

impl SpeciesEntry {
    pub fn new(number: u32, name: impl Into<String>, base_catch_rate: u32) -> Self {
        Self {
            number,
            name: name.into(),
            base_catch_rate,
        }
    }

    /// Converts the entry into a calculator target.
    pub fn target(&self) -> Target {
        Target::new(self.name.clone(), self.base_catch_rate)
    }
}

/// Errors raised when assembling a [`SpeciesCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("species #{number} has an empty name")]
    EmptyName { number: u32 },

    #[error("species number {number} is used by both '{first}' and '{second}'")]
    DuplicateNumber {
        number: u32,
        first: String,
        second: String,
    },

    #[error("species name '{name}' appears more than once")]
    DuplicateName { name: String },

    #[error("species '{name}' has base catch rate {rate} (must be within 1..=255)")]
    CatchRateOutOfRange { name: String, rate: u32 },
}

/// Validated, number-ordered species list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpeciesCatalog {
    entries: Vec<SpeciesEntry>,
}

impl SpeciesCatalog {
    pub const MIN_CATCH_RATE: u32 = 1;
    pub const MAX_CATCH_RATE: u32 = 255;

    /// Validates `entries` and sorts them by number.
    pub fn new(mut entries: Vec<SpeciesEntry>) -> Result<Self, CatalogError> {
        entries.sort_by_key(|entry| entry.number);

        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName {
                    number: entry.number,
                });
            }
            if !(Self::MIN_CATCH_RATE..=Self::MAX_CATCH_RATE).contains(&entry.base_catch_rate) {
                return Err(CatalogError::CatchRateOutOfRange {
                    name: entry.name.clone(),
                    rate: entry.base_catch_rate,
                });
            }
            if index > 0 && entries[index - 1].number == entry.number {
                return Err(CatalogError::DuplicateNumber {
                    number: entry.number,
                    first: entries[index - 1].name.clone(),
                    second: entry.name.clone(),
                });
            }
            if entries[..index]
                .iter()
                .any(|earlier| earlier.name.eq_ignore_ascii_case(&entry.name))
            {
                return Err(CatalogError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Looks up a species by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&SpeciesEntry> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn by_number(&self, number: u32) -> Option<&SpeciesEntry> {
        self.entries
            .binary_search_by_key(&number, |entry| entry.number)
            .ok()
            .map(|index| &self.entries[index])
    }

    /// Case-insensitive substring search, in catalog order.
    pub fn search<'a>(&'a self, fragment: &str) -> impl Iterator<Item = &'a SpeciesEntry> + 'a {
        let needle = fragment.trim().to_ascii_lowercase();
        self.entries
            .iter()
            .filter(move |entry| entry.name.to_ascii_lowercase().contains(&needle))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
