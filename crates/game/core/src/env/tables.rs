use crate::config::CatchConfig;

use super::TableError;

/// Oracle providing the static capture-device and status-condition tables.
///
/// Lookups are by exact name. A missing entry is not an error: callers fall
/// back to [`CatchConfig::DEFAULT_MULTIPLIER`].
pub trait TablesOracle: Send + Sync {
    fn ball_multiplier(&self, name: &str) -> Option<f64>;
    fn status_multiplier(&self, name: &str) -> Option<f64>;
}

/// A single `{ name, multiplier }` row.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiplierEntry {
    pub name: String,
    pub multiplier: f64,
}

impl MultiplierEntry {
    pub fn new(name: impl Into<String>, multiplier: f64) -> Self {
        Self {
            name: name.into(),
            multiplier,
        }
    }
}

/// Ordered name → multiplier table.
///
/// Order is preserved for display. On duplicate names the first entry wins;
/// [`validate`](Self::validate) rejects duplicates outright.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MultiplierTable {
    entries: Vec<MultiplierEntry>,
}

impl MultiplierTable {
    pub fn new(entries: Vec<MultiplierEntry>) -> Self {
        Self { entries }
    }

    /// Builds a table from `(name, multiplier)` pairs.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(name, multiplier)| MultiplierEntry::new(*name, *multiplier))
                .collect(),
        )
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.multiplier)
    }

    pub fn get_or(&self, name: &str, default: f64) -> f64 {
        self.get(name).unwrap_or(default)
    }

    /// Lookup with the neutral multiplier as fallback.
    pub fn multiplier(&self, name: &str) -> f64 {
        self.get_or(name, CatchConfig::DEFAULT_MULTIPLIER)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &MultiplierEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that names are non-empty and unique and multipliers are finite and positive.
    pub fn validate(&self) -> Result<(), TableError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(TableError::EmptyName { index });
            }
            if !entry.multiplier.is_finite() || entry.multiplier <= 0.0 {
                return Err(TableError::NonPositiveMultiplier {
                    name: entry.name.clone(),
                    multiplier: entry.multiplier,
                });
            }
            if self.entries[..index]
                .iter()
                .any(|earlier| earlier.name == entry.name)
            {
                return Err(TableError::DuplicateEntry {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Capture-device and status-condition tables backing the calculator.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatchTables {
    pub balls: MultiplierTable,
    pub statuses: MultiplierTable,
}

impl CatchTables {
    pub fn new(balls: MultiplierTable, statuses: MultiplierTable) -> Self {
        Self { balls, statuses }
    }

    /// Built-in tables matching the bundled content data.
    ///
    /// Devices with turn- or level-dependent rules still carry a row so they
    /// show up in listings; their row value is overridden during resolution.
    pub fn standard() -> Self {
        let balls = MultiplierTable::from_pairs(&[
            ("Poke Ball", 1.0),
            ("Great Ball", 1.5),
            ("Ultra Ball", 2.0),
            ("Master Ball", CatchConfig::GUARANTEED_MULTIPLIER),
            ("Premier Ball", 1.0),
            ("Luxury Ball", 1.0),
            ("Heal Ball", 1.0),
            ("Net Ball", 3.5),
            ("Dive Ball", 3.5),
            ("Dusk Ball", 3.0),
            ("Quick Ball", 5.0),
            ("Timer Ball", 1.0),
            ("Repeat Ball", 3.5),
            ("Nest Ball", 1.0),
            ("Dream Ball", 1.0),
            ("Beast Ball", 0.1),
        ]);
        let statuses = MultiplierTable::from_pairs(&[
            ("None", 1.0),
            ("Sleep", 2.0),
            ("Freeze", 2.0),
            ("Paralysis", 1.5),
            ("Poison", 1.5),
            ("Burn", 1.5),
        ]);
        Self { balls, statuses }
    }

    /// Validates both tables, reporting the first failure.
    pub fn validate(&self) -> Result<(), TableError> {
        self.balls.validate()?;
        self.statuses.validate()
    }
}

impl TablesOracle for CatchTables {
    fn ball_multiplier(&self, name: &str) -> Option<f64> {
        self.balls.get(name)
    }

    fn status_multiplier(&self, name: &str) -> Option<f64> {
        self.statuses.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompendiumError;

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let tables = CatchTables::standard();

        assert_eq!(tables.ball_multiplier("Ultra Ball"), Some(2.0));
        assert_eq!(tables.ball_multiplier("ultra ball"), None);
        assert_eq!(tables.status_multiplier("Sleep"), Some(2.0));
    }

    #[test]
    fn unknown_name_falls_back_to_neutral_multiplier() {
        let table = MultiplierTable::from_pairs(&[("Great Ball", 1.5)]);

        assert_eq!(table.multiplier("Mystery Ball"), 1.0);
        assert_eq!(table.get_or("Mystery Ball", 0.5), 0.5);
    }

    #[test]
    fn first_duplicate_wins_but_fails_validation() {
        let table = MultiplierTable::from_pairs(&[("Net Ball", 3.5), ("Net Ball", 1.0)]);

        assert_eq!(table.get("Net Ball"), Some(3.5));
        let err = table.validate().unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateEntry {
                name: "Net Ball".into()
            }
        );
        assert_eq!(err.error_code(), "TABLE_DUPLICATE_ENTRY");
    }

    #[test]
    fn validation_rejects_bad_multipliers_and_names() {
        let zero = MultiplierTable::from_pairs(&[("Dud Ball", 0.0)]);
        assert!(matches!(
            zero.validate(),
            Err(TableError::NonPositiveMultiplier { .. })
        ));

        let nan = MultiplierTable::from_pairs(&[("Odd Ball", f64::NAN)]);
        assert!(matches!(
            nan.validate(),
            Err(TableError::NonPositiveMultiplier { .. })
        ));

        let blank = MultiplierTable::from_pairs(&[("Poke Ball", 1.0), ("  ", 2.0)]);
        assert_eq!(blank.validate(), Err(TableError::EmptyName { index: 1 }));
    }

    #[test]
    fn standard_tables_are_valid() {
        let tables = CatchTables::standard();
        assert!(tables.validate().is_ok());
        assert_eq!(tables.statuses.names().next(), Some("None"));
    }
}
