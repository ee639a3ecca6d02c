//! Multiplier table errors.
//!
//! Errors raised while validating static lookup tables.

use crate::error::CompendiumError;

/// Errors that occur when a multiplier table is malformed.
///
/// Table errors indicate bad content data. Lookups never produce these; they
/// only surface from [`MultiplierTable::validate`](super::MultiplierTable::validate).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableError {
    /// An entry has an empty (or whitespace-only) name.
    #[error("table entry #{index} has an empty name")]
    EmptyName { index: usize },

    /// The same name appears more than once.
    #[error("duplicate table entry '{name}'")]
    DuplicateEntry { name: String },

    /// A multiplier is zero, negative, or not finite.
    #[error("entry '{name}' has invalid multiplier {multiplier} (must be finite and > 0)")]
    NonPositiveMultiplier { name: String, multiplier: f64 },
}

impl CompendiumError for TableError {
    fn error_code(&self) -> &'static str {
        use TableError::*;
        match self {
            EmptyName { .. } => "TABLE_EMPTY_NAME",
            DuplicateEntry { .. } => "TABLE_DUPLICATE_ENTRY",
            NonPositiveMultiplier { .. } => "TABLE_NON_POSITIVE_MULTIPLIER",
        }
    }
}
