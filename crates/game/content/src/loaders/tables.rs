//! Multiplier tables loader.

use std::path::Path;

use compendium_core::{CatchTables, CompendiumError};

use crate::loaders::{LoadResult, read_file};

/// Loader for capture-device and status-condition tables from TOML files.
///
/// ```toml
/// [[balls]]
/// name = "Great Ball"
/// multiplier = 1.5
///
/// [[statuses]]
/// name = "Sleep"
/// multiplier = 2.0
/// ```
pub struct TablesLoader;

impl TablesLoader {
    /// Load and validate tables from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CatchTables> {
        let content = read_file(path)?;
        let tables = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid tables file {}: {}", path.display(), e))?;

        tracing::debug!(
            balls = tables.balls.len(),
            statuses = tables.statuses.len(),
            "Loaded multiplier tables from {}",
            path.display()
        );

        Ok(tables)
    }

    /// Parse and validate tables from TOML text.
    pub fn parse(content: &str) -> LoadResult<CatchTables> {
        let tables: CatchTables = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;
        tables
            .validate()
            .map_err(|e| anyhow::anyhow!("[{}] {}", e.error_code(), e))?;

        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compendium_core::TablesOracle;

    #[test]
    fn parses_both_tables() {
        let tables = TablesLoader::parse(
            r#"
            [[balls]]
            name = "Great Ball"
            multiplier = 1.5

            [[statuses]]
            name = "Sleep"
            multiplier = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(tables.ball_multiplier("Great Ball"), Some(1.5));
        assert_eq!(tables.status_multiplier("Sleep"), Some(2.0));
    }

    #[test]
    fn rejects_invalid_multiplier() {
        let err = TablesLoader::parse(
            r#"
            [[balls]]
            name = "Broken Ball"
            multiplier = -1.0

            [[statuses]]
            name = "None"
            multiplier = 1.0
            "#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Broken Ball"));
        assert!(message.contains("[TABLE_NON_POSITIVE_MULTIPLIER]"));
    }

    #[test]
    fn duplicate_rows_report_their_error_code() {
        let err = TablesLoader::parse(
            r#"
            [[balls]]
            name = "Net Ball"
            multiplier = 3.5

            [[balls]]
            name = "Net Ball"
            multiplier = 1.0

            [[statuses]]
            name = "None"
            multiplier = 1.0
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().starts_with("[TABLE_DUPLICATE_ENTRY]"));
    }

    #[test]
    fn missing_table_is_a_parse_error() {
        assert!(TablesLoader::parse("[[balls]]\nname = \"Poke Ball\"\nmultiplier = 1.0\n").is_err());
    }
}
