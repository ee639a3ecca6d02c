//! CLI configuration.
use std::env;
use std::path::PathBuf;

use compendium_content::ContentFactory;

/// Command-line front end configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `tables.toml` and `species.ron`.
    pub data_dir: PathBuf,
    /// Decimal places used when printing percentages.
    pub precision: usize,
}

impl CliConfig {
    pub const MAX_PRECISION: usize = 6;

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `COMPENDIUM_DATA_DIR` - Content directory (default: bundled data)
    /// - `COMPENDIUM_PRECISION` - Decimal places for percentages (default: 2, max: 6)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("COMPENDIUM_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(precision) = read_env::<usize>("COMPENDIUM_PRECISION") {
            config.precision = precision.min(Self::MAX_PRECISION);
        }

        config
    }

    /// Applies a `--data-dir` override on top of the environment.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    /// Formats a probability as a percentage string.
    pub fn percent(&self, value: f64) -> String {
        format!("{:.*}%", self.precision, value)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: ContentFactory::bundled_data_dir(),
            precision: 2,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_uses_configured_precision() {
        let mut config = CliConfig::default();
        assert_eq!(config.percent(5.882352), "5.88%");

        config.precision = 0;
        assert_eq!(config.percent(100.0), "100%");
    }

    #[test]
    fn data_dir_flag_overrides_configured_dir() {
        let config = CliConfig {
            data_dir: PathBuf::from("/from/env"),
            precision: 2,
        };

        let kept = config.clone().with_data_dir(None);
        assert_eq!(kept.data_dir, PathBuf::from("/from/env"));

        let overridden = config.with_data_dir(Some(PathBuf::from("/from/flag")));
        assert_eq!(overridden.data_dir, PathBuf::from("/from/flag"));
        assert_eq!(overridden.precision, 2);
    }
}
