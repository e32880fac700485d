use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pyakkadein_search::{DEFAULT_MAX_SPAN_DAYS, LogicMode};
use serde::Deserialize;
use tracing::{debug, info};

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pyakkadein.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Output settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Day search settings.
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Print astrological attributes.
    #[serde(default = "default_true")]
    pub astrology: bool,
    /// Print festivals and holidays.
    #[serde(default = "default_true")]
    pub observances: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            astrology: true,
            observances: true,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Largest range, in days, a search may scan.
    #[serde(default = "default_max_span_days")]
    pub max_span_days: i64,
    /// How criteria combine.
    #[serde(default)]
    pub logic: LogicToml,
    /// Maximum number of hits printed.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_span_days: default_max_span_days(),
            logic: LogicToml::default(),
            limit: None,
        }
    }
}

/// `logic = "and" | "or"`.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogicToml {
    #[default]
    And,
    Or,
}

impl From<LogicToml> for LogicMode {
    fn from(value: LogicToml) -> Self {
        match value {
            LogicToml::And => LogicMode::And,
            LogicToml::Or => LogicMode::Or,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_max_span_days() -> i64 {
    DEFAULT_MAX_SPAN_DAYS
}

/// Parse configuration text.
pub fn parse(text: &str) -> Result<AppConfig> {
    toml::from_str(text).context("invalid configuration")
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `pyakkadein.toml` in the
/// working directory is used when present and defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                return Ok(AppConfig::default());
            }
            default
        }
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = parse(&text).with_context(|| format!("in {}", path.display()))?;
    info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.display.astrology);
        assert!(config.display.observances);
        assert_eq!(config.search.max_span_days, 36_600);
        assert_eq!(config.search.logic, LogicToml::And);
        assert_eq!(config.search.limit, None);
    }

    #[test]
    fn partial_sections() {
        let config = parse(
            r#"
            [display]
            astrology = false

            [search]
            logic = "or"
            limit = 20
            "#,
        )
        .unwrap();
        assert!(!config.display.astrology);
        assert!(config.display.observances);
        assert_eq!(LogicMode::from(config.search.logic), LogicMode::Or);
        assert_eq!(config.search.limit, Some(20));
        assert_eq!(config.search.max_span_days, 36_600);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(parse("[display]\ncolour = true\n").is_err());
        assert!(parse("[output]\n").is_err());
        assert!(parse("[search]\nlogic = \"xor\"\n").is_err());
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/pyakkadein.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
