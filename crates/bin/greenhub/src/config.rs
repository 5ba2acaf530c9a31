//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `greenhub.toml` in the working directory unless another path is
//! given. Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use greenhub_domain::query::DEFAULT_PER_PAGE;

/// Default configuration file name.
pub const DEFAULT_PATH: &str = "greenhub.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// How findings are printed.
    pub report: ReportConfig,
    /// Query defaults.
    pub query: QueryConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Report configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

/// Query configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Page size used when `--per-page` is not given.
    pub per_page: u32,
}

/// Output format for validation findings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One finding per line.
    #[default]
    Text,
    /// A JSON array of findings.
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unknown report format '{other}'"
            ))),
        }
    }
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is malformed, if an override
    /// holds an invalid value, or if the result fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("GREENHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("GREENHUB_REPORT_FORMAT") {
            self.report.format = val.parse()?;
        }
        if let Some(val) = lookup("GREENHUB_PER_PAGE") {
            self.query.per_page = val.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("GREENHUB_PER_PAGE is not a number: '{val}'"))
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.query.per_page == 0 {
            return Err(ConfigError::Validation(
                "query.per_page must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn,greenhub=info,greenhub_app=info,greenhub_adapter_memory=info"
                .to_string(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
