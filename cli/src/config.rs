use crate::error::{CliError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration file looked up when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "xlens.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// How classified exchanges are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One row per exchange
    #[default]
    Table,
    /// Categorized exchanges as a JSON array
    Json,
    /// Per-category counts
    Summary,
}

/// Top-level xlens.toml structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LensConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rendering settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Paint categories and status codes in their display colors
    pub color: bool,
    /// Add a status column to the table
    pub show_status: bool,
    /// Add a URL column to the table
    pub show_url: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
            show_status: true,
            show_url: true,
        }
    }
}

/// Diagnostic logging settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LensConfig {
    /// Load configuration from an xlens.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(CliError::ConfigNotFound(path_ref.to_path_buf()));
        }

        let content = fs::read_to_string(path_ref)?;
        let config: LensConfig = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(path = %path_ref.display(), "loaded configuration");
        Ok(config)
    }

    /// Load an explicit config path, or the default file when it exists.
    ///
    /// An explicit path must exist; the default path silently falls back
    /// to built-in defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CliError::InvalidConfig(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }
        Ok(())
    }
}

/// Generate default xlens.toml template with comments
pub fn generate_default_config_template() -> String {
    r#"# xlens configuration

[output]
# Output format: table, json or summary
format = "table"
# Paint categories and status codes in their display colors
color = true
# Extra table columns
show_status = true
show_url = true

[logging]
# Diagnostic level used when RUST_LOG is not set
# One of: trace, debug, info, warn, error, off
level = "warn"
"#
    .to_string()
}

/// Write the default template, refusing to clobber an existing file unless forced
pub fn write_default_config<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
    let path_ref = path.as_ref();

    if path_ref.exists() && !force {
        return Err(CliError::ConfigExists(path_ref.to_path_buf()));
    }

    fs::write(path_ref, generate_default_config_template())?;
    Ok(())
}
