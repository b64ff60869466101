use std::path::PathBuf;

use serde::Deserialize;

use crate::render::OutputFormat;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct OutputConfig {
    /// Directory receiving generated invoices (default: current directory)
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CurrencyConfig {
    #[serde(default = "default_currency_label")]
    pub label: String,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            label: default_currency_label(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

fn default_currency_label() -> String {
    "Kč".to_string()
}

fn default_thousands_separator() -> String {
    " ".to_string()
}

fn default_decimal_separator() -> String {
    ",".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Path the configuration was read from, `None` when running on defaults.
    pub source: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub output_format: OutputFormat,
    pub currency: crate::money::CurrencyFormatter,
    pub logging: LoggingConfig,
}
