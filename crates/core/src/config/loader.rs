use crate::config::types::{ConfigFile, CurrencyConfig, LoggingConfig, ResolvedConfig};
use crate::money::CurrencyFormatter;
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("currency.{0} must be a single character, got '{1}'")]
    BadSeparator(&'static str, String),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration.
    ///
    /// An explicit `config_path` must exist. Without one, the default location
    /// is tried and built-in defaults are used when nothing is there.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = default_config_path();
                if !p.exists() {
                    debug!(path = %p.display(), "no config file, using defaults");
                    return Ok(Self::defaults());
                }
                p
            }
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        Self::resolve(path, cf)
    }

    pub fn defaults() -> ResolvedConfig {
        ResolvedConfig {
            source: None,
            output_dir: PathBuf::from("."),
            output_format: Default::default(),
            currency: CurrencyFormatter::default(),
            logging: LoggingConfig::default(),
        }
    }

    fn resolve(path: PathBuf, cf: ConfigFile) -> Result<ResolvedConfig, ConfigError> {
        let output_dir = match cf.output.dir {
            Some(ref dir) => expand_path(dir)?,
            None => PathBuf::from("."),
        };

        let logging = if let Some(ref file) = cf.logging.file {
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expand_path(&file.to_string_lossy())?),
            }
        } else {
            cf.logging.clone()
        };

        Ok(ResolvedConfig {
            source: Some(path),
            output_dir,
            output_format: cf.output.format,
            currency: currency_formatter(&cf.currency)?,
            logging,
        })
    }
}

fn currency_formatter(cfg: &CurrencyConfig) -> Result<CurrencyFormatter, ConfigError> {
    Ok(CurrencyFormatter {
        label: cfg.label.clone(),
        thousands_separator: single_char("thousands_separator", &cfg.thousands_separator)?,
        decimal_separator: single_char("decimal_separator", &cfg.decimal_separator)?,
    })
}

fn single_char(field: &'static str, s: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::BadSeparator(field, s.to_string())),
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("faktura").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("faktura").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
