//! Application configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use core_kernel::{Currency, NumberGrouping};

use crate::error::CliError;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory holding one JSON file per storage key
    pub data_dir: PathBuf,
    /// Currency code used for every report
    pub currency: String,
    /// `standard` or `indian` digit grouping
    pub number_grouping: String,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./cloudbook-data"),
            currency: "BDT".to_string(),
            number_grouping: "standard".to_string(),
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Loads defaults, then the optional config file, then `CLOUDBOOK_*`
    /// environment variables
    ///
    /// Without an explicit path, `cloudbook.toml` in the working directory is
    /// read when present.
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("cloudbook").required(false),
        };

        config::Config::builder()
            .set_default("data_dir", defaults.data_dir.to_string_lossy().to_string())?
            .set_default("currency", defaults.currency)?
            .set_default("number_grouping", defaults.number_grouping)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .add_source(file_source)
            .add_source(config::Environment::with_prefix("CLOUDBOOK"))
            .build()?
            .try_deserialize()
    }

    pub fn currency(&self) -> Result<Currency, CliError> {
        self.currency
            .parse()
            .map_err(|e: core_kernel::MoneyError| CliError::InvalidArgument(e.to_string()))
    }

    pub fn grouping(&self) -> Result<NumberGrouping, CliError> {
        self.number_grouping.parse().map_err(CliError::InvalidArgument)
    }
}
