//! Runtime configuration
//!
//! Environment variables (with `.env` loaded by `main`) provide the base.
//! A TOML file named by `GC_CONFIG_FILE` is layered on top, followed by
//! `GC__SECTION__KEY` variables.

use config::{Config, File, FileFormat};
use gc_shared::config::AppConfig;

pub const CONFIG_FILE_VAR: &str = "GC_CONFIG_FILE";
pub const STORAGE_VAR: &str = "STORAGE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Where repositories keep their data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    #[default]
    MySql,
    Memory,
}

impl StorageMode {
    /// `STORAGE=memory` runs without a database
    pub fn from_env() -> Self {
        match std::env::var(STORAGE_VAR) {
            Ok(value) if value.eq_ignore_ascii_case("memory") => StorageMode::Memory,
            _ => StorageMode::MySql,
        }
    }
}

/// Load, layer and validate the application configuration
pub fn load_config() -> Result<AppConfig, ConfigLoadError> {
    let base = AppConfig::from_env();
    let config = match std::env::var(CONFIG_FILE_VAR) {
        Ok(path) => {
            log::info!("Layering configuration file {}", path);
            layer_file(&base, &path)?
        }
        Err(_) => base,
    };

    config.validate().map_err(ConfigLoadError::Invalid)?;
    Ok(config)
}

/// Override `base` with the values present in the TOML file at `path`
pub fn layer_file(base: &AppConfig, path: &str) -> Result<AppConfig, ConfigLoadError> {
    let layered = Config::builder()
        .add_source(Config::try_from(base)?)
        .add_source(File::new(path, FileFormat::Toml))
        .add_source(config::Environment::with_prefix("GC").separator("__"))
        .build()?;

    Ok(layered.try_deserialize()?)
}
