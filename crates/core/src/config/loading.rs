//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, ConfigBuilder as LibConfigBuilder, Environment, File};
use std::path::Path;

use super::defaults::*;
use super::{global_config_path, FinderConfig};

/// Helper to set a config default with consistent error mapping
fn set_config_default<T: Into<config::Value>>(
    builder: LibConfigBuilder<config::builder::DefaultState>,
    key: &str,
    value: T,
) -> Result<LibConfigBuilder<config::builder::DefaultState>> {
    builder
        .set_default(key, value)
        .map_err(|e| Error::config(format!("Failed to set {key} default: {e}")))
}

impl FinderConfig {
    /// Loads configuration from TOML files with environment variable overrides
    ///
    /// Files are layered in the order given; missing files are skipped.
    /// Environment variables are prefixed with `NSFINDER_`, for example
    /// `NSFINDER_SOURCE_EXTENSION=inc` or `NSFINDER_FOLLOW_LINKS=true`.
    pub fn from_files(paths: &[&Path]) -> Result<Self> {
        let builder = ConfigLib::builder();

        let builder =
            set_config_default(builder, "source_extension", default_source_extension())?;
        let builder = set_config_default(builder, "follow_links", default_follow_links())?;
        let builder = set_config_default(builder, "manifest_file", default_manifest_file())?;
        let mut builder = set_config_default(builder, "include_dev", default_include_dev())?;

        for path in paths {
            if path.exists() {
                builder = builder.add_source(File::from(*path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("NSFINDER").try_parsing(true));

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a single TOML file with environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_files(&[path])
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Global config file (~/.nsfinder/config.toml)
    /// 3. Custom config path, if given
    /// 4. Environment variables (NSFINDER_*)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let global = global_config_path()?;
        match config_path {
            Some(path) => Self::from_files(&[global.as_path(), path]),
            None => Self::from_files(&[global.as_path()]),
        }
    }
}
