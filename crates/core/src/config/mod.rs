//! Configuration module for nsfinder
//!
//! Controls how source directories are walked and where the autoload
//! manifest is found. Configuration can be loaded from TOML files and/or
//! environment variables.

mod defaults;
mod loading;


use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use defaults::*;

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.nsfinder/config.toml`.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".nsfinder").join("config.toml"))
}

/// Finder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Extension of source files that may define constructs, without the dot
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Follow symbolic links while walking source directories
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,

    /// Autoload manifest file name, relative to the project root
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Merge development-only prefix mappings into the prefix table
    #[serde(default = "default_include_dev")]
    pub include_dev: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            follow_links: default_follow_links(),
            manifest_file: default_manifest_file(),
            include_dev: default_include_dev(),
        }
    }
}

impl FinderConfig {
    /// Source extension with any leading dot removed.
    pub fn normalized_extension(&self) -> &str {
        self.source_extension.trim_start_matches('.')
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        let extension = self.normalized_extension();
        if extension.is_empty() {
            return Err(Error::config(
                "source_extension must not be empty".to_string(),
            ));
        }
        if extension.contains(['/', '\\']) {
            return Err(Error::config(format!(
                "Invalid source_extension '{}': must not contain path separators",
                self.source_extension
            )));
        }

        if self.manifest_file.trim().is_empty() {
            return Err(Error::config(
                "manifest_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
