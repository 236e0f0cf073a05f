//! Autoload manifest parsing
//!
//! Reads the namespace-prefix → directory mappings declared in a JSON
//! autoload manifest (`composer.json` layout):
//!
//! ```json
//! {
//!   "autoload":     { "psr-4": { "App\\": "src/" } },
//!   "autoload-dev": { "psr-4": { "App\\Tests\\": ["tests/", "tests-legacy/"] } }
//! }
//! ```

use crate::error::{Error, Result};
use crate::prefix_table::{PrefixTable, PrefixTableProvider};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

const AUTOLOAD_SECTION: &str = "autoload";
const AUTOLOAD_DEV_SECTION: &str = "autoload-dev";
const PREFIX_MAPPING_KEY: &str = "psr-4";

/// Prefix table provider backed by an autoload manifest on disk.
///
/// The file is re-read on every call so edits are picked up without
/// rebuilding the provider.
#[derive(Debug, Clone)]
pub struct AutoloadManifest {
    path: PathBuf,
    include_dev: bool,
}

impl AutoloadManifest {
    /// Create a provider for the manifest at `path`, including dev mappings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            include_dev: true,
        }
    }

    /// Locate `manifest_file` inside `project_root`.
    pub fn in_project(project_root: &Path, manifest_file: &str) -> Self {
        Self::new(project_root.join(manifest_file))
    }

    /// Toggle whether the `autoload-dev` section is merged in.
    #[must_use]
    pub fn include_dev(mut self, include_dev: bool) -> Self {
        self.include_dev = include_dev;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the manifest.
    pub fn load(&self) -> Result<PrefixTable> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::manifest(self.path.display().to_string(), format!("failed to read: {e}"))
        })?;

        let base_dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        parse_manifest(&content, &base_dir, self.include_dev)
            .map_err(|message| Error::manifest(self.path.display().to_string(), message))
    }
}

impl PrefixTableProvider for AutoloadManifest {
    fn prefix_table(&self) -> Result<PrefixTable> {
        self.load()
    }
}

/// Parse manifest JSON into a prefix table, resolving relative directories
/// against `base_dir`.
fn parse_manifest(
    content: &str,
    base_dir: &Path,
    include_dev: bool,
) -> std::result::Result<PrefixTable, String> {
    let manifest: Value =
        serde_json::from_str(content).map_err(|e| format!("failed to parse JSON: {e}"))?;

    let mut table = PrefixTable::new();

    let mut sections = vec![AUTOLOAD_SECTION];
    if include_dev {
        sections.push(AUTOLOAD_DEV_SECTION);
    }

    for section in sections {
        let Some(mapping) = manifest.get(section).and_then(|s| s.get(PREFIX_MAPPING_KEY)) else {
            continue;
        };
        let mapping = mapping
            .as_object()
            .ok_or_else(|| format!("'{section}.{PREFIX_MAPPING_KEY}' must be an object"))?;

        for (prefix, dirs) in mapping {
            let dirs = directory_list(dirs)
                .ok_or_else(|| {
                    format!(
                        "directories for prefix '{prefix}' in '{section}' must be a string or an array of strings"
                    )
                })?
                .into_iter()
                .map(|dir| resolve_directory(base_dir, dir));

            table.extend_prefix(prefix.as_str(), dirs);
        }
    }

    debug!("Loaded {} namespace prefixes from autoload manifest", table.len());
    Ok(table)
}

fn directory_list(value: &Value) -> Option<Vec<&str>> {
    match value {
        Value::String(dir) => Some(vec![dir.as_str()]),
        Value::Array(items) => items.iter().map(Value::as_str).collect(),
        _ => None,
    }
}

fn resolve_directory(base_dir: &Path, dir: &str) -> PathBuf {
    let dir = Path::new(dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base_dir.join(dir)
    }
}
