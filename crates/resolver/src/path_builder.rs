//! Namespace → directory path translation
//!
//! Given a base directory registered for a prefix, maps a namespace under that
//! prefix to the directory that holds its files.

use nsfinder_core::error::{Error, Result};
use nsfinder_core::Namespace;
use std::path::{Path, PathBuf};

/// Builds directory paths for namespaces below one registered prefix.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    base: PathBuf,
    prefix: Namespace,
}

impl PathBuilder {
    pub fn new(base: impl Into<PathBuf>, prefix: Namespace) -> Self {
        Self {
            base: base.into(),
            prefix,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn prefix(&self) -> &Namespace {
        &self.prefix
    }

    /// Directory for `target`: the base directory plus one path component per
    /// namespace segment after the prefix.
    ///
    /// Does not touch the filesystem. Fails with [`Error::InvalidRemainder`]
    /// when `target` is not below the prefix.
    pub fn resolve(&self, target: &Namespace) -> Result<PathBuf> {
        let remainder = target
            .strip_prefix(&self.prefix)
            .ok_or_else(|| Error::invalid_remainder(self.prefix.to_string(), target.to_string()))?;

        let mut path = self.base.clone();
        path.extend(remainder);
        Ok(path)
    }
}
