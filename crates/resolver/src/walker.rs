//! Source file discovery
//!
//! Lazily walks a directory tree and yields the paths of source files relative
//! to the walk root.

use nsfinder_core::FinderConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Options controlling which files a walk yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Source file extension without the dot, matched case-insensitively
    pub extension: String,
    /// Follow symbolic links into linked directories and files
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::from_config(&FinderConfig::default())
    }
}

impl WalkOptions {
    pub fn from_config(config: &FinderConfig) -> Self {
        Self {
            extension: config.normalized_extension().to_string(),
            follow_links: config.follow_links,
        }
    }

    /// Check if a path carries the configured source extension
    ///
    /// An empty configured extension matches nothing.
    pub fn has_source_extension(&self, path: &Path) -> bool {
        if self.extension.is_empty() {
            return false;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

/// A directory tree of source files.
///
/// Each call to [`files`](Self::files) starts a fresh walk.
#[derive(Debug, Clone)]
pub struct SourceTree {
    root: PathBuf,
    options: WalkOptions,
}

impl SourceTree {
    /// The caller is expected to have checked that `root` is a directory.
    pub fn new(root: impl Into<PathBuf>, options: WalkOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start walking the tree.
    pub fn files(&self) -> SourceFiles {
        debug!("Walking source files under {}", self.root.display());
        SourceFiles {
            root: self.root.clone(),
            inner: WalkDir::new(&self.root)
                .follow_links(self.options.follow_links)
                .into_iter(),
            options: self.options.clone(),
        }
    }
}

impl IntoIterator for &SourceTree {
    type Item = PathBuf;
    type IntoIter = SourceFiles;

    fn into_iter(self) -> SourceFiles {
        self.files()
    }
}

/// Iterator over source files relative to the walk root.
///
/// Open directory handles are owned by the inner walker and released when the
/// iterator is dropped, including when iteration stops early. Unreadable
/// entries are logged and skipped. No ordering is guaranteed.
pub struct SourceFiles {
    root: PathBuf,
    inner: walkdir::IntoIter,
    options: WalkOptions,
}

impl Iterator for SourceFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error reading directory entry: {}", e);
                    continue;
                }
            };

            // Check file type first (already cached in DirEntry, free)
            if !entry.file_type().is_file() {
                continue;
            }

            if !self.options.has_source_extension(entry.path()) {
                continue;
            }

            match entry.path().strip_prefix(&self.root) {
                Ok(relative) => return Some(relative.to_path_buf()),
                Err(_) => {
                    warn!(
                        "Walked path {} is outside {}",
                        entry.path().display(),
                        self.root.display()
                    );
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn php_options() -> WalkOptions {
        WalkOptions {
            extension: "php".to_string(),
            follow_links: false,
        }
    }

    #[test]
    fn test_has_source_extension_is_case_insensitive() {
        let options = php_options();
        assert!(options.has_source_extension(Path::new("User.php")));
        assert!(options.has_source_extension(Path::new("User.PHP")));
        assert!(options.has_source_extension(Path::new("dir/User.Php")));
        assert!(!options.has_source_extension(Path::new("User.phps")));
        assert!(!options.has_source_extension(Path::new("README")));
        assert!(!options.has_source_extension(Path::new("notes.txt")));
    }

    #[test]
    fn test_empty_extension_matches_nothing() {
        let options = WalkOptions {
            extension: String::new(),
            follow_links: false,
        };
        assert!(!options.has_source_extension(Path::new("User.")));
        assert!(!options.has_source_extension(Path::new("User")));
    }

    #[test]
    fn test_default_options_follow_config_defaults() {
        let options = WalkOptions::default();
        assert_eq!(options.extension, "php");
        assert!(!options.follow_links);
    }

    #[test]
    fn test_walk_yields_relative_source_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("Models/Admin")).unwrap();
        fs::write(root.join("User.php"), "").unwrap();
        fs::write(root.join("Models/Post.PHP"), "").unwrap();
        fs::write(root.join("Models/Admin/Role.php"), "").unwrap();
        fs::write(root.join("Models/readme.md"), "").unwrap();
        fs::create_dir_all(root.join("Fake.php")).unwrap();

        let tree = SourceTree::new(root, php_options());
        let found: BTreeSet<PathBuf> = tree.files().collect();

        let expected: BTreeSet<PathBuf> = [
            PathBuf::from("User.php"),
            Path::new("Models").join("Post.PHP"),
            Path::new("Models").join("Admin").join("Role.php"),
        ]
        .into_iter()
        .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_walk_is_restartable() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("A.php"), "").unwrap();
        fs::write(temp.path().join("B.php"), "").unwrap();

        let tree = SourceTree::new(temp.path(), php_options());
        let first = tree.files().take(1).count();
        let all = (&tree).into_iter().count();
        assert_eq!(first, 1);
        assert_eq!(all, 2);
    }
}
