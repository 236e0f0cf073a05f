//! Namespace prefix table and the provider seam that supplies it.

use crate::error::Result;
use crate::namespace::Namespace;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Maps namespace prefixes to the base directories registered for them.
///
/// Keys are kept in the spelling they were registered with (e.g. `App\`);
/// matching always goes through [`Namespace`]. Iteration order is the sorted
/// key order, which makes prefix selection deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    entries: BTreeMap<String, Vec<PathBuf>>,
}

/// Result of a longest-prefix lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    /// Prefix as registered
    pub prefix: &'a str,
    /// Parsed form of `prefix`
    pub namespace: Namespace,
    /// Base directories in registration order
    pub directories: &'a [PathBuf],
}

impl PrefixTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `directories` for `prefix`, replacing any earlier entry.
    pub fn insert<I, P>(&mut self, prefix: impl Into<String>, directories: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.entries.insert(
            prefix.into(),
            directories.into_iter().map(Into::into).collect(),
        );
    }

    /// Append directories to `prefix`, keeping order and skipping exact duplicates.
    pub fn extend_prefix<I, P>(&mut self, prefix: impl Into<String>, directories: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let existing = self.entries.entry(prefix.into()).or_default();
        for dir in directories {
            let dir = dir.into();
            if !existing.contains(&dir) {
                existing.push(dir);
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_prefix<I, P>(mut self, prefix: impl Into<String>, directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.insert(prefix, directories);
        self
    }

    pub fn get(&self, prefix: &str) -> Option<&[PathBuf]> {
        self.entries.get(prefix).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.entries
            .iter()
            .map(|(prefix, dirs)| (prefix.as_str(), dirs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the registered prefix with the most segments that is a
    /// segment-aligned prefix of `target`.
    ///
    /// When several prefixes tie on length (only possible for different
    /// spellings of the same segments, e.g. `App` and `App\`), the first one in
    /// iteration order wins.
    pub fn longest_match(&self, target: &Namespace) -> Option<PrefixMatch<'_>> {
        let mut best: Option<PrefixMatch<'_>> = None;

        for (prefix, directories) in self.iter() {
            let namespace = Namespace::parse(prefix);
            if !target.starts_with(&namespace) {
                continue;
            }
            let longer = best
                .as_ref()
                .is_none_or(|current| namespace.len() > current.namespace.len());
            if longer {
                best = Some(PrefixMatch {
                    prefix,
                    namespace,
                    directories,
                });
            }
        }

        best
    }
}

impl<K, V, P> FromIterator<(K, V)> for PrefixTable
where
    K: Into<String>,
    V: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (prefix, dirs) in iter {
            table.extend_prefix(prefix, dirs.into_iter().map(|d| d.as_ref().to_path_buf()));
        }
        table
    }
}

/// Source of the prefix table.
///
/// The resolver asks for the table on every call and never mutates it, so
/// implementations are free to re-read their backing store each time.
pub trait PrefixTableProvider {
    fn prefix_table(&self) -> Result<PrefixTable>;
}

impl PrefixTableProvider for PrefixTable {
    fn prefix_table(&self) -> Result<PrefixTable> {
        Ok(self.clone())
    }
}

impl<T: PrefixTableProvider + ?Sized> PrefixTableProvider for &T {
    fn prefix_table(&self) -> Result<PrefixTable> {
        (**self).prefix_table()
    }
}

impl<T: PrefixTableProvider + ?Sized> PrefixTableProvider for Box<T> {
    fn prefix_table(&self) -> Result<PrefixTable> {
        (**self).prefix_table()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_prefix_wins() {
        let table = PrefixTable::new()
            .with_prefix("App\\", ["/dir/a"])
            .with_prefix("App\\Models\\", ["/dir/b"]);

        let target = Namespace::parse("App\\Models\\User");
        let found = table.longest_match(&target).unwrap();
        assert_eq!(found.prefix, "App\\Models\\");
        assert_eq!(found.directories, &[PathBuf::from("/dir/b")]);
    }

    #[test]
    fn test_match_is_segment_aligned() {
        let table = PrefixTable::new().with_prefix("Foo\\Ba", ["/dir"]);
        assert!(table.longest_match(&Namespace::parse("Foo\\Bar")).is_none());
    }

    #[test]
    fn test_no_match() {
        let table = PrefixTable::new().with_prefix("Other\\", ["/dir"]);
        assert!(table.longest_match(&Namespace::parse("App\\Models")).is_none());
    }

    #[test]
    fn test_root_prefix_matches_everything() {
        let table = PrefixTable::new().with_prefix("", ["/fallback"]);
        let found = table.longest_match(&Namespace::parse("Any\\Thing")).unwrap();
        assert!(found.namespace.is_empty());
    }

    #[test]
    fn test_equal_length_tie_is_first_in_order() {
        let table = PrefixTable::new()
            .with_prefix("App\\", ["/one"])
            .with_prefix("App", ["/two"]);
        // "App" sorts before "App\\"
        let found = table.longest_match(&Namespace::parse("App\\X")).unwrap();
        assert_eq!(found.prefix, "App");
        let again = table.longest_match(&Namespace::parse("App\\X")).unwrap();
        assert_eq!(found, again);
    }

    #[test]
    fn test_extend_prefix_skips_duplicates() {
        let mut table = PrefixTable::new();
        table.extend_prefix("App\\", ["src", "lib"]);
        table.extend_prefix("App\\", ["lib", "extra"]);
        assert_eq!(
            table.get("App\\").unwrap(),
            &[
                PathBuf::from("src"),
                PathBuf::from("lib"),
                PathBuf::from("extra")
            ]
        );
    }

    #[test]
    fn test_from_iter() {
        let table: PrefixTable = [("App\\", vec!["src"]), ("Tests\\", vec!["tests"])]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.prefix_table().unwrap(), table);
    }
}
