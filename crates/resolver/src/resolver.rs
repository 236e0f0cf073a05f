//! Namespace resolution pipeline
//!
//! Maps a target namespace to its source directories through the prefix
//! table, then lists the constructs defined below it:
//!
//! 1. **Prefix selection**: longest registered prefix of the target
//! 2. **Directory resolution**: one candidate per base directory, kept if it exists
//! 3. **Discovery**: walk each directory for source files
//! 4. **Verification**: keep names the type registry confirms
//! 5. **Filtering**: optionally keep only strict subtypes of a given type

use crate::construct_name::derive_construct_name;
use crate::path_builder::PathBuilder;
use crate::registry::{ExistenceChecker, TypeRegistry};
use crate::walker::{SourceTree, WalkOptions};
use nsfinder_core::error::{Error, Result};
use nsfinder_core::{FinderConfig, Namespace, PrefixTableProvider};
use std::path::PathBuf;
use tracing::{debug, info};

/// Finds the directories and constructs that belong to a namespace.
///
/// Holds no state besides its inputs; every call re-reads the prefix table
/// and the filesystem.
#[derive(Debug)]
pub struct NamespaceResolver<P, R> {
    namespace: Namespace,
    provider: P,
    registry: R,
    options: WalkOptions,
}

impl<P, R> NamespaceResolver<P, R>
where
    P: PrefixTableProvider,
    R: TypeRegistry,
{
    pub fn new(namespace: impl Into<Namespace>, provider: P, registry: R) -> Self {
        Self {
            namespace: namespace.into(),
            provider,
            registry,
            options: WalkOptions::default(),
        }
    }

    /// Create a resolver whose walk options come from `config`.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if `config` does not validate.
    pub fn from_config(
        namespace: impl Into<Namespace>,
        provider: P,
        registry: R,
        config: &FinderConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(namespace, provider, registry).with_options(WalkOptions::from_config(config)))
    }

    #[must_use]
    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the target namespace.
    pub fn set_namespace(&mut self, namespace: impl Into<Namespace>) {
        self.namespace = namespace.into();
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Existing directories that hold the target namespace, in the order the
    /// base directories are registered.
    ///
    /// # Errors
    ///
    /// [`Error::NoMatchingPrefix`] if no registered prefix covers the target,
    /// or any error the provider reports.
    pub fn find_directories(&self) -> Result<Vec<PathBuf>> {
        let table = self.provider.prefix_table()?;

        let found = table
            .longest_match(&self.namespace)
            .ok_or_else(|| Error::no_matching_prefix(self.namespace.to_string()))?;

        debug!(
            "Namespace '{}' resolved through prefix '{}' ({} base directories)",
            self.namespace,
            found.prefix,
            found.directories.len()
        );

        let mut directories = Vec::with_capacity(found.directories.len());
        for base in found.directories {
            let candidate = PathBuilder::new(base, found.namespace.clone()).resolve(&self.namespace)?;
            if candidate.is_dir() {
                directories.push(candidate);
            } else {
                debug!("Skipping missing directory {}", candidate.display());
            }
        }

        Ok(directories)
    }

    /// Fully-qualified names of the constructs defined under the target
    /// namespace, sorted lexicographically.
    ///
    /// With `filter`, only strict subtypes or implementors of that type are
    /// kept; the filter type itself is never part of the result.
    pub fn find_constructs(&self, filter: Option<&str>) -> Result<Vec<String>> {
        let checker = ExistenceChecker::new(&self.registry);
        let mut constructs = Vec::new();

        for directory in self.find_directories()? {
            let tree = SourceTree::new(&directory, self.options.clone());
            for relative in tree.files() {
                let Some(name) = derive_construct_name(&relative, &self.namespace) else {
                    debug!("Skipping {}: not a construct file name", relative.display());
                    continue;
                };

                let name = name.to_string();
                if checker.exists(&name) {
                    constructs.push(name);
                }
            }
        }

        constructs.sort();
        constructs.dedup();

        if let Some(filter) = filter {
            let filter = Namespace::parse(filter).to_string();
            constructs.retain(|name| *name != filter && self.registry.is_subtype_of(name, &filter));
        }

        info!(
            "Found {} constructs under '{}'",
            constructs.len(),
            self.namespace
        );

        Ok(constructs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::registry::{ConstructKind, InMemoryTypeRegistry};
    use nsfinder_core::PrefixTable;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_set_namespace_replaces_target() {
        let mut resolver = NamespaceResolver::new(
            "App",
            PrefixTable::new(),
            InMemoryTypeRegistry::new(),
        );
        assert_eq!(resolver.namespace().to_string(), "App");

        resolver.set_namespace("\\App\\Models\\");
        assert_eq!(resolver.namespace().to_string(), "App\\Models");
    }

    #[test]
    fn test_provider_errors_propagate() {
        struct Failing;
        impl PrefixTableProvider for Failing {
            fn prefix_table(&self) -> Result<PrefixTable> {
                Err(Error::config("no autoloader"))
            }
        }

        let resolver = NamespaceResolver::new("App", Failing, InMemoryTypeRegistry::new());
        assert!(matches!(resolver.find_directories(), Err(Error::Config(_))));
    }

    #[test]
    fn test_from_config_uses_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("User.inc"), "").unwrap();
        fs::write(temp.path().join("Post.php"), "").unwrap();

        let registry = InMemoryTypeRegistry::new();
        registry.define("App\\User", ConstructKind::Class);
        registry.define("App\\Post", ConstructKind::Class);

        let config = FinderConfig {
            source_extension: ".inc".to_string(),
            ..FinderConfig::default()
        };
        let table = PrefixTable::new().with_prefix("App\\", [temp.path()]);
        let resolver = NamespaceResolver::from_config("App", table, &registry, &config).unwrap();

        assert_eq!(resolver.options().extension, "inc");
        assert_eq!(resolver.find_constructs(None).unwrap(), vec!["App\\User"]);
    }

    #[test]
    fn test_from_config_rejects_empty_extension() {
        let config = FinderConfig {
            source_extension: String::new(),
            ..FinderConfig::default()
        };
        let result = NamespaceResolver::from_config(
            "App",
            PrefixTable::new(),
            InMemoryTypeRegistry::new(),
            &config,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    /// Registry that treats every name as a subtype of every name,
    /// including itself.
    struct ReflexiveRegistry;

    impl TypeRegistry for ReflexiveRegistry {
        fn exists(&self, _name: &str, kind: ConstructKind, _autoload: bool) -> bool {
            kind == ConstructKind::Class
        }

        fn is_subtype_of(&self, _name: &str, _parent: &str) -> bool {
            true
        }
    }

    #[test]
    fn test_filter_type_is_excluded_even_if_registry_is_reflexive() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("Contracts")).unwrap();
        fs::write(temp.path().join("Contracts").join("Saveable.php"), "").unwrap();
        fs::write(temp.path().join("User.php"), "").unwrap();

        let table = PrefixTable::new().with_prefix("App\\", [temp.path()]);
        let resolver = NamespaceResolver::new("App", table, ReflexiveRegistry);

        assert_eq!(
            resolver
                .find_constructs(Some("\\App\\Contracts\\Saveable"))
                .unwrap(),
            vec!["App\\User"]
        );
    }
}
