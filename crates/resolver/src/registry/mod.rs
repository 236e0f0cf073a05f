//! Type registry seam
//!
//! The host runtime decides whether a name resolves to a defined construct.
//! The resolver only talks to it through [`TypeRegistry`], so tests and
//! embedders can plug in [`InMemoryTypeRegistry`] or their own bridge.

mod in_memory;

pub use in_memory::InMemoryTypeRegistry;

use std::sync::Arc;
use strum_macros::{Display, EnumString};
use tracing::debug;

/// Kind of type-defining construct recognised by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ConstructKind {
    Class,
    Interface,
    /// Trait-like mixin definition
    Trait,
}

impl ConstructKind {
    /// All kinds, in the order existence checks try them.
    pub const ALL: [ConstructKind; 3] = [
        ConstructKind::Class,
        ConstructKind::Interface,
        ConstructKind::Trait,
    ];
}

/// Queries answered by the host runtime.
pub trait TypeRegistry {
    /// Whether `name` is defined as a construct of `kind`.
    ///
    /// With `autoload = false` only already-defined constructs count. With
    /// `autoload = true` the runtime may load the defining file on demand.
    fn exists(&self, name: &str, kind: ConstructKind, autoload: bool) -> bool;

    /// Whether `name` extends or implements `parent`. Never true for
    /// `name == parent`.
    fn is_subtype_of(&self, name: &str, parent: &str) -> bool;
}

impl<T: TypeRegistry + ?Sized> TypeRegistry for &T {
    fn exists(&self, name: &str, kind: ConstructKind, autoload: bool) -> bool {
        (**self).exists(name, kind, autoload)
    }

    fn is_subtype_of(&self, name: &str, parent: &str) -> bool {
        (**self).is_subtype_of(name, parent)
    }
}

impl<T: TypeRegistry + ?Sized> TypeRegistry for Box<T> {
    fn exists(&self, name: &str, kind: ConstructKind, autoload: bool) -> bool {
        (**self).exists(name, kind, autoload)
    }

    fn is_subtype_of(&self, name: &str, parent: &str) -> bool {
        (**self).is_subtype_of(name, parent)
    }
}

impl<T: TypeRegistry + ?Sized> TypeRegistry for Arc<T> {
    fn exists(&self, name: &str, kind: ConstructKind, autoload: bool) -> bool {
        (**self).exists(name, kind, autoload)
    }

    fn is_subtype_of(&self, name: &str, parent: &str) -> bool {
        (**self).is_subtype_of(name, parent)
    }
}

/// Confirms that a derived name really resolves to a construct.
///
/// Every kind is first checked without loading; only if none matches is the
/// check repeated with loading allowed. A name that fails both is absent,
/// which is an expected outcome for stale or non-construct files.
pub struct ExistenceChecker<'a, R: ?Sized> {
    registry: &'a R,
}

impl<'a, R: TypeRegistry + ?Sized> ExistenceChecker<'a, R> {
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    pub fn exists(&self, name: &str) -> bool {
        if self.any_kind(name, false) {
            return true;
        }
        let loaded = self.any_kind(name, true);
        if !loaded {
            debug!("No construct defined for {}", name);
        }
        loaded
    }

    fn any_kind(&self, name: &str, autoload: bool) -> bool {
        ConstructKind::ALL
            .iter()
            .any(|kind| self.registry.exists(name, *kind, autoload))
    }
}
