use super::{ConstructKind, TypeRegistry};
use dashmap::DashMap;
use nsfinder_core::Namespace;
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Type registry held entirely in memory.
///
/// Constructs are either defined up front or registered as lazily loadable;
/// a lazy construct only becomes defined once an `autoload = true` query
/// touches it, mirroring an on-demand loader. Names are normalized through
/// [`Namespace`], so `\App\User` and `App\User` are the same construct.
#[derive(Debug, Default)]
pub struct InMemoryTypeRegistry {
    defined: DashMap<String, ConstructKind>,
    lazy: DashMap<String, ConstructKind>,
    parents: DashMap<String, Vec<String>>,
    load_attempts: AtomicUsize,
}

fn normalize(name: &str) -> String {
    Namespace::parse(name).to_string()
}

impl InMemoryTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already defined construct.
    pub fn define(&self, name: &str, kind: ConstructKind) {
        let name = normalize(name);
        self.lazy.remove(&name);
        self.defined.insert(name, kind);
    }

    /// Register a construct that is only defined once loaded on demand.
    pub fn define_lazy(&self, name: &str, kind: ConstructKind) {
        let name = normalize(name);
        if !self.defined.contains_key(&name) {
            self.lazy.insert(name, kind);
        }
    }

    /// Record that `name` extends or implements `parent`.
    pub fn declare_parent(&self, name: &str, parent: &str) {
        let parent = normalize(parent);
        let mut entry = self.parents.entry(normalize(name)).or_default();
        if !entry.contains(&parent) {
            entry.push(parent);
        }
    }

    /// Whether `name` is currently defined (loaded).
    pub fn is_loaded(&self, name: &str) -> bool {
        self.defined.contains_key(&normalize(name))
    }

    /// Number of queries that were allowed to load on demand.
    pub fn load_attempts(&self) -> usize {
        self.load_attempts.load(Ordering::Relaxed)
    }

    fn load(&self, name: &str) -> Option<ConstructKind> {
        self.load_attempts.fetch_add(1, Ordering::Relaxed);
        let (name, kind) = self.lazy.remove(name)?;
        debug!("Loaded {} {} on demand", kind, name);
        self.defined.insert(name, kind);
        Some(kind)
    }
}

impl TypeRegistry for InMemoryTypeRegistry {
    fn exists(&self, name: &str, kind: ConstructKind, autoload: bool) -> bool {
        let name = normalize(name);
        let defined = self.defined.get(&name).map(|k| *k.value());

        match defined {
            Some(found) => found == kind,
            None if autoload => self.load(&name) == Some(kind),
            None => false,
        }
    }

    fn is_subtype_of(&self, name: &str, parent: &str) -> bool {
        let name = normalize(name);
        let parent = normalize(parent);
        if name == parent {
            return false;
        }

        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([name]);
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current.clone()) {
                continue;
            }
            let Some(direct) = self.parents.get(&current).map(|p| p.value().clone()) else {
                continue;
            };
            for ancestor in direct {
                if ancestor == parent {
                    return true;
                }
                queue.push_back(ancestor);
            }
        }

        false
    }
}
