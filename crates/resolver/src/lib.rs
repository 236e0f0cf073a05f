//! Namespace to construct resolution
//!
//! Resolves a namespace to the directories registered for it and lists the
//! classes, interfaces and traits defined there, as confirmed by a
//! [`TypeRegistry`].

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod construct_name;
pub mod path_builder;
pub mod registry;
pub mod resolver;
pub mod walker;

pub use construct_name::derive_construct_name;
pub use path_builder::PathBuilder;
pub use registry::{ConstructKind, ExistenceChecker, InMemoryTypeRegistry, TypeRegistry};
pub use resolver::NamespaceResolver;
pub use walker::{SourceFiles, SourceTree, WalkOptions};
