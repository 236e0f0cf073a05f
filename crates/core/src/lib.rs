//! Core types for the nsfinder namespace resolution system
//!
//! This crate provides the foundational pieces shared by the resolver:
//!
//! - **Namespaces**: segment-aware namespace values with prefix checks
//! - **Prefix tables**: namespace prefix → base directory mappings and the
//!   provider trait that supplies them
//! - **Autoload manifests**: a provider that reads mappings from disk
//! - **Configuration**: finder configuration management
//! - **Error handling**: Unified error types
//!

pub mod autoload_manifest;
pub mod config;
pub mod error;
pub mod namespace;
pub mod prefix_table;

// Re-export main types for convenience
pub use autoload_manifest::AutoloadManifest;
pub use config::{global_config_path, FinderConfig};
pub use error::{Error, Result};
pub use namespace::{Namespace, NAMESPACE_DELIMITER};
pub use prefix_table::{PrefixMatch, PrefixTable, PrefixTableProvider};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Result;
    pub use crate::namespace::Namespace;
    pub use crate::prefix_table::{PrefixTable, PrefixTableProvider};
}
