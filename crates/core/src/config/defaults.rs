//! Default values and functions for configuration

pub(crate) const DEFAULT_SOURCE_EXTENSION: &str = "php";
pub(crate) const DEFAULT_MANIFEST_FILE: &str = "composer.json";

pub(crate) fn default_source_extension() -> String {
    DEFAULT_SOURCE_EXTENSION.to_string()
}

pub(crate) fn default_follow_links() -> bool {
    false
}

pub(crate) fn default_manifest_file() -> String {
    DEFAULT_MANIFEST_FILE.to_string()
}

pub(crate) fn default_include_dev() -> bool {
    true
}
