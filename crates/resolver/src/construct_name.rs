//! Construct name derivation for source files
//!
//! Derives the fully-qualified name a file is expected to define from its path
//! relative to the namespace directory.

use nsfinder_core::Namespace;
use std::path::{Component, Path};

/// Derive the fully-qualified construct name for a file
///
/// The extension is stripped, every directory component becomes a namespace
/// segment, and the result is appended to `namespace`.
///
/// # Returns
/// - `None` if any component is not valid UTF-8, the file stem is empty, or
///   a directory name or the stem contains a namespace delimiter such as `.`
///   (such paths cannot name a construct)
/// - `Some(name)` otherwise
///
/// # Examples
/// - `User.php` under `App` -> `App\User`
/// - `Models/Admin/Role.php` under `App` -> `App\Models\Admin\Role`
pub fn derive_construct_name(relative_path: &Path, namespace: &Namespace) -> Option<Namespace> {
    let parent = relative_path.parent().unwrap_or_else(|| Path::new(""));

    let mut segments: Vec<&str> = Vec::new();
    for component in parent.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str()?;
                if Namespace::contains_delimiter(part) {
                    return None;
                }
                segments.push(part);
            }
            Component::CurDir => {}
            _ => return None,
        }
    }

    let stem = relative_path.file_stem()?.to_str()?;
    if stem.is_empty() || Namespace::contains_delimiter(stem) {
        return None;
    }
    segments.push(stem);

    Some(namespace.join(segments))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_top_level_file() {
        let name = derive_construct_name(Path::new("User.php"), &Namespace::parse("App"));
        assert_eq!(name.map(|n| n.to_string()), Some("App\\User".to_string()));
    }

    #[test]
    fn test_nested_file() {
        let relative = PathBuf::from("Models").join("Admin").join("Role.php");
        let name = derive_construct_name(&relative, &Namespace::parse("App")).unwrap();
        assert_eq!(name.to_string(), "App\\Models\\Admin\\Role");
    }

    #[test]
    fn test_root_namespace() {
        let name = derive_construct_name(Path::new("Helper.php"), &Namespace::root()).unwrap();
        assert_eq!(name.to_string(), "Helper");
    }

    #[test]
    fn test_multi_dot_stem_is_skipped() {
        assert!(derive_construct_name(Path::new("User.test.php"), &Namespace::parse("App")).is_none());
    }

    #[test]
    fn test_dotted_directory_is_skipped() {
        let relative = PathBuf::from("Foo.Bar").join("Baz.php");
        assert!(derive_construct_name(&relative, &Namespace::parse("App")).is_none());
    }

    #[test]
    fn test_hidden_file_is_skipped() {
        // ".php" has stem ".php" and no extension
        assert!(derive_construct_name(Path::new(".php"), &Namespace::parse("App")).is_none());
    }

    #[test]
    fn test_parent_dir_component_is_rejected() {
        let relative = PathBuf::from("..").join("User.php");
        assert!(derive_construct_name(&relative, &Namespace::parse("App")).is_none());
    }
}
