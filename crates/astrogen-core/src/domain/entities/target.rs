//! The resolved location of a generated artifact.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::Extension;

/// Where an artifact lives. Produced once per request.
///
/// Invariants, enforced by the constructor:
/// - `full_path == directory.join(file_name)`
/// - `file_name` ends with `extension` when there is one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget {
    full_path: PathBuf,
    directory: PathBuf,
    file_name: String,
    extension: Option<Extension>,
}

impl ResolvedTarget {
    /// Build a target, appending `extension` to `file_base_name` unless it
    /// already ends with it.
    pub fn new(
        directory: impl Into<PathBuf>,
        file_base_name: &str,
        extension: Option<Extension>,
    ) -> Self {
        let directory = directory.into();
        let file_name = match &extension {
            Some(ext) if !ext.terminates(file_base_name) => format!("{file_base_name}{ext}"),
            _ => file_base_name.to_string(),
        };
        Self {
            full_path: directory.join(&file_name),
            directory,
            file_name,
            extension,
        }
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }
    pub fn directory(&self) -> &Path {
        &self.directory
    }
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
    pub fn extension(&self) -> Option<&Extension> {
        self.extension.as_ref()
    }
}

impl fmt::Display for ResolvedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_missing_extension() {
        let t = ResolvedTarget::new("src/components", "user-card", Some(Extension::new("astro")));
        assert_eq!(t.file_name(), "user-card.astro");
        assert_eq!(t.full_path(), Path::new("src/components/user-card.astro"));
        assert_eq!(t.full_path(), t.directory().join(t.file_name()));
    }

    #[test]
    fn does_not_duplicate_present_extension() {
        let t = ResolvedTarget::new("src", "robots.txt", Some(Extension::new(".txt")));
        assert_eq!(t.file_name(), "robots.txt");
    }

    #[test]
    fn no_extension_keeps_name() {
        let t = ResolvedTarget::new("src", "LICENSE", None);
        assert_eq!(t.file_name(), "LICENSE");
        assert!(t.extension().is_none());
    }
}
