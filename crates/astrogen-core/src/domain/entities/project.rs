use std::path::{Path, PathBuf};

use crate::domain::capabilities::BaseDir;

/// Read-only view of a project's conventional directories.
///
/// Computed once per project root; every directory derives from `root` and
/// the source root (`<root>/src` unless the project declares another).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
    src_dir: PathBuf,
    pages_dir: PathBuf,
    components_dir: PathBuf,
    content_dir: PathBuf,
    layouts_dir: PathBuf,
}

impl ProjectPaths {
    /// Paths for a project using the `src/` convention.
    pub fn conventional(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let src_dir = root.join("src");
        Self::from_parts(root, src_dir)
    }

    /// Paths for a project whose source root is `src_dir`. A relative
    /// `src_dir` is taken relative to `root`.
    pub fn with_source_root(root: impl Into<PathBuf>, src_dir: impl AsRef<Path>) -> Self {
        let root = root.into();
        let src_dir = root.join(src_dir);
        Self::from_parts(root, src_dir)
    }

    fn from_parts(root: PathBuf, src_dir: PathBuf) -> Self {
        Self {
            pages_dir: src_dir.join("pages"),
            components_dir: src_dir.join("components"),
            content_dir: src_dir.join("content"),
            layouts_dir: src_dir.join("layouts"),
            src_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }
    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }
    pub fn components_dir(&self) -> &Path {
        &self.components_dir
    }
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }
    pub fn layouts_dir(&self) -> &Path {
        &self.layouts_dir
    }

    /// The directory a base-dir selector points at. `collection` is only
    /// consulted for [`BaseDir::Content`].
    pub fn base_dir(&self, base: BaseDir, collection: Option<&str>) -> PathBuf {
        match base {
            BaseDir::Pages => self.pages_dir.clone(),
            BaseDir::Components => self.components_dir.clone(),
            BaseDir::Content => match collection {
                Some(c) => self.content_dir.join(c),
                None => self.content_dir.clone(),
            },
            BaseDir::Source => self.src_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventional_layout() {
        let paths = ProjectPaths::conventional("apps/blog");
        assert_eq!(paths.src_dir(), Path::new("apps/blog/src"));
        assert_eq!(paths.pages_dir(), Path::new("apps/blog/src/pages"));
        assert_eq!(paths.components_dir(), Path::new("apps/blog/src/components"));
        assert_eq!(paths.content_dir(), Path::new("apps/blog/src/content"));
        assert_eq!(paths.layouts_dir(), Path::new("apps/blog/src/layouts"));
    }

    #[test]
    fn custom_source_root() {
        let paths = ProjectPaths::with_source_root("apps/docs", "site");
        assert_eq!(paths.pages_dir(), Path::new("apps/docs/site/pages"));
    }

    #[test]
    fn content_base_includes_collection() {
        let paths = ProjectPaths::conventional("apps/blog");
        assert_eq!(
            paths.base_dir(BaseDir::Content, Some("posts")),
            PathBuf::from("apps/blog/src/content/posts")
        );
        assert_eq!(
            paths.base_dir(BaseDir::Source, None),
            PathBuf::from("apps/blog/src")
        );
    }
}
