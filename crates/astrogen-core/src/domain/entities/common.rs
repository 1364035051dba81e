use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// A filesystem path guaranteed to be **relative** and to stay below its base.
///
/// Directories supplied by callers (`--directory`) and directories implied by
/// nested names (`blog/[slug]`) are both joined under a project's base
/// directory. Neither may be absolute nor climb out with `..`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// The empty path (joins as a no-op).
    pub fn empty() -> Self {
        Self(PathBuf::new())
    }

    /// Parse a `/`-separated path, dropping empty and `.` segments.
    ///
    /// # Errors
    /// [`DomainError::AbsolutePathNotAllowed`] for absolute input and
    /// [`DomainError::InvalidDirectory`] for `..` segments.
    pub fn try_new(path: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = path.as_ref().trim();
        if raw.starts_with('/') || raw.starts_with('\\') || Path::new(raw).is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: raw.to_string(),
            });
        }

        let mut buf = PathBuf::new();
        for segment in raw.split(['/', '\\']).map(str::trim) {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(DomainError::InvalidDirectory {
                        directory: raw.to_string(),
                        reason: "'..' segments are not allowed".into(),
                    });
                }
                s => buf.push(s),
            }
        }
        Ok(Self(buf))
    }

    /// Join another relative path, preserving the invariant.
    pub fn join(&self, other: &RelativePath) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        Self(self.0.join(&other.0))
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    /// Segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.components().filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.segments().collect();
        f.write_str(&joined.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_accepts_relative() {
        let p = RelativePath::try_new("blog/posts").unwrap();
        assert_eq!(p.as_path(), Path::new("blog/posts"));
        assert_eq!(p.to_string(), "blog/posts");
    }

    #[test]
    fn drops_empty_and_current_segments() {
        let p = RelativePath::try_new("./blog//posts/").unwrap();
        assert_eq!(p.segments().collect::<Vec<_>>(), ["blog", "posts"]);
    }

    #[test]
    fn empty_input_is_empty_path() {
        assert!(RelativePath::try_new("").unwrap().is_empty());
        assert!(RelativePath::try_new("./").unwrap().is_empty());
    }

    #[test]
    fn try_new_rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn try_new_rejects_parent_segments() {
        assert!(matches!(
            RelativePath::try_new("blog/../../secrets"),
            Err(DomainError::InvalidDirectory { .. })
        ));
    }

    #[test]
    fn join_keeps_order() {
        let explicit = RelativePath::try_new("marketing").unwrap();
        let implied = RelativePath::try_new("blog").unwrap();
        assert_eq!(explicit.join(&implied).to_string(), "marketing/blog");
        assert_eq!(RelativePath::empty().join(&implied), implied);
    }
}
