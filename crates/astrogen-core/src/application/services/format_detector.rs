//! Per-project content format detection with an explicit memoization table.

use std::path::{Path, PathBuf};

use dashmap::DashMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    application::ports::DependencySource,
    domain::{ContentFormat, Extension, select_format},
};

/// The detected content format of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentFormatProfile {
    pub project_root: PathBuf,
    pub format: ContentFormat,
    pub default_extension: Extension,
}

/// Detects a project's content format from its declared dependencies.
///
/// Results are cached per project root until [`clear`](Self::clear) is
/// called. The cache is owned by the detector instance, so independent
/// services never share state.
#[derive(Debug, Default)]
pub struct ContentFormatDetector {
    cache: DashMap<PathBuf, ContentFormatProfile>,
}

impl ContentFormatDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detect the format for `root`, reading dependency data at most once
    /// per root.
    ///
    /// Unreadable or malformed dependency data counts as "no integrations"
    /// and yields markdown.
    pub fn detect(&self, root: &Path, source: &dyn DependencySource) -> ContentFormatProfile {
        if let Some(cached) = self.cache.get(root) {
            debug!(root = %root.display(), format = %cached.format, "Content format cache hit");
            return cached.clone();
        }

        self.cache
            .entry(root.to_path_buf())
            .or_insert_with(|| {
                let format = match source.declared_dependencies(root) {
                    Ok(deps) => select_format(&deps),
                    Err(e) => {
                        warn!(
                            root = %root.display(),
                            error = %e,
                            "Could not read dependencies, defaulting content format to markdown"
                        );
                        ContentFormat::Markdown
                    }
                };
                debug!(root = %root.display(), %format, "Content format detected");
                ContentFormatProfile {
                    project_root: root.to_path_buf(),
                    format,
                    default_extension: format.extension(),
                }
            })
            .clone()
    }

    /// Forget every cached profile.
    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::MockDependencySource;
    use std::collections::BTreeSet;

    fn deps(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reads_dependencies_once_per_root() {
        let mut source = MockDependencySource::new();
        source
            .expect_declared_dependencies()
            .times(1)
            .returning(|_| Ok(deps(&["astro", "@astrojs/mdx"])));

        let detector = ContentFormatDetector::new();
        let first = detector.detect(Path::new("apps/blog"), &source);
        let second = detector.detect(Path::new("apps/blog"), &source);

        assert_eq!(first.format, ContentFormat::Mdx);
        assert_eq!(first.default_extension.as_str(), ".mdx");
        assert_eq!(first, second);
        assert_eq!(detector.len(), 1);
    }

    #[test]
    fn clear_forces_a_fresh_read() {
        let mut source = MockDependencySource::new();
        source
            .expect_declared_dependencies()
            .times(2)
            .returning(|_| Ok(deps(&["@astrojs/markdoc"])));

        let detector = ContentFormatDetector::new();
        detector.detect(Path::new("apps/docs"), &source);
        detector.clear();
        assert!(detector.is_empty());
        let profile = detector.detect(Path::new("apps/docs"), &source);
        assert_eq!(profile.format, ContentFormat::Markdoc);
    }

    #[test]
    fn unreadable_dependencies_fall_back_to_markdown() {
        let mut source = MockDependencySource::new();
        source.expect_declared_dependencies().returning(|root| {
            Err(ApplicationError::FilesystemError {
                path: root.join("package.json"),
                reason: "malformed".into(),
            }
            .into())
        });

        let detector = ContentFormatDetector::new();
        let profile = detector.detect(Path::new("apps/site"), &source);
        assert_eq!(profile.format, ContentFormat::Markdown);
        assert_eq!(profile.default_extension.as_str(), ".md");
    }

    #[test]
    fn roots_are_cached_independently() {
        let mut source = MockDependencySource::new();
        source
            .expect_declared_dependencies()
            .returning(|root| {
                if root == Path::new("a") {
                    Ok(deps(&["@astrojs/mdx"]))
                } else {
                    Ok(deps(&["astro-asciidoc"]))
                }
            });

        let detector = ContentFormatDetector::new();
        assert_eq!(detector.detect(Path::new("a"), &source).format, ContentFormat::Mdx);
        assert_eq!(
            detector.detect(Path::new("b"), &source).format,
            ContentFormat::Asciidoc
        );
        assert_eq!(detector.len(), 2);
    }
}
