//! Declared dependencies read from a project's `package.json`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use astrogen_core::{
    application::ports::{DependencySource, Filesystem},
    error::{AstrogenError, AstrogenResult},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::filesystem::LocalFilesystem;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PackageManifest {
    dependencies: BTreeMap<String, Value>,
    dev_dependencies: BTreeMap<String, Value>,
    peer_dependencies: BTreeMap<String, Value>,
}

/// Reads `<root>/package.json` and unions the keys of `dependencies`,
/// `devDependencies` and `peerDependencies`.
#[derive(Debug, Clone, Default)]
pub struct PackageJsonDependencies<F = LocalFilesystem> {
    filesystem: F,
}

impl PackageJsonDependencies<LocalFilesystem> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: Filesystem> PackageJsonDependencies<F> {
    /// Read manifests through another filesystem.
    pub fn with_filesystem(filesystem: F) -> Self {
        Self { filesystem }
    }
}

impl<F: Filesystem> DependencySource for PackageJsonDependencies<F> {
    #[instrument(skip(self), fields(root = %root.display()))]
    fn declared_dependencies(&self, root: &Path) -> AstrogenResult<BTreeSet<String>> {
        let path = root.join("package.json");
        let raw = self.filesystem.read_file(&path)?;
        let manifest: PackageManifest =
            serde_json::from_str(&raw).map_err(|e| AstrogenError::Configuration {
                message: format!("{} is not valid JSON: {}", path.display(), e),
            })?;

        let names: BTreeSet<String> = manifest
            .dependencies
            .into_keys()
            .chain(manifest.dev_dependencies.into_keys())
            .chain(manifest.peer_dependencies.into_keys())
            .collect();
        debug!(count = names.len(), "Dependencies read");
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;

    #[test]
    fn unions_all_dependency_tables() {
        let fs = MemoryFilesystem::new().with_file(
            "apps/blog/package.json",
            r#"{
                "name": "blog",
                "dependencies": { "astro": "^4.0.0" },
                "devDependencies": { "@astrojs/mdx": "^2.0.0" },
                "peerDependencies": { "@astrojs/markdoc": "*" }
            }"#,
        );
        let deps = PackageJsonDependencies::with_filesystem(fs)
            .declared_dependencies(Path::new("apps/blog"))
            .unwrap();

        assert_eq!(
            deps.into_iter().collect::<Vec<_>>(),
            ["@astrojs/markdoc", "@astrojs/mdx", "astro"]
        );
    }

    #[test]
    fn missing_tables_are_empty() {
        let fs = MemoryFilesystem::new().with_file("site/package.json", r#"{"name":"site"}"#);
        let deps = PackageJsonDependencies::with_filesystem(fs)
            .declared_dependencies(Path::new("site"))
            .unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let fs = MemoryFilesystem::new().with_file("site/package.json", "{ not json");
        let result =
            PackageJsonDependencies::with_filesystem(fs).declared_dependencies(Path::new("site"));
        assert!(matches!(result, Err(AstrogenError::Configuration { .. })));
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let result = PackageJsonDependencies::with_filesystem(MemoryFilesystem::new())
            .declared_dependencies(Path::new("site"));
        assert!(result.is_err());
    }
}
