//! In-memory workspace for tests and embedding.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use astrogen_core::{
    application::{
        ApplicationError,
        ports::{DependencySource, ProjectRegistry},
    },
    domain::ProjectPaths,
    error::AstrogenResult,
};

#[derive(Debug, Clone)]
struct MemoryProject {
    paths: ProjectPaths,
    dependencies: Option<BTreeSet<String>>,
}

/// Project registry and dependency source backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspace {
    projects: BTreeMap<String, MemoryProject>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project rooted at `root` with the given declared dependencies.
    pub fn with_project<I, S>(mut self, name: &str, root: impl Into<PathBuf>, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projects.insert(
            name.to_string(),
            MemoryProject {
                paths: ProjectPaths::conventional(root),
                dependencies: Some(dependencies.into_iter().map(Into::into).collect()),
            },
        );
        self
    }

    /// Add a project whose dependency data cannot be read.
    pub fn with_unreadable_project(mut self, name: &str, root: impl Into<PathBuf>) -> Self {
        self.projects.insert(
            name.to_string(),
            MemoryProject {
                paths: ProjectPaths::conventional(root),
                dependencies: None,
            },
        );
        self
    }
}

impl ProjectRegistry for MemoryWorkspace {
    fn project_exists(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }

    fn project_paths(&self, name: &str) -> AstrogenResult<ProjectPaths> {
        self.projects
            .get(name)
            .map(|p| p.paths.clone())
            .ok_or_else(|| {
                ApplicationError::ProjectNotFound {
                    name: name.to_string(),
                    available: self.project_names(),
                }
                .into()
            })
    }

    fn project_names(&self) -> Vec<String> {
        self.projects.keys().cloned().collect()
    }
}

impl DependencySource for MemoryWorkspace {
    fn declared_dependencies(&self, root: &Path) -> AstrogenResult<BTreeSet<String>> {
        self.projects
            .values()
            .find(|p| p.paths.root() == root)
            .and_then(|p| p.dependencies.clone())
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: root.join("package.json"),
                    reason: "No dependency data".into(),
                }
                .into()
            })
    }
}
