//! Project discovery from `project.json` files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use astrogen_core::{
    application::{ApplicationError, ports::ProjectRegistry},
    domain::ProjectPaths,
    error::{AstrogenError, AstrogenResult},
};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use crate::filesystem::map_io_error;

const PROJECT_FILE: &str = "project.json";
const SKIPPED_DIRS: &[&str] = &["node_modules", "dist"];
const DEFAULT_SOURCE_DIR: &str = "src";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectManifest {
    name: Option<String>,
    source_root: Option<String>,
}

/// Registry of the projects declared by `project.json` files under a
/// workspace root.
#[derive(Debug, Clone)]
pub struct JsonWorkspace {
    root: PathBuf,
    projects: BTreeMap<String, ProjectPaths>,
}

impl JsonWorkspace {
    /// Walk `root` for `project.json` files.
    ///
    /// `node_modules`, `dist` and hidden directories are skipped. When two
    /// manifests declare the same name the first one in path order wins.
    ///
    /// # Errors
    /// The root cannot be resolved, or a manifest is unreadable or not JSON.
    pub fn discover(root: impl AsRef<Path>) -> AstrogenResult<Self> {
        Self::discover_with_source_dir(root, DEFAULT_SOURCE_DIR)
    }

    /// Like [`discover`](Self::discover), with `source_dir` as the source
    /// directory of projects that declare no `sourceRoot`.
    #[instrument(skip_all, fields(root = %root.as_ref().display(), source_dir = %source_dir))]
    pub fn discover_with_source_dir(
        root: impl AsRef<Path>,
        source_dir: &str,
    ) -> AstrogenResult<Self> {
        let root = root
            .as_ref()
            .canonicalize()
            .map_err(|e| map_io_error(root.as_ref(), e, "resolve workspace root"))?;

        let mut projects = BTreeMap::new();
        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped(e));

        for entry in walker {
            let entry = entry.map_err(|e| AstrogenError::Configuration {
                message: format!("Failed to scan workspace: {e}"),
            })?;
            if !entry.file_type().is_file() || entry.file_name() != PROJECT_FILE {
                continue;
            }

            let (name, paths) = read_project(&root, entry.path(), source_dir)?;
            if projects.contains_key(&name) {
                warn!(project = %name, path = %entry.path().display(), "Duplicate project name, ignoring");
                continue;
            }
            debug!(project = %name, root = %paths.root().display(), "Project found");
            projects.insert(name, paths);
        }

        info!(count = projects.len(), "Workspace scanned");
        Ok(Self { root, projects })
    }

    /// The canonical workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}

fn read_project(
    workspace: &Path,
    manifest_path: &Path,
    source_dir: &str,
) -> AstrogenResult<(String, ProjectPaths)> {
    let raw = std::fs::read_to_string(manifest_path)
        .map_err(|e| map_io_error(manifest_path, e, "read project manifest"))?;
    let manifest: ProjectManifest =
        serde_json::from_str(&raw).map_err(|e| AstrogenError::Configuration {
            message: format!("{} is not valid JSON: {}", manifest_path.display(), e),
        })?;

    let project_root = manifest_path.parent().unwrap_or(workspace).to_path_buf();
    let name = manifest
        .name
        .filter(|n| !n.trim().is_empty())
        .or_else(|| {
            project_root
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
        })
        .ok_or_else(|| AstrogenError::Configuration {
            message: format!("{} declares no project name", manifest_path.display()),
        })?;

    let paths = match manifest.source_root.as_deref().map(str::trim) {
        Some(source_root) if !source_root.is_empty() => {
            // Nx writes sourceRoot relative to the workspace; accept
            // project-relative values too.
            let from_workspace = workspace.join(source_root);
            let src = if from_workspace.starts_with(&project_root) {
                from_workspace
            } else {
                project_root.join(source_root)
            };
            ProjectPaths::with_source_root(project_root, src)
        }
        _ => ProjectPaths::with_source_root(project_root, source_dir),
    };
    Ok((name, paths))
}

impl ProjectRegistry for JsonWorkspace {
    fn project_exists(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }

    fn project_paths(&self, name: &str) -> AstrogenResult<ProjectPaths> {
        self.projects.get(name).cloned().ok_or_else(|| {
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
