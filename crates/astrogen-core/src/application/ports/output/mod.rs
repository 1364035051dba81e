//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `astrogen-adapters` crate provides implementations.

use std::collections::BTreeSet;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{ArtifactKind, ProjectPaths, RenderMetadata};
use crate::error::AstrogenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `astrogen_adapters::filesystem::LocalFilesystem` (production)
/// - `astrogen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The engine issues at most one `exists` and one `write_file` per resolved
/// target and never retries a write.
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> AstrogenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> AstrogenResult<()>;

    /// Read a file as UTF-8.
    fn read_file(&self, path: &Path) -> AstrogenResult<String>;
}

/// Port for template rendering.
///
/// Implemented by `astrogen_adapters::renderer::AstroRenderer`. The engine
/// never inspects the returned content.
#[cfg_attr(test, automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the content of one artifact.
    fn render(&self, kind: ArtifactKind, metadata: &RenderMetadata) -> AstrogenResult<String>;
}

/// Port for a project's declared dependency names.
///
/// Implemented by:
/// - `astrogen_adapters::dependencies::PackageJsonDependencies` (package.json)
/// - `astrogen_adapters::workspace::MemoryWorkspace` (testing)
#[cfg_attr(test, automock)]
pub trait DependencySource: Send + Sync {
    /// Names declared by the project at `root`. Missing or malformed data is
    /// an error; callers decide whether to fall back.
    fn declared_dependencies(&self, root: &Path) -> AstrogenResult<BTreeSet<String>>;
}

/// Port for the workspace project registry.
///
/// Implemented by:
/// - `astrogen_adapters::workspace::JsonWorkspace` (project.json discovery)
/// - `astrogen_adapters::workspace::MemoryWorkspace` (testing)
#[cfg_attr(test, automock)]
pub trait ProjectRegistry: Send + Sync {
    /// Whether the workspace declares a project named `name`.
    fn project_exists(&self, name: &str) -> bool;

    /// Conventional directories of the project named `name`.
    fn project_paths(&self, name: &str) -> AstrogenResult<ProjectPaths>;

    /// Every project name, sorted.
    fn project_names(&self) -> Vec<String>;
}
