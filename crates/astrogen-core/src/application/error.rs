//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The target file exists and overwriting was not requested.
    #[error("File already exists at {path}. Use --overwrite to replace it")]
    Collision { path: PathBuf },

    /// The workspace has no project with this name. `available` lists the
    /// projects it does have, sorted.
    #[error("Project '{name}' not found in the workspace")]
    ProjectNotFound {
        name: String,
        available: Vec<String>,
    },

    /// Bulk mode was invoked with an empty project list.
    #[error("No target projects given")]
    NoTargetProjects,

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared state was poisoned by a panicking thread.
    #[error("Internal store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Collision { path } => vec![
                format!("{} is already there", path.display()),
                "Re-run with --overwrite to replace it".into(),
                "Or pick another name with a different --directory".into(),
            ],
            Self::ProjectNotFound { name, available } => {
                let mut suggestions = vec![format!("No project.json declares '{}'", name)];
                if available.is_empty() {
                    suggestions.push("No projects were found; point --workspace at the right root".into());
                } else {
                    suggestions.push(format!("Known projects: {}", available.join(", ")));
                    suggestions.push("Check the spelling, or point --workspace at the right root".into());
                }
                suggestions
            }
            Self::NoTargetProjects => vec![
                "Pass --project NAME or --projects a,b,c".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Collision { .. } => ErrorCategory::Conflict,
            Self::ProjectNotFound { .. } => ErrorCategory::NotFound,
            Self::NoTargetProjects => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError | Self::RenderingFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_not_found_lists_known_projects() {
        let err = ApplicationError::ProjectNotFound {
            name: "shop".into(),
            available: vec!["blog".into(), "docs".into()],
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().contains(&"Known projects: blog, docs".to_string()));
    }

    #[test]
    fn project_not_found_in_empty_workspace_points_at_root() {
        let err = ApplicationError::ProjectNotFound {
            name: "shop".into(),
            available: Vec::new(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--workspace")));
        assert!(!err.suggestions().iter().any(|s| s.starts_with("Known projects")));
    }
}
