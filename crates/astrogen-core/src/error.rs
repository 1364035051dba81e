//! Unified error handling for astrogen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for astrogen core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AstrogenError {
    /// Errors from the domain layer (business logic violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// A bulk-mode failure attributed to the project that caused it.
    #[error("[{project}] {source}")]
    Project {
        project: String,
        #[source]
        source: Box<AstrogenError>,
    },

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl AstrogenError {
    /// Attribute this error to `project`.
    pub fn in_project(self, project: impl Into<String>) -> Self {
        Self::Project {
            project: project.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, past any project attribution.
    pub fn root(&self) -> &AstrogenError {
        match self {
            Self::Project { source, .. } => source.root(),
            other => other,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Project { source, .. } => source.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Run `astrogen config list` to inspect the effective settings".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in astrogen".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation | crate::domain::ErrorCategory::Parse => {
                    ErrorCategory::Validation
                }
            },
            Self::Application(e) => e.category(),
            Self::Project { source, .. } => source.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type AstrogenResult<T> = Result<T, AstrogenError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> AstrogenResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> AstrogenResult<T> {
        self.map_err(|e| AstrogenError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn project_attribution_keeps_category() {
        let err = AstrogenError::from(ApplicationError::Collision {
            path: PathBuf::from("src/pages/about.astro"),
        })
        .in_project("docs");

        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.to_string().starts_with("[docs] "));
        assert!(err.to_string().contains("Use --overwrite to replace it"));
        assert!(matches!(err.root(), AstrogenError::Application(_)));
    }

    #[test]
    fn parse_errors_are_validation() {
        let err = AstrogenError::from(DomainError::InvalidProps {
            segment: "name:".into(),
            reason: "missing type".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
