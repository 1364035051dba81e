// ============================================================================
// domain/error.rs - VALIDATION AND PARSE ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (a bulk batch reports the same error for several projects)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid directory '{directory}': {reason}")]
    InvalidDirectory { directory: String, reason: String },

    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Extension '{extension}' is not allowed for {kind} artifacts")]
    InvalidExtension {
        kind: String,
        extension: String,
        allowed: Vec<&'static str>,
    },

    #[error("{kind} artifacts do not accept props")]
    PropsNotSupported { kind: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Parse Errors
    // ========================================================================
    #[error("Invalid props specification at '{segment}': {reason}")]
    InvalidProps { segment: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                "Use --help to see the required arguments".into(),
            ],
            Self::InvalidName { name, reason } => vec![
                format!("'{}' cannot be used: {}", name, reason),
                "Use letters, digits, '-', '_' and '/' for nested routes".into(),
                "Dynamic routes keep their brackets: blog/[slug]".into(),
            ],
            Self::InvalidDirectory { .. } | Self::AbsolutePathNotAllowed { .. } => vec![
                "Directories are relative to the artifact's base directory".into(),
                "Remove leading '/' and any '..' segments".into(),
            ],
            Self::InvalidExtension { kind, allowed, .. } => vec![
                format!("Extensions accepted for {}:", kind),
                format!("  {}", allowed.join(", ")),
            ],
            Self::InvalidProps { segment, .. } => vec![
                format!("Check the segment '{}'", segment),
                "Props use the form name:type or name?:type, separated by commas".into(),
                "Example: --props \"title:string, tags?:Array<string>\"".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProps { .. } => ErrorCategory::Parse,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Parse,
}
