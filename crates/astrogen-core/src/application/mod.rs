//! Application layer for astrogen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, bulk fan-out)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    BulkFailure, BulkReport, ContentFormatDetector, ContentFormatProfile, GenerateService,
    GeneratedArtifact, GenerationPlan, WriteVerdict, check_writable, expand_bulk,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DependencySource, Filesystem, ProjectRegistry, TemplateRenderer};

pub use error::ApplicationError;
