//! Infrastructure adapters for astrogen.
//!
//! This crate implements the ports defined in `astrogen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod dependencies;
pub mod filesystem;
pub mod renderer;
pub mod workspace;

// Re-export commonly used adapters
pub use dependencies::PackageJsonDependencies;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::AstroRenderer;
pub use workspace::{JsonWorkspace, MemoryWorkspace};
