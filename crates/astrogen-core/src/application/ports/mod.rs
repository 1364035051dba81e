//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `astrogen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: existence checks, directory creation and writes
//!   - `TemplateRenderer`: artifact content
//!   - `DependencySource`: declared dependency names per project
//!   - `ProjectRegistry`: workspace project lookup
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DependencySource, Filesystem, ProjectRegistry, TemplateRenderer};

#[cfg(test)]
pub use output::{MockDependencySource, MockFilesystem, MockProjectRegistry, MockTemplateRenderer};
