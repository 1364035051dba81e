//! Core domain layer for astrogen.
//!
//! Pure resolution logic: naming, props parsing, nested names, path
//! resolution and the kind/format registries. All I/O, rendering and
//! dependency lookup happen behind ports in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the outer layers
//! - **Immutable entities**: Requests and targets are never mutated after construction

pub mod capabilities;
pub mod entities;
pub mod error;
pub mod naming;
pub mod paths;
pub mod props;
pub mod value_objects;

mod validation;

pub use capabilities::{BaseDir, FORMAT_REGISTRY, KIND_REGISTRY, select_format};
pub use entities::{
    ArtifactIdentity, GenerationRequest, GenerationRequestBuilder, HasName, NestedName, NoName, ProjectPaths,
    RelativePath, RenderMetadata, ResolvedTarget, split_nested_name,
};
pub use error::{DomainError, ErrorCategory};
pub use naming::{normalize_file_name, to_camel_case, to_kebab_case, to_pascal_case, to_title_case};
pub use paths::{resolve_relative_import_path, resolve_target_path};
pub use props::{PropDefinition, PropsInterface, parse_props_string};
pub use validation::DomainValidator;
pub use value_objects::{ArtifactKind, ContentFormat, Extension};
