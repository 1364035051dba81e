pub mod common;
pub mod identity;
pub mod metadata;
pub mod project;
pub mod request;
pub mod target;

pub use common::RelativePath;
pub use identity::{ArtifactIdentity, NestedName, split_nested_name};
pub use metadata::RenderMetadata;
pub use project::ProjectPaths;
pub use request::{GenerationRequest, GenerationRequestBuilder, HasName, NoName};
pub use target::ResolvedTarget;
