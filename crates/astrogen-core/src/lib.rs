//! astrogen core - scaffolding resolution for Astro projects.
//!
//! This crate provides the domain and application layers of the `astrogen`
//! generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           astrogen-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerateService, bulk, format cache)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderer, Registry, Deps)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    astrogen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, JsonWorkspace, etc.)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (naming, props, paths, kinds, formats)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use astrogen_core::prelude::*;
//!
//! let request = GenerationRequest::builder(ArtifactKind::Component)
//!     .name("user-card")
//!     .project("blog")
//!     .props("name:string, age:number")
//!     .build()
//!     .unwrap();
//!
//! // With injected adapters:
//! let service = GenerateService::new(registry, dependencies, renderer, filesystem);
//! service.generate(&request).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BulkReport, GenerateService, GeneratedArtifact, GenerationPlan,
        ports::{DependencySource, Filesystem, ProjectRegistry, TemplateRenderer},
    };
    pub use crate::domain::{
        ArtifactKind, ContentFormat, Extension, GenerationRequest, ProjectPaths, PropsInterface,
        RenderMetadata,
    };
    pub use crate::error::{AstrogenError, AstrogenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
