//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a component" or "add a page to
//! every site in the workspace".

pub mod bulk;
pub mod collision;
pub mod format_detector;
pub mod generate_service;

pub use bulk::{BulkFailure, BulkReport, BulkSummary, expand_bulk};
pub use collision::{WriteVerdict, check_writable};
pub use format_detector::{ContentFormatDetector, ContentFormatProfile};
pub use generate_service::{GenerateService, GeneratedArtifact, GenerationPlan};
