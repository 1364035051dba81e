//! Generate Service - main application orchestrator.
//!
//! Turns a validated [`GenerationRequest`] into a written artifact:
//! 1. Look up the project and its conventional directories
//! 2. Split the nested name and derive the artifact identity
//! 3. Pick the extension (explicit, embedded, kind default, detected format)
//! 4. Resolve the target path and run the collision guard
//! 5. Render content from the resolved metadata
//! 6. Write (unless dry run)
//!
//! Steps 1-5 form the plan and never write; bulk mode plans every project
//! before writing any.

use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{DependencySource, Filesystem, ProjectRegistry, TemplateRenderer},
        services::{
            collision::{WriteVerdict, check_writable},
            format_detector::ContentFormatDetector,
        },
    },
    domain::{
        ArtifactIdentity, ArtifactKind, ContentFormat, DomainError, Extension, GenerationRequest,
        ProjectPaths, RelativePath, RenderMetadata, ResolvedTarget, paths, split_nested_name,
        to_title_case,
    },
    error::{AstrogenError, AstrogenResult},
};

/// Everything decided about one artifact before any write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationPlan {
    pub project: String,
    pub target: ResolvedTarget,
    pub metadata: RenderMetadata,
    pub content: String,
    /// The target exists and will be replaced.
    pub overwrite: bool,
    pub dry_run: bool,
}

/// The outcome of generating one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub project: String,
    pub target: ResolvedTarget,
    pub overwritten: bool,
    pub bytes: usize,
    pub dry_run: bool,
}

/// Main generation service.
///
/// Owns the content format cache; call [`reset`](Self::reset) between
/// independent runs sharing one service.
pub struct GenerateService {
    pub(crate) registry: Box<dyn ProjectRegistry>,
    pub(crate) dependencies: Box<dyn DependencySource>,
    pub(crate) renderer: Box<dyn TemplateRenderer>,
    pub(crate) filesystem: Box<dyn Filesystem>,
    detector: ContentFormatDetector,
    today: Option<NaiveDate>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use astrogen_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     registry,     // impl ProjectRegistry
    ///     dependencies, // impl DependencySource
    ///     renderer,     // impl TemplateRenderer
    ///     filesystem,   // impl Filesystem
    /// );
    /// ```
    pub fn new(
        registry: Box<dyn ProjectRegistry>,
        dependencies: Box<dyn DependencySource>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            registry,
            dependencies,
            renderer,
            filesystem,
            detector: ContentFormatDetector::new(),
            today: None,
        }
    }

    /// Pin the date used for content `pubDate` defaults.
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Clear the content format cache.
    pub fn reset(&self) {
        debug!(entries = self.detector.len(), "Clearing content format cache");
        self.detector.clear();
    }

    pub fn detector(&self) -> &ContentFormatDetector {
        &self.detector
    }

    pub(crate) fn project_not_found(&self, name: &str) -> AstrogenError {
        let mut available = self.registry.project_names();
        available.sort();
        ApplicationError::ProjectNotFound {
            name: name.to_string(),
            available,
        }
        .into()
    }

    /// Generate one artifact: plan, then write unless the request is a dry run.
    #[instrument(skip_all, fields(request = %request))]
    pub fn generate(&self, request: &GenerationRequest) -> AstrogenResult<GeneratedArtifact> {
        let plan = self.plan(request)?;
        self.execute(plan)
    }

    /// Run every check and render the content without writing anything.
    #[instrument(skip_all, fields(request = %request))]
    pub fn plan(&self, request: &GenerationRequest) -> AstrogenResult<GenerationPlan> {
        let project = request
            .project()
            .ok_or(DomainError::MissingRequiredField { field: "project" })?;
        if !self.registry.project_exists(project) {
            return Err(self.project_not_found(project));
        }
        let project_paths = self.registry.project_paths(project)?;

        let kind = request.kind();
        let nested = split_nested_name(request.name());
        let implied = RelativePath::try_new(&nested.implied_directory)?;
        let (stem, embedded) = paths::split_leaf_extension(kind, &nested.file_base_name);
        let identity = match kind {
            ArtifactKind::File => ArtifactIdentity::for_file(stem),
            _ => ArtifactIdentity::new(stem),
        };

        let (extension, format) = self.select_extension(request, &project_paths, embedded);

        let target = paths::resolve_target_path(
            kind,
            &project_paths,
            &identity,
            request.directory(),
            &implied,
            request.collection(),
            extension.as_ref(),
        )?;
        debug!(target = %target, "Target resolved");

        let verdict = check_writable(
            |p| self.filesystem.exists(p),
            target.full_path(),
            request.overwrite(),
        )?;

        let metadata = self.build_metadata(request, &project_paths, &identity, &target, format);
        let content = self.renderer.render(kind, &metadata)?;

        Ok(GenerationPlan {
            project: project.to_string(),
            target,
            metadata,
            content,
            overwrite: verdict == WriteVerdict::Overwrite,
            dry_run: request.dry_run(),
        })
    }

    /// Write a plan's content to its target.
    pub(crate) fn execute(&self, plan: GenerationPlan) -> AstrogenResult<GeneratedArtifact> {
        let bytes = plan.content.len();
        if plan.dry_run {
            info!(path = %plan.target, "Dry run, not writing");
        } else {
            self.filesystem.create_dir_all(plan.target.directory())?;
            self.filesystem
                .write_file(plan.target.full_path(), &plan.content)?;
            info!(
                path = %plan.target,
                bytes,
                overwritten = plan.overwrite,
                "Artifact written"
            );
        }

        Ok(GeneratedArtifact {
            project: plan.project,
            target: plan.target,
            overwritten: plan.overwrite,
            bytes,
            dry_run: plan.dry_run,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// The target extension and, for content, its format. The detector only
    /// runs for content without an explicit or embedded extension.
    fn select_extension(
        &self,
        request: &GenerationRequest,
        project_paths: &ProjectPaths,
        embedded: Option<Extension>,
    ) -> (Option<Extension>, Option<ContentFormat>) {
        let kind = request.kind();
        let chosen = request.extension().cloned().or(embedded);

        if kind != ArtifactKind::Content {
            return (paths::effective_extension(kind, chosen.as_ref(), None, None), None);
        }

        match chosen {
            Some(ext) => {
                let format = ContentFormat::from_extension(&ext);
                (Some(ext), format)
            }
            None => {
                let profile = self
                    .detector
                    .detect(project_paths.root(), self.dependencies.as_ref());
                (Some(profile.default_extension), Some(profile.format))
            }
        }
    }

    fn build_metadata(
        &self,
        request: &GenerationRequest,
        project_paths: &ProjectPaths,
        identity: &ArtifactIdentity,
        target: &ResolvedTarget,
        format: Option<ContentFormat>,
    ) -> RenderMetadata {
        let kind = request.kind();
        let title = request
            .title()
            .map_or_else(|| to_title_case(&identity.class_name), str::to_string);

        let mut metadata = RenderMetadata::for_identity(kind, identity, title.clone());
        metadata.props = request.props().clone();
        metadata.format = format;
        metadata.collection = request.collection().map(str::to_string);
        metadata.extension = target.extension().cloned();
        metadata.frontmatter = request.frontmatter().clone();

        match kind {
            ArtifactKind::Page => {
                if let Some(layout) = request.layout() {
                    let layout_dir =
                        paths::probe_layout_dir(project_paths, |d| self.filesystem.exists(d));
                    metadata.layout_import_path = Some(paths::layout_import_path(
                        target.directory(),
                        layout_dir,
                        layout,
                    ));
                    metadata.layout_name = Some(layout_component_name(layout));
                }
            }
            ArtifactKind::Content => {
                let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                metadata
                    .frontmatter
                    .entry("title".into())
                    .or_insert(Value::String(title));
                metadata
                    .frontmatter
                    .entry("pubDate".into())
                    .or_insert_with(|| Value::String(today.format("%Y-%m-%d").to_string()));
            }
            ArtifactKind::Component | ArtifactKind::File => {}
        }

        metadata
    }
}

/// `BaseLayout.astro` and `layouts/Base` both name the component after the
/// file stem.
fn layout_component_name(layout: &str) -> String {
    let file = Path::new(layout)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(layout);
    crate::domain::to_pascal_case(file)
}
