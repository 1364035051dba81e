//! Plumbing shared by the `page`, `component`, `content` and `file`
//! commands.
//!
//! Responsibility: turn the common flags into a core request, run it in one
//! project or in bulk, and display results. No business logic lives here.

use std::path::Path;

use tracing::{info, instrument, warn};

use astrogen_adapters::{AstroRenderer, JsonWorkspace, LocalFilesystem, PackageJsonDependencies};
use astrogen_core::{
    application::{BulkReport, GenerateService, GeneratedArtifact},
    domain::{GenerationRequest, GenerationRequestBuilder, HasName},
    error::AstrogenError,
};

use crate::{
    cli::{GlobalArgs, TargetArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Everything a generator command needs after argument parsing.
pub struct Context {
    pub global: GlobalArgs,
    pub config: AppConfig,
    pub output: OutputManager,
}

impl Context {
    /// Workspace root: `--workspace`, else `workspace.root`.
    pub fn workspace_root(&self) -> &Path {
        self.global
            .workspace
            .as_deref()
            .unwrap_or(&self.config.workspace.root)
    }
}

/// Wire the real adapters into a [`GenerateService`].
pub fn build_service(ctx: &Context) -> CliResult<(GenerateService, JsonWorkspace)> {
    let workspace = JsonWorkspace::discover_with_source_dir(
        ctx.workspace_root(),
        &ctx.config.workspace.src_dir,
    )?;
    if workspace.is_empty() {
        warn!(root = %workspace.root().display(), "No project.json found in workspace");
    }

    let service = GenerateService::new(
        Box::new(workspace.clone()),
        Box::new(PackageJsonDependencies::new()),
        Box::new(AstroRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    Ok((service, workspace))
}

/// Apply the flags every generator shares.
pub fn apply_target_args(
    builder: GenerationRequestBuilder<HasName>,
    target: &TargetArgs,
    config: &AppConfig,
) -> GenerationRequestBuilder<HasName> {
    let mut builder = builder
        .overwrite(target.overwrite || config.generate.overwrite)
        .dry_run(target.dry_run);
    if let Some(project) = &target.project {
        builder = builder.project(project.as_str());
    }
    if let Some(directory) = &target.directory {
        builder = builder.directory(directory.as_str());
    }
    if let Some(ext) = &target.ext {
        builder = builder.extension(ext.as_str());
    }
    builder
}

/// Build the request and generate it in one project, or in every project of
/// `--projects`.
#[instrument(skip_all, fields(name = %target.name, bulk = !target.projects.is_empty()))]
pub fn run(
    builder: GenerationRequestBuilder<HasName>,
    target: &TargetArgs,
    ctx: Context,
) -> CliResult<()> {
    let request = apply_target_args(builder, target, &ctx.config)
        .build()
        .map_err(AstrogenError::from)?;
    let (service, workspace) = build_service(&ctx)?;

    if target.projects.is_empty() {
        let artifact = service.generate(&request)?;
        report_artifact(&artifact, workspace.root(), &ctx.output)?;
        ctx.output.json(&artifact)?;
        return Ok(());
    }

    run_bulk(&service, &request, &target.projects, workspace.root(), &ctx.output)
}

fn run_bulk(
    service: &GenerateService,
    template: &GenerationRequest,
    projects: &[String],
    root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let report: BulkReport = service.generate_bulk(template, projects)?;

    output.header(&format!("Generated in {} project(s)", report.generated.len()))?;
    for artifact in &report.generated {
        report_artifact(artifact, root, output)?;
    }
    for failure in &report.failures {
        output.error(&format!("[{}] {}", failure.project, failure.error))?;
    }
    output.json(&report.summary())?;

    if report.is_success() {
        info!(count = report.generated.len(), "Bulk generation completed");
        Ok(())
    } else {
        Err(CliError::PartialWrite {
            failed: report.failures.len(),
            total: report.failures.len() + report.generated.len(),
        })
    }
}

fn report_artifact(
    artifact: &GeneratedArtifact,
    root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let path = display_path(artifact.target.full_path(), root);
    match (artifact.dry_run, artifact.overwritten) {
        (true, false) => output.info(&format!("Would create {path} ({} bytes)", artifact.bytes))?,
        (true, true) => output.info(&format!("Would overwrite {path} ({} bytes)", artifact.bytes))?,
        (false, false) => output.success(&format!("Created {path}"))?,
        (false, true) => output.success(&format!("Overwrote {path}"))?,
    }
    Ok(())
}

/// `path` relative to the workspace root when it lies inside it.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
