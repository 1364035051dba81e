//! Bulk fan-out: one request, many projects.
//!
//! Contract: validate and plan every project, then write. A failure in any
//! project during planning aborts the batch before the first write.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        services::generate_service::{GenerateService, GeneratedArtifact, GenerationPlan},
    },
    domain::GenerationRequest,
    error::{AstrogenError, AstrogenResult},
};

/// A write that failed after planning succeeded for the whole batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkFailure {
    pub project: String,
    pub error: AstrogenError,
}

/// Outcome of a bulk generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkReport {
    pub generated: Vec<GeneratedArtifact>,
    pub failures: Vec<BulkFailure>,
}

/// Serializable view of a [`BulkReport`], for JSON output.
#[derive(Debug, Serialize)]
pub struct BulkSummary<'a> {
    pub generated: &'a [GeneratedArtifact],
    pub failures: Vec<(&'a str, String)>,
}

impl BulkReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> BulkSummary<'_> {
        BulkSummary {
            generated: &self.generated,
            failures: self
                .failures
                .iter()
                .map(|f| (f.project.as_str(), f.error.to_string()))
                .collect(),
        }
    }
}

/// Expand `request` into one request per project, carrying every option
/// except the project.
///
/// Duplicate project names are dropped, keeping the first occurrence.
///
/// # Errors
/// [`ApplicationError::NoTargetProjects`] for an empty list, or a domain
/// error attributed to a blank project name.
pub fn expand_bulk(
    request: &GenerationRequest,
    projects: &[String],
) -> AstrogenResult<Vec<GenerationRequest>> {
    let mut seen = HashSet::new();
    let mut expanded = Vec::with_capacity(projects.len());

    for project in projects {
        let name = project.trim();
        if !seen.insert(name.to_string()) {
            warn!(project = name, "Duplicate project in bulk request, ignoring");
            continue;
        }
        let per_project = request
            .with_project(name)
            .map_err(|e| AstrogenError::from(e).in_project(name))?;
        expanded.push(per_project);
    }

    if expanded.is_empty() {
        return Err(ApplicationError::NoTargetProjects.into());
    }
    Ok(expanded)
}

impl GenerateService {
    /// Generate `request` in every project of `projects`.
    ///
    /// Every project must exist and plan cleanly before anything is written.
    /// Writes then run in parallel; a write failure is reported per project
    /// and does not roll back the others.
    #[instrument(skip_all, fields(request = %request, projects = projects.len()))]
    pub fn generate_bulk(
        &self,
        request: &GenerationRequest,
        projects: &[String],
    ) -> AstrogenResult<BulkReport> {
        let requests = expand_bulk(request, projects)?;

        if let Some(missing) = requests
            .iter()
            .filter_map(GenerationRequest::project)
            .find(|p| !self.registry.project_exists(p))
        {
            return Err(self.project_not_found(missing));
        }

        let plans = requests
            .iter()
            .map(|r| {
                self.plan(r)
                    .map_err(|e| e.in_project(r.project().unwrap_or_default()))
            })
            .collect::<AstrogenResult<Vec<GenerationPlan>>>()?;

        info!(count = plans.len(), "All projects planned, writing");

        let results: Vec<(String, AstrogenResult<GeneratedArtifact>)> = plans
            .into_par_iter()
            .map(|plan| (plan.project.clone(), self.execute(plan)))
            .collect();

        let mut report = BulkReport::default();
        for (project, result) in results {
            match result {
                Ok(artifact) => report.generated.push(artifact),
                Err(error) => {
                    warn!(project = %project, error = %error, "Write failed");
                    report.failures.push(BulkFailure { project, error });
                }
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArtifactKind;

    fn template() -> GenerationRequest {
        GenerationRequest::builder(ArtifactKind::Page)
            .name("about")
            .overwrite(true)
            .build()
            .unwrap()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_project_list_fails() {
        assert_eq!(
            expand_bulk(&template(), &[]).unwrap_err(),
            AstrogenError::Application(ApplicationError::NoTargetProjects)
        );
    }

    #[test]
    fn one_request_per_project_in_order() {
        let expanded = expand_bulk(&template(), &names(&["a", "b", "c"])).unwrap();
        let projects: Vec<_> = expanded.iter().filter_map(|r| r.project()).collect();
        assert_eq!(projects, ["a", "b", "c"]);
        assert!(expanded.iter().all(|r| r.overwrite() && r.name() == "about"));
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let expanded = expand_bulk(&template(), &names(&["b", "a", "b"])).unwrap();
        let projects: Vec<_> = expanded.iter().filter_map(|r| r.project()).collect();
        assert_eq!(projects, ["b", "a"]);
    }

    #[test]
    fn blank_project_is_attributed() {
        let err = expand_bulk(&template(), &names(&["a", " "])).unwrap_err();
        assert!(matches!(err, AstrogenError::Project { .. }));
    }
}
