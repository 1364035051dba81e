//! The `GenerationRequest` aggregate and its typestate builder.
//!
//! A request is validated once, at `build()`. Every string a caller hands in
//! (directory, extension, props, collection) is parsed into its domain type
//! there, so downstream resolution never sees raw input.
//!
//! # Typestate builder
//!
//! `NoName` / `HasName` markers enforce at compile time that the artifact
//! name is set before `build()` becomes available.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    props::PropsInterface,
    validation::DomainValidator,
    value_objects::{ArtifactKind, Extension},
};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully validated request to generate one artifact.
///
/// `project` is `None` only for a bulk template request, which is expanded
/// into one request per target project with [`GenerationRequest::with_project`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    kind: ArtifactKind,
    name: String,
    project: Option<String>,
    directory: RelativePath,
    extension: Option<Extension>,
    props: PropsInterface,
    overwrite: bool,
    frontmatter: BTreeMap<String, Value>,
    collection: Option<String>,
    layout: Option<String>,
    title: Option<String>,
    dry_run: bool,
}

impl GenerationRequest {
    /// Start building a request for `kind`.
    pub fn builder(kind: ArtifactKind) -> GenerationRequestBuilder<NoName> {
        GenerationRequestBuilder::new(kind)
    }

    pub const fn kind(&self) -> ArtifactKind {
        self.kind
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }
    pub fn directory(&self) -> &RelativePath {
        &self.directory
    }
    pub fn extension(&self) -> Option<&Extension> {
        self.extension.as_ref()
    }
    pub fn props(&self) -> &PropsInterface {
        &self.props
    }
    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }
    pub fn frontmatter(&self) -> &BTreeMap<String, Value> {
        &self.frontmatter
    }
    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }
    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// A copy of this request targeting `project`; every other option is
    /// carried over unchanged.
    pub fn with_project(&self, project: impl Into<String>) -> Result<Self, DomainError> {
        let project = project.into().trim().to_string();
        DomainValidator::validate_project(&project)?;
        Ok(Self {
            project: Some(project),
            ..self.clone()
        })
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.name)?;
        if let Some(project) = &self.project {
            write!(f, " in {project}")?;
        }
        Ok(())
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: the artifact name has not been set.
pub struct NoName;
/// Marker: the artifact name is set; the request can be built.
pub struct HasName;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`GenerationRequest`].
pub struct GenerationRequestBuilder<N> {
    kind: ArtifactKind,
    name: Option<String>,
    project: Option<String>,
    directory: Option<String>,
    extension: Option<String>,
    props: Option<String>,
    overwrite: bool,
    frontmatter: BTreeMap<String, Value>,
    collection: Option<String>,
    layout: Option<String>,
    title: Option<String>,
    dry_run: bool,
    _marker: PhantomData<N>,
}

impl GenerationRequestBuilder<NoName> {
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind,
            name: None,
            project: None,
            directory: None,
            extension: None,
            props: None,
            overwrite: false,
            frontmatter: BTreeMap::new(),
            collection: None,
            layout: None,
            title: None,
            dry_run: false,
            _marker: PhantomData,
        }
    }

    /// Set the artifact name. Transitions the builder to `HasName`.
    pub fn name(self, name: impl Into<String>) -> GenerationRequestBuilder<HasName> {
        GenerationRequestBuilder {
            kind: self.kind,
            name: Some(name.into()),
            project: self.project,
            directory: self.directory,
            extension: self.extension,
            props: self.props,
            overwrite: self.overwrite,
            frontmatter: self.frontmatter,
            collection: self.collection,
            layout: self.layout,
            title: self.title,
            dry_run: self.dry_run,
            _marker: PhantomData,
        }
    }
}

impl<N> GenerationRequestBuilder<N> {
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Sub-directory under the kind's base directory.
    pub fn directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Explicit extension, with or without the leading dot.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Props specification (`name:type, name?:type`).
    pub fn props(mut self, props: impl Into<String>) -> Self {
        self.props = Some(props.into());
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn frontmatter_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.frontmatter.insert(key.into(), value);
        self
    }

    pub fn frontmatter(mut self, fields: BTreeMap<String, Value>) -> Self {
        self.frontmatter.extend(fields);
        self
    }

    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Layout component a page imports. `None` generates no layout import.
    pub fn layout(mut self, layout: Option<String>) -> Self {
        self.layout = layout;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl GenerationRequestBuilder<HasName> {
    /// Validate every field and produce the request.
    ///
    /// # Errors
    /// Any [`DomainError`] raised by name, project, directory, extension,
    /// props or collection validation.
    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        let kind = self.kind;
        let name = self.name.unwrap_or_default().trim().to_string();
        DomainValidator::validate_name(&name)?;
        DomainValidator::validate_leaf(kind, &name)?;

        let project = match self.project {
            Some(p) => {
                let p = p.trim().to_string();
                DomainValidator::validate_project(&p)?;
                Some(p)
            }
            None => None,
        };

        let directory = match self.directory.as_deref() {
            Some(d) => DomainValidator::parse_directory(d)?,
            None => RelativePath::empty(),
        };

        let extension = self
            .extension
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .map(|e| DomainValidator::parse_extension(kind, e))
            .transpose()?;

        let props = match self.props.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(spec) => DomainValidator::parse_props(kind, spec)?,
            None => PropsInterface::default(),
        };

        let collection = DomainValidator::validate_collection(kind, self.collection.as_deref())?;

        let layout = self
            .layout
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(GenerationRequest {
            kind,
            name,
            project,
            directory,
            extension,
            props,
            overwrite: self.overwrite,
            frontmatter: self.frontmatter,
            collection,
            layout,
            title,
            dry_run: self.dry_run,
        })
    }
}
