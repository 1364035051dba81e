//! Domain value objects: ArtifactKind, ContentFormat, Extension.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! They hold NO capability logic. Base directories, default extensions and
//! integration names live in `capabilities.rs`. This file defines the types,
//! their string representations and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// The category of artifact being generated; selects its base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Page,
    Component,
    Content,
    File,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [Self::Page, Self::Component, Self::Content, Self::File];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Component => "component",
            Self::Content => "content",
            Self::File => "file",
        }
    }

    /// Whether a props specification is meaningful for this kind.
    ///
    /// Delegates to `capabilities::find_kind`.
    pub fn accepts_props(self) -> bool {
        crate::domain::capabilities::find_kind(self).accepts_props
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "page" | "pages" => Ok(Self::Page),
            "component" | "components" => Ok(Self::Component),
            "content" => Ok(Self::Content),
            "file" => Ok(Self::File),
            other => Err(DomainError::InvalidValue {
                field: "kind",
                value: other.to_string(),
            }),
        }
    }
}

// ── ContentFormat ─────────────────────────────────────────────────────────────

/// The markup dialect a project uses for content artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Mdx,
    Markdoc,
    Asciidoc,
    Markdown,
}

impl ContentFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mdx => "mdx",
            Self::Markdoc => "markdoc",
            Self::Asciidoc => "asciidoc",
            Self::Markdown => "markdown",
        }
    }

    /// Default file extension for this format, with its leading dot.
    pub fn extension(self) -> Extension {
        Extension::new(crate::domain::capabilities::find_format(self).extension)
    }

    /// The format a file extension belongs to, if it is a content format.
    pub fn from_extension(ext: &Extension) -> Option<Self> {
        match ext.bare() {
            "mdx" => Some(Self::Mdx),
            "mdoc" => Some(Self::Markdoc),
            "adoc" | "asciidoc" => Some(Self::Asciidoc),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mdx" => Ok(Self::Mdx),
            "markdoc" | "mdoc" => Ok(Self::Markdoc),
            "asciidoc" | "adoc" => Ok(Self::Asciidoc),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(DomainError::InvalidValue {
                field: "format",
                value: other.to_string(),
            }),
        }
    }
}

// ── Extension ─────────────────────────────────────────────────────────────────

/// A file extension, always stored lowercase with its leading dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extension(String);

impl Extension {
    /// Accepts `"astro"` or `".astro"`; both become `".astro"`.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let bare = raw.as_ref().trim().trim_start_matches('.').to_ascii_lowercase();
        Self(format!(".{bare}"))
    }

    /// Fallible constructor rejecting empty or path-like extensions.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let bare = raw.trim().trim_start_matches('.');
        let valid = !bare.is_empty()
            && bare
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-');
        if !valid {
            return Err(DomainError::InvalidValue {
                field: "extension",
                value: raw.to_string(),
            });
        }
        Ok(Self::new(bare))
    }

    /// With the leading dot (`".astro"`).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Without the leading dot (`"astro"`).
    pub fn bare(&self) -> &str {
        &self.0[1..]
    }

    /// Whether `file_name` already ends with this extension.
    pub fn terminates(&self, file_name: &str) -> bool {
        file_name.to_ascii_lowercase().ends_with(&self.0) && file_name.len() > self.0.len()
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
