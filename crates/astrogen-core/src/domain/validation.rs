use std::path::Path;

use crate::domain::{
    capabilities,
    entities::{
        common::RelativePath,
        identity::{ArtifactIdentity, split_nested_name},
    },
    error::DomainError,
    paths::split_leaf_extension,
    props::{PropsInterface, parse_props_string},
    value_objects::{ArtifactKind, Extension},
};

/// Characters rejected in artifact names outside dynamic-route brackets.
const ILLEGAL_NAME_CHARS: &[char] = &[
    '<', '>', ':', '"', '|', '?', '*', '!', '@', '#', '$', '%', '^', '&', '(', ')', '+', '=',
    '{', '}', ',', '`', '~',
];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate an artifact name, which may be nested (`blog/[slug]`).
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();
        let invalid = |reason: &str| DomainError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if trimmed.starts_with('/') || trimmed.starts_with('\\') || Path::new(trimmed).is_absolute()
        {
            return Err(invalid("absolute names are not allowed"));
        }

        let mut segments = trimmed
            .split(['/', '\\'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .peekable();
        if segments.peek().is_none() {
            return Err(invalid("name has no segments"));
        }
        for segment in segments {
            if segment == ".." || segment == "." {
                return Err(invalid("relative path segments are not allowed"));
            }
            Self::validate_segment(segment).map_err(|reason| invalid(&reason))?;
        }
        Ok(())
    }

    /// The leaf must still name something once separators, extension and
    /// illegal characters are normalized away (`-`, `__`, `...`).
    pub fn validate_leaf(kind: ArtifactKind, name: &str) -> Result<(), DomainError> {
        let nested = split_nested_name(name);
        let (stem, _) = split_leaf_extension(kind, &nested.file_base_name);
        let identity = match kind {
            ArtifactKind::File => ArtifactIdentity::for_file(stem),
            _ => ArtifactIdentity::new(stem),
        };
        let unnamed = identity.file_base_name.is_empty()
            || (kind != ArtifactKind::File && identity.class_name.is_empty());
        if unnamed {
            return Err(DomainError::InvalidName {
                name: name.to_string(),
                reason: "name has no letters or digits to build a file name from".into(),
            });
        }
        Ok(())
    }

    /// Brackets must pair without nesting; illegal characters are only
    /// tolerated inside them.
    fn validate_segment(segment: &str) -> Result<(), String> {
        let mut in_brackets = false;
        for c in segment.chars() {
            match c {
                '[' if in_brackets => return Err(format!("nested '[' in '{segment}'")),
                '[' => in_brackets = true,
                ']' if !in_brackets => return Err(format!("unbalanced ']' in '{segment}'")),
                ']' => in_brackets = false,
                c if in_brackets => {
                    if !(c.is_alphanumeric() || matches!(c, '.' | '_' | '-')) {
                        return Err(format!("'{c}' is not allowed in route parameters"));
                    }
                }
                c if ILLEGAL_NAME_CHARS.contains(&c) || c.is_control() => {
                    return Err(format!("'{c}' is not allowed in file names"));
                }
                _ => {}
            }
        }
        if in_brackets {
            return Err(format!("unclosed '[' in '{segment}'"));
        }
        Ok(())
    }

    pub fn validate_project(project: &str) -> Result<(), DomainError> {
        if project.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "project" });
        }
        Ok(())
    }

    pub fn parse_directory(directory: &str) -> Result<RelativePath, DomainError> {
        RelativePath::try_new(directory)
    }

    /// Parse an explicit extension and check it against the kind.
    pub fn parse_extension(kind: ArtifactKind, raw: &str) -> Result<Extension, DomainError> {
        let ext = Extension::parse(raw)?;
        capabilities::validate_extension(kind, &ext)?;
        Ok(ext)
    }

    /// Parse a props specification for a kind that accepts one.
    pub fn parse_props(kind: ArtifactKind, spec: &str) -> Result<PropsInterface, DomainError> {
        if !kind.accepts_props() {
            return Err(DomainError::PropsNotSupported {
                kind: kind.to_string(),
            });
        }
        parse_props_string(spec).map(PropsInterface::new)
    }

    /// Content collections are a single relative path under the content dir.
    pub fn validate_collection(
        kind: ArtifactKind,
        collection: Option<&str>,
    ) -> Result<Option<String>, DomainError> {
        match (kind, collection.map(str::trim)) {
            (ArtifactKind::Content, None | Some("")) => {
                Err(DomainError::MissingRequiredField { field: "collection" })
            }
            (_, None | Some("")) => Ok(None),
            (_, Some(c)) => {
                let path = RelativePath::try_new(c)?;
                if path.is_empty() {
                    return Err(DomainError::MissingRequiredField { field: "collection" });
                }
                Ok(Some(path.to_string()))
            }
        }
    }
}
