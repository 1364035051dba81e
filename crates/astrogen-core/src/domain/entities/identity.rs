//! Artifact identity and nested-name splitting.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::domain::naming::{normalize_file_name, to_kebab_case, to_pascal_case};

/// Whether a name segment is a dynamic route parameter (`[slug]`,
/// `[...path]`). Such segments are kept literally.
pub fn is_dynamic_segment(segment: &str) -> bool {
    segment.contains('[') && segment.contains(']')
}

/// The names derived from an artifact's raw name.
///
/// Two identities are equal iff their raw names normalize to the same file
/// base name.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactIdentity {
    pub raw_name: String,
    /// PascalCase, used for component class names and interface names.
    pub class_name: String,
    /// kebab-case (or the literal segment for dynamic routes).
    pub file_base_name: String,
    /// The tag used to render the artifact in Astro markup.
    pub tag_name: String,
}

impl ArtifactIdentity {
    /// Derive an identity for pages, components and content entries.
    pub fn new(raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        let file_base_name = if is_dynamic_segment(&raw_name) {
            raw_name.trim().to_string()
        } else {
            to_kebab_case(&raw_name)
        };
        Self::with_file_base(raw_name, file_base_name)
    }

    /// Derive an identity for generic files, whose names keep their case,
    /// dots and underscores.
    pub fn for_file(raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        let file_base_name = normalize_file_name(&raw_name);
        Self::with_file_base(raw_name, file_base_name)
    }

    fn with_file_base(raw_name: String, file_base_name: String) -> Self {
        let words: String = raw_name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();
        let class_name = to_pascal_case(&words);
        Self {
            tag_name: class_name.clone(),
            class_name,
            file_base_name,
            raw_name,
        }
    }
}

impl PartialEq for ArtifactIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.file_base_name == other.file_base_name
    }
}

impl Eq for ArtifactIdentity {}

impl Hash for ArtifactIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.file_base_name.hash(state);
    }
}

/// Result of splitting a possibly nested artifact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedName {
    /// The last segment, verbatim.
    pub file_base_name: String,
    /// Every earlier segment joined by `/`; empty without nesting.
    pub implied_directory: String,
}

/// Split `blog/[slug]` into leaf `[slug]` and implied directory `blog`.
///
/// Empty segments (from doubled or trailing slashes) are ignored. Segments
/// are returned verbatim; dynamic route syntax stays literal.
pub fn split_nested_name(name: &str) -> NestedName {
    let mut segments: Vec<&str> = name
        .split(['/', '\\'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let leaf = segments.pop().unwrap_or_default();
    NestedName {
        file_base_name: leaf.to_string(),
        implied_directory: segments.join("/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_from_kebab_name() {
        let id = ArtifactIdentity::new("user-card");
        assert_eq!(id.class_name, "UserCard");
        assert_eq!(id.file_base_name, "user-card");
        assert_eq!(id.tag_name, "UserCard");
    }

    #[test]
    fn identity_from_pascal_name() {
        let id = ArtifactIdentity::new("UserCard");
        assert_eq!(id.file_base_name, "user-card");
        assert_eq!(id.class_name, "UserCard");
    }

    #[test]
    fn identities_compare_by_normalized_name() {
        assert_eq!(ArtifactIdentity::new("UserCard"), ArtifactIdentity::new("user_card"));
        assert_ne!(ArtifactIdentity::new("UserCard"), ArtifactIdentity::new("user-cards"));
    }

    #[test]
    fn dynamic_segments_are_kept_literally() {
        let id = ArtifactIdentity::new("[...slugParts]");
        assert_eq!(id.file_base_name, "[...slugParts]");
        assert_eq!(id.class_name, "SlugParts");
    }

    #[test]
    fn file_identity_keeps_case_and_dots() {
        let id = ArtifactIdentity::for_file("robots.config");
        assert_eq!(id.file_base_name, "robots.config");
        assert_eq!(id.class_name, "RobotsConfig");
    }

    #[test]
    fn splits_dynamic_route() {
        assert_eq!(
            split_nested_name("blog/[slug]"),
            NestedName {
                file_base_name: "[slug]".into(),
                implied_directory: "blog".into(),
            }
        );
    }

    #[test]
    fn flat_name_has_no_implied_directory() {
        assert_eq!(
            split_nested_name("about"),
            NestedName {
                file_base_name: "about".into(),
                implied_directory: String::new(),
            }
        );
    }

    #[test]
    fn deep_nesting_and_stray_slashes() {
        let nested = split_nested_name("/docs//[lang]/getting-started/");
        assert_eq!(nested.file_base_name, "getting-started");
        assert_eq!(nested.implied_directory, "docs/[lang]");
    }

    #[test]
    fn ui_component_prefix() {
        let nested = split_nested_name("ui/Button");
        assert_eq!(nested.file_base_name, "Button");
        assert_eq!(nested.implied_directory, "ui");
    }
}
