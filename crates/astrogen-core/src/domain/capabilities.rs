//! Artifact kind and content format registries.
//!
//! Each artifact kind and each content format is described exactly once
//! here. Base directories, default extensions, allowed extensions and
//! integration package names all derive from these tables.
//!
//! # Adding a New Content Format
//!
//! 1. Add a variant to `ContentFormat` in `value_objects.rs`
//! 2. Add one [`FormatDef`] entry to [`FORMAT_REGISTRY`] at its priority slot
//! 3. That's it: detection derives from the registry order

use std::collections::BTreeSet;

use crate::domain::error::DomainError;
use crate::domain::value_objects::{ArtifactKind, ContentFormat, Extension};

// ── Kind definitions ────────────────────────────────────────────────────────

/// Which conventional project directory a kind is rooted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDir {
    Pages,
    Components,
    /// The content directory plus the request's collection name.
    Content,
    /// The project's source root; the caller picks the destination.
    Source,
}

/// Describes where an artifact kind lives and what it may be called.
#[derive(Debug, Clone, Copy)]
pub struct KindDef {
    pub kind: ArtifactKind,
    pub base_dir: BaseDir,
    /// Extension used when the caller gives none. `None` for content (the
    /// project's detected format decides) and for generic files.
    pub default_extension: Option<&'static str>,
    /// Extensions a caller may request explicitly. Empty means any.
    pub allowed_extensions: &'static [&'static str],
    pub accepts_props: bool,
}

/// Single source of truth for artifact kinds.
pub static KIND_REGISTRY: &[KindDef] = &[
    KindDef {
        kind: ArtifactKind::Page,
        base_dir: BaseDir::Pages,
        default_extension: Some("astro"),
        allowed_extensions: &["astro", "md", "mdx", "html", "ts", "js"],
        accepts_props: true,
    },
    KindDef {
        kind: ArtifactKind::Component,
        base_dir: BaseDir::Components,
        default_extension: Some("astro"),
        allowed_extensions: &["astro", "tsx", "jsx", "vue", "svelte"],
        accepts_props: true,
    },
    KindDef {
        kind: ArtifactKind::Content,
        base_dir: BaseDir::Content,
        default_extension: None,
        allowed_extensions: &["md", "mdx", "mdoc", "adoc", "json", "yaml", "yml"],
        accepts_props: false,
    },
    KindDef {
        kind: ArtifactKind::File,
        base_dir: BaseDir::Source,
        default_extension: None,
        allowed_extensions: &[],
        accepts_props: false,
    },
];

/// Look up the definition of a kind.
pub fn find_kind(kind: ArtifactKind) -> &'static KindDef {
    KIND_REGISTRY
        .iter()
        .find(|def| def.kind == kind)
        .unwrap_or_else(|| unreachable!("every ArtifactKind has a KIND_REGISTRY entry"))
}

/// Check an explicitly requested extension against the kind's allow-list.
pub fn validate_extension(kind: ArtifactKind, ext: &Extension) -> Result<(), DomainError> {
    let def = find_kind(kind);
    if def.allowed_extensions.is_empty() || def.allowed_extensions.contains(&ext.bare()) {
        return Ok(());
    }
    Err(DomainError::InvalidExtension {
        kind: kind.to_string(),
        extension: ext.to_string(),
        allowed: def.allowed_extensions.to_vec(),
    })
}

// ── Format definitions ──────────────────────────────────────────────────────

/// Describes one content format and the integrations that enable it.
#[derive(Debug, Clone, Copy)]
pub struct FormatDef {
    pub format: ContentFormat,
    /// Extension without the leading dot.
    pub extension: &'static str,
    /// Dependency names whose presence selects this format.
    pub integrations: &'static [&'static str],
}

/// Content formats in detection priority order: MDX > Markdoc > AsciiDoc >
/// Markdown. Markdown has no integrations and is the fallback.
pub static FORMAT_REGISTRY: &[FormatDef] = &[
    FormatDef {
        format: ContentFormat::Mdx,
        extension: "mdx",
        integrations: &["@astrojs/mdx"],
    },
    FormatDef {
        format: ContentFormat::Markdoc,
        extension: "mdoc",
        integrations: &["@astrojs/markdoc"],
    },
    FormatDef {
        format: ContentFormat::Asciidoc,
        extension: "adoc",
        integrations: &["astro-asciidoc", "astro-asciidoctor", "@astrojs/asciidoc"],
    },
    FormatDef {
        format: ContentFormat::Markdown,
        extension: "md",
        integrations: &[],
    },
];

/// Look up the definition of a format.
pub fn find_format(format: ContentFormat) -> &'static FormatDef {
    FORMAT_REGISTRY
        .iter()
        .find(|def| def.format == format)
        .unwrap_or_else(|| unreachable!("every ContentFormat has a FORMAT_REGISTRY entry"))
}

/// Select the highest-priority format whose integration is declared.
pub fn select_format(dependencies: &BTreeSet<String>) -> ContentFormat {
    FORMAT_REGISTRY
        .iter()
        .find(|def| {
            def.integrations
                .iter()
                .any(|name| dependencies.contains(*name))
        })
        .map_or(ContentFormat::Markdown, |def| def.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn every_kind_is_registered() {
        for kind in ArtifactKind::ALL {
            assert_eq!(find_kind(kind).kind, kind);
        }
    }

    #[test]
    fn mdx_beats_markdoc() {
        let selected = select_format(&deps(&["@astrojs/markdoc", "@astrojs/mdx"]));
        assert_eq!(selected, ContentFormat::Mdx);
    }

    #[test]
    fn markdoc_beats_asciidoc() {
        let selected = select_format(&deps(&["astro-asciidoc", "@astrojs/markdoc"]));
        assert_eq!(selected, ContentFormat::Markdoc);
    }

    #[test]
    fn any_asciidoc_integration_selects_asciidoc() {
        for name in ["astro-asciidoc", "astro-asciidoctor", "@astrojs/asciidoc"] {
            assert_eq!(select_format(&deps(&[name])), ContentFormat::Asciidoc);
        }
    }

    #[test]
    fn no_integrations_falls_back_to_markdown() {
        assert_eq!(select_format(&deps(&[])), ContentFormat::Markdown);
        assert_eq!(
            select_format(&deps(&["astro", "react"])),
            ContentFormat::Markdown
        );
    }

    #[test]
    fn explicit_extensions_are_checked_per_kind() {
        assert!(validate_extension(ArtifactKind::Page, &Extension::new("mdx")).is_ok());
        assert!(validate_extension(ArtifactKind::Component, &Extension::new("svelte")).is_ok());
        assert!(matches!(
            validate_extension(ArtifactKind::Component, &Extension::new("md")),
            Err(DomainError::InvalidExtension { .. })
        ));
        assert!(validate_extension(ArtifactKind::File, &Extension::new("toml")).is_ok());
    }
}
