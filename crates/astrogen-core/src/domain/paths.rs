//! Target path resolution and relative import paths.

use std::path::{Component, Path};

use crate::domain::{
    capabilities::{self, BaseDir},
    entities::{common::RelativePath, identity::ArtifactIdentity, project::ProjectPaths, target::ResolvedTarget},
    error::DomainError,
    value_objects::{ArtifactKind, Extension},
};

/// Compose a project's base directory for `kind`, the explicit and implied
/// sub-directories (explicit first) and the identity's file base name into
/// one target.
///
/// # Errors
/// [`DomainError::MissingRequiredField`] when a content artifact has no
/// collection.
pub fn resolve_target_path(
    kind: ArtifactKind,
    paths: &ProjectPaths,
    identity: &ArtifactIdentity,
    explicit_directory: &RelativePath,
    implied_directory: &RelativePath,
    collection: Option<&str>,
    extension: Option<&Extension>,
) -> Result<ResolvedTarget, DomainError> {
    let def = capabilities::find_kind(kind);
    if def.base_dir == BaseDir::Content && collection.is_none() {
        return Err(DomainError::MissingRequiredField { field: "collection" });
    }

    let base = paths.base_dir(def.base_dir, collection);
    let sub = explicit_directory.join(implied_directory);
    let directory = if sub.is_empty() { base } else { base.join(sub) };

    Ok(ResolvedTarget::new(
        directory,
        &identity.file_base_name,
        extension.cloned(),
    ))
}

/// Split an extension the kind recognizes off a leaf name:
/// `about.mdx` for a page yields `("about", Some(".mdx"))`.
///
/// Generic files keep their whole name, since any dot may be meaningful.
pub fn split_leaf_extension(kind: ArtifactKind, leaf: &str) -> (String, Option<Extension>) {
    let def = capabilities::find_kind(kind);
    if def.allowed_extensions.is_empty() {
        return (leaf.to_string(), None);
    }
    match leaf.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && def
                    .allowed_extensions
                    .contains(&ext.to_ascii_lowercase().as_str()) =>
        {
            (stem.to_string(), Some(Extension::new(ext)))
        }
        _ => (leaf.to_string(), None),
    }
}

/// Pick the extension for a target.
///
/// Priority: explicit, then an extension embedded in the name, then the
/// kind's default, then `detected` (the project's content format).
pub fn effective_extension(
    kind: ArtifactKind,
    explicit: Option<&Extension>,
    embedded: Option<Extension>,
    detected: Option<Extension>,
) -> Option<Extension> {
    explicit
        .cloned()
        .or(embedded)
        .or_else(|| capabilities::find_kind(kind).default_extension.map(Extension::new))
        .or(detected)
}

fn normal_segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect()
}

/// Shortest relative path from directory `from` to directory `to`, with `/`
/// separators.
///
/// Paths that do not climb are prefixed with `./`; identical directories
/// give `.`.
pub fn resolve_relative_import_path(from: &Path, to: &Path) -> String {
    let from = normal_segments(from);
    let to = normal_segments(to);
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let parts: Vec<&str> = std::iter::repeat_n("..", from.len() - common)
        .chain(to[common..].iter().copied())
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else if parts[0] == ".." {
        parts.join("/")
    } else {
        format!("./{}", parts.join("/"))
    }
}

/// Where a page's layout lives: the layouts directory if present, else the
/// components directory, else the layouts directory by convention.
pub fn probe_layout_dir<'a>(paths: &'a ProjectPaths, exists: impl Fn(&Path) -> bool) -> &'a Path {
    if exists(paths.layouts_dir()) {
        paths.layouts_dir()
    } else if exists(paths.components_dir()) {
        paths.components_dir()
    } else {
        paths.layouts_dir()
    }
}

/// Import specifier for `layout` (a component name, optionally with an
/// extension) living in `layout_dir`, seen from `page_dir`.
pub fn layout_import_path(page_dir: &Path, layout_dir: &Path, layout: &str) -> String {
    let file_name = if layout.contains('.') {
        layout.to_string()
    } else {
        format!("{layout}.astro")
    };
    match resolve_relative_import_path(page_dir, layout_dir).as_str() {
        "." => format!("./{file_name}"),
        dir => format!("{dir}/{file_name}"),
    }
}
