use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    entities::identity::ArtifactIdentity,
    props::PropsInterface,
    value_objects::{ArtifactKind, ContentFormat, Extension},
};

/// Everything a template renderer needs to produce an artifact's content.
///
/// Built after path resolution and the collision check; renderers treat it
/// as read-only input and never see the request itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderMetadata {
    pub kind: ArtifactKind,
    pub class_name: String,
    pub file_base_name: String,
    pub tag_name: String,
    pub title: String,
    pub props: PropsInterface,
    /// Import specifier for a page's layout; `None` means no layout.
    pub layout_import_path: Option<String>,
    /// Layout component name matching `layout_import_path`.
    pub layout_name: Option<String>,
    /// Content format of the project (content artifacts only).
    pub format: Option<ContentFormat>,
    pub collection: Option<String>,
    pub extension: Option<Extension>,
    pub frontmatter: BTreeMap<String, Value>,
}

impl RenderMetadata {
    /// Metadata carrying only the identity; remaining fields are empty.
    pub fn for_identity(kind: ArtifactKind, identity: &ArtifactIdentity, title: String) -> Self {
        Self {
            kind,
            class_name: identity.class_name.clone(),
            file_base_name: identity.file_base_name.clone(),
            tag_name: identity.tag_name.clone(),
            title,
            props: PropsInterface::default(),
            layout_import_path: None,
            layout_name: None,
            format: None,
            collection: None,
            extension: None,
            frontmatter: BTreeMap::new(),
        }
    }

    /// The bare extension (`astro`, `mdx`), if any.
    pub fn extension_str(&self) -> Option<&str> {
        self.extension.as_ref().map(Extension::bare)
    }
}
