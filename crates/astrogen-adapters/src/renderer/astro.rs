//! Built-in renderer for Astro pages, components and content.

use astrogen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{ArtifactKind, PropsInterface, RenderMetadata},
    error::AstrogenResult,
};
use tracing::{instrument, trace};

use super::{
    frontmatter::{asciidoc_attributes, yaml_document, yaml_frontmatter},
    templates::{self, fill},
};

/// Renders artifacts from the built-in templates.
///
/// The template is chosen by kind and target extension; everything else
/// comes from the metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstroRenderer;

impl AstroRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for AstroRenderer {
    #[instrument(skip_all, fields(kind = %kind, name = %metadata.file_base_name))]
    fn render(&self, kind: ArtifactKind, metadata: &RenderMetadata) -> AstrogenResult<String> {
        let ext = metadata.extension_str().unwrap_or("astro");
        trace!(ext, "Selecting template");

        let content = match kind {
            ArtifactKind::Component => match ext {
                "tsx" => react_component(metadata, true),
                "jsx" => react_component(metadata, false),
                "vue" => vue_component(metadata),
                "svelte" => svelte_component(metadata),
                _ => astro_component(metadata),
            },
            ArtifactKind::Page => match ext {
                "md" | "mdx" => markdown_page(metadata)?,
                "html" => fill(templates::HTML_PAGE, &[("TITLE", metadata.title.as_str())]),
                "ts" => fill(templates::TS_ENDPOINT, &base_vars(metadata)),
                "js" => fill(templates::JS_ENDPOINT, &base_vars(metadata)),
                _ => astro_page(metadata),
            },
            ArtifactKind::Content => match ext {
                "json" => json_data(metadata)?,
                "yaml" | "yml" => yaml_document(&metadata.frontmatter)?,
                "adoc" => format!(
                    "= {}\n{}\n",
                    metadata.title,
                    asciidoc_attributes(&metadata.frontmatter)
                ),
                _ => yaml_frontmatter(&metadata.frontmatter)?,
            },
            ArtifactKind::File => String::new(),
        };
        Ok(content)
    }
}

fn base_vars(metadata: &RenderMetadata) -> [(&'static str, &str); 3] {
    [
        ("CLASS_NAME", metadata.class_name.as_str()),
        ("FILE_NAME", metadata.file_base_name.as_str()),
        ("TITLE", metadata.title.as_str()),
    ]
}

/// `export interface Props { ... }` plus the destructuring line, in
/// declaration order. Empty without props.
fn astro_props_block(props: &PropsInterface) -> String {
    if props.is_empty() {
        return String::new();
    }
    let mut block = String::from("export interface Props {\n");
    for prop in props {
        block.push_str("  ");
        block.push_str(&prop.to_interface_member());
        block.push('\n');
    }
    block.push_str("}\n\n");
    block.push_str(&format!(
        "const {{ {} }} = Astro.props;\n",
        props.names().join(", ")
    ));
    block
}

fn astro_component(metadata: &RenderMetadata) -> String {
    let frontmatter = astro_props_block(&metadata.props);
    let mut vars = base_vars(metadata).to_vec();
    vars.push(("FRONTMATTER", frontmatter.as_str()));
    fill(templates::ASTRO_COMPONENT, &vars)
}

fn astro_page(metadata: &RenderMetadata) -> String {
    let props = astro_props_block(&metadata.props);
    match (&metadata.layout_import_path, &metadata.layout_name) {
        (Some(import), Some(layout)) => {
            let mut frontmatter = format!("import {layout} from '{import}';\n");
            if !props.is_empty() {
                frontmatter.push('\n');
                frontmatter.push_str(&props);
            }
            let mut vars = base_vars(metadata).to_vec();
            vars.push(("FRONTMATTER", frontmatter.as_str()));
            vars.push(("LAYOUT", layout.as_str()));
            fill(templates::ASTRO_PAGE_WITH_LAYOUT, &vars)
        }
        _ => {
            let mut vars = base_vars(metadata).to_vec();
            vars.push(("FRONTMATTER", props.as_str()));
            fill(templates::ASTRO_PAGE, &vars)
        }
    }
}

fn markdown_page(metadata: &RenderMetadata) -> AstrogenResult<String> {
    let mut fields = metadata.frontmatter.clone();
    if let Some(import) = &metadata.layout_import_path {
        fields
            .entry("layout".into())
            .or_insert_with(|| import.clone().into());
    }
    fields
        .entry("title".into())
        .or_insert_with(|| metadata.title.clone().into());
    Ok(format!("{}\n# {}\n", yaml_frontmatter(&fields)?, metadata.title))
}

fn react_component(metadata: &RenderMetadata, typed: bool) -> String {
    let props = &metadata.props;
    let interface_name = format!("{}Props", metadata.class_name);
    let (interface, params) = match (props.is_empty(), typed) {
        (true, _) => (String::new(), String::new()),
        (false, true) => {
            let members: String = props
                .iter()
                .map(|p| format!("  {}\n", p.to_interface_member()))
                .collect();
            (
                format!("interface {interface_name} {{\n{members}}}\n\n"),
                format!("{{ {} }}: {interface_name}", props.names().join(", ")),
            )
        }
        (false, false) => (String::new(), format!("{{ {} }}", props.names().join(", "))),
    };
    let mut vars = base_vars(metadata).to_vec();
    vars.push(("INTERFACE", interface.as_str()));
    vars.push(("PARAMS", params.as_str()));
    fill(templates::REACT_COMPONENT, &vars)
}

fn vue_component(metadata: &RenderMetadata) -> String {
    let props = if metadata.props.is_empty() {
        String::new()
    } else {
        let members: String = metadata
            .props
            .iter()
            .map(|p| format!("  {}\n", p.to_interface_member()))
            .collect();
        format!("defineProps<{{\n{members}}}>();\n")
    };
    let mut vars = base_vars(metadata).to_vec();
    vars.push(("PROPS", props.as_str()));
    fill(templates::VUE_COMPONENT, &vars)
}

fn svelte_component(metadata: &RenderMetadata) -> String {
    let props: String = metadata
        .props
        .iter()
        .map(|p| {
            if p.optional {
                format!("  export let {}: {} | undefined = undefined;\n", p.name, p.ty)
            } else {
                format!("  export let {}: {};\n", p.name, p.ty)
            }
        })
        .collect();
    let mut vars = base_vars(metadata).to_vec();
    vars.push(("PROPS", props.as_str()));
    fill(templates::SVELTE_COMPONENT, &vars)
}

fn json_data(metadata: &RenderMetadata) -> AstrogenResult<String> {
    let body = serde_json::to_string_pretty(&metadata.frontmatter).map_err(|e| {
        ApplicationError::RenderingFailed {
            reason: format!("frontmatter is not serializable: {e}"),
        }
    })?;
    Ok(format!("{body}\n"))
}
