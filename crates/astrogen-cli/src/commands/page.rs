//! `astrogen page` — generate a page under `src/pages`.

use astrogen_core::domain::{ArtifactKind, GenerationRequest, paths::split_leaf_extension};

use crate::{
    cli::PageArgs,
    commands::generate::{self, Context},
    error::CliResult,
};

pub fn execute(args: PageArgs, ctx: Context) -> CliResult<()> {
    let layout = if args.no_layout {
        None
    } else {
        args.layout.clone().or_else(|| ctx.config.default_layout())
    };

    let mut builder = GenerationRequest::builder(ArtifactKind::Page)
        .name(args.target.name.as_str())
        .layout(layout);
    if let Some(title) = &args.title {
        builder = builder.title(title.as_str());
    }
    if let Some(props) = &args.props {
        builder = builder.props(props.as_str());
    }
    if let Some(ext) = configured_extension(&args, &ctx) {
        builder = builder.extension(ext);
    }

    generate::run(builder, &args.target, ctx)
}

/// `generate.page_extension`, used only when neither `--ext` nor the name
/// itself picks an extension.
fn configured_extension(args: &PageArgs, ctx: &Context) -> Option<String> {
    if args.target.ext.is_some() {
        return None;
    }
    let leaf = args.target.name.rsplit('/').next().unwrap_or_default();
    let (_, embedded) = split_leaf_extension(ArtifactKind::Page, leaf);
    let configured = ctx.config.generate.page_extension.trim();
    (embedded.is_none() && !configured.is_empty()).then(|| configured.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::{GlobalArgs, TargetArgs},
        config::AppConfig,
        output::OutputManager,
    };

    fn page(name: &str, ext: Option<&str>) -> PageArgs {
        PageArgs {
            target: TargetArgs {
                name: name.into(),
                project: Some("blog".into()),
                projects: Vec::new(),
                directory: None,
                ext: ext.map(str::to_string),
                overwrite: false,
                dry_run: false,
            },
            layout: None,
            no_layout: false,
            title: None,
            props: None,
        }
    }

    fn ctx(page_extension: &str) -> Context {
        let mut config = AppConfig::default();
        config.generate.page_extension = page_extension.into();
        let global = GlobalArgs::default();
        let output = OutputManager::new(&global, &config);
        Context {
            global,
            config,
            output,
        }
    }

    #[test]
    fn configured_extension_fills_a_bare_name() {
        assert_eq!(
            configured_extension(&page("blog/post", None), &ctx("md")).as_deref(),
            Some("md")
        );
    }

    #[test]
    fn name_or_flag_extension_wins_over_configuration() {
        assert_eq!(configured_extension(&page("about.mdx", None), &ctx("md")), None);
        assert_eq!(configured_extension(&page("about", Some("html")), &ctx("md")), None);
    }

    #[test]
    fn dynamic_segments_with_dots_still_get_the_configured_extension() {
        assert_eq!(
            configured_extension(&page("docs/[...slug]", None), &ctx("md")).as_deref(),
            Some("md")
        );
    }
}
