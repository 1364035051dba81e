//! `astrogen content` — generate a content entry under
//! `src/content/<collection>`.

use astrogen_core::domain::{ArtifactKind, GenerationRequest};

use crate::{
    cli::ContentArgs,
    commands::generate::{self, Context},
    error::CliResult,
};

pub fn execute(args: ContentArgs, ctx: Context) -> CliResult<()> {
    let mut builder = GenerationRequest::builder(ArtifactKind::Content)
        .name(args.target.name.as_str())
        .frontmatter(args.frontmatter.iter().cloned().collect());
    if let Some(collection) = &args.collection {
        builder = builder.collection(collection.as_str());
    }
    if let Some(title) = &args.title {
        builder = builder.title(title.as_str());
    }
    generate::run(builder, &args.target, ctx)
}
