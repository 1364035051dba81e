//! `astrogen file` — generate an empty file under `src`.

use astrogen_core::domain::{ArtifactKind, GenerationRequest};

use crate::{
    cli::FileArgs,
    commands::generate::{self, Context},
    error::CliResult,
};

pub fn execute(args: FileArgs, ctx: Context) -> CliResult<()> {
    let builder = GenerationRequest::builder(ArtifactKind::File)
        .name(args.target.name.as_str());
    generate::run(builder, &args.target, ctx)
}
