//! `astrogen component` — generate a component under `src/components`.

use astrogen_core::domain::{ArtifactKind, GenerationRequest};

use crate::{
    cli::ComponentArgs,
    commands::generate::{self, Context},
    error::CliResult,
};

pub fn execute(args: ComponentArgs, ctx: Context) -> CliResult<()> {
    let mut builder = GenerationRequest::builder(ArtifactKind::Component)
        .name(args.target.name.as_str());
    if let Some(props) = &args.props {
        builder = builder.props(props.as_str());
    }
    generate::run(builder, &args.target, ctx)
}
