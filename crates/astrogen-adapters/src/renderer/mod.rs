//! Template renderers.

mod astro;
mod frontmatter;
mod templates;

pub use astro::AstroRenderer;
