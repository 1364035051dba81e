//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "astrogen",
    bin_name = "astrogen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Astro page, component and content generators",
    long_about = "astrogen resolves where a new page, component, content entry or \
                  file belongs inside an Astro project of an Nx-style workspace, \
                  and writes it from a built-in template.",
    after_help = "EXAMPLES:\n\
        \x20 astrogen component user-card --project blog --props \"name:string,age?:number\"\n\
        \x20 astrogen page blog/[slug] --project blog\n\
        \x20 astrogen content hello-world --projects blog,docs --collection posts\n\
        \x20 astrogen completions bash > /usr/share/bash-completion/completions/astrogen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a page under `src/pages`.
    #[command(
        visible_alias = "p",
        about = "Generate a page",
        after_help = "EXAMPLES:\n\
            \x20 astrogen page about --project blog\n\
            \x20 astrogen page blog/[slug] --project blog --layout BlogPost\n\
            \x20 astrogen page api/search.ts --project blog"
    )]
    Page(PageArgs),

    /// Generate a component under `src/components`.
    #[command(
        visible_alias = "c",
        about = "Generate a component",
        after_help = "EXAMPLES:\n\
            \x20 astrogen component user-card --project blog\n\
            \x20 astrogen component ui/Button --project blog --props \"label:string\"\n\
            \x20 astrogen component Counter --project blog --ext tsx"
    )]
    Component(ComponentArgs),

    /// Generate a content entry under `src/content/<collection>`.
    #[command(
        visible_alias = "ct",
        about = "Generate a content entry",
        after_help = "EXAMPLES:\n\
            \x20 astrogen content first-post --project blog --collection posts\n\
            \x20 astrogen content intro --projects blog,docs --collection guides\n\
            \x20 astrogen content launch --project blog --collection posts --frontmatter draft=true"
    )]
    Content(ContentArgs),

    /// Generate an empty file under `src`.
    #[command(
        visible_alias = "f",
        about = "Generate a file",
        after_help = "EXAMPLES:\n\
            \x20 astrogen file env.d.ts --project blog\n\
            \x20 astrogen file site.d.ts --project blog --directory types"
    )]
    File(FileArgs),

    /// Initialise an astrogen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 astrogen init           # global config\n\
            \x20 astrogen init --local   # astrogen.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 astrogen completions bash > ~/.local/share/bash-completion/completions/astrogen\n\
            \x20 astrogen completions zsh  > ~/.zfunc/_astrogen\n\
            \x20 astrogen completions fish > ~/.config/fish/completions/astrogen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 astrogen config get generate.layout\n\
            \x20 astrogen config list\n\
            \x20 astrogen config path"
    )]
    Config(ConfigCommands),
}

// ── generation ────────────────────────────────────────────────────────────────

/// Arguments shared by every generator.
#[derive(Debug, Clone, Args)]
pub struct TargetArgs {
    /// Artifact name, optionally nested (`blog/[slug]`, `ui/Button`).
    #[arg(value_name = "NAME", help = "Artifact name, may contain '/'")]
    pub name: String,

    /// Target project.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "PROJECT",
        required_unless_present = "projects",
        conflicts_with = "projects",
        help = "Project to generate into"
    )]
    pub project: Option<String>,

    /// Generate into several projects at once.
    #[arg(
        long = "projects",
        value_name = "PROJECTS",
        value_delimiter = ',',
        help = "Comma-separated projects (bulk mode)"
    )]
    pub projects: Vec<String>,

    /// Subdirectory below the kind's base directory.
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        help = "Subdirectory relative to the base directory"
    )]
    pub directory: Option<String>,

    /// Explicit file extension, with or without the leading dot.
    #[arg(short = 'e', long = "ext", value_name = "EXT", help = "File extension")]
    pub ext: Option<String>,

    /// Replace an existing file.
    #[arg(long = "overwrite", help = "Overwrite an existing file")]
    pub overwrite: bool,

    /// Resolve and render, but write nothing.
    #[arg(long = "dry-run", help = "Show what would be written")]
    pub dry_run: bool,
}

/// Arguments for `astrogen page`.
#[derive(Debug, Args)]
pub struct PageArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Layout component imported by the page.
    #[arg(
        long = "layout",
        value_name = "LAYOUT",
        conflicts_with = "no_layout",
        help = "Layout component (default from configuration)"
    )]
    pub layout: Option<String>,

    /// Generate the page without a layout.
    #[arg(long = "no-layout", help = "Do not import a layout")]
    pub no_layout: bool,

    /// Page title.
    #[arg(short = 't', long = "title", value_name = "TITLE", help = "Page title")]
    pub title: Option<String>,

    /// Props, e.g. `title:string,count?:number`.
    #[arg(long = "props", value_name = "PROPS", help = "Props specification")]
    pub props: Option<String>,
}

/// Arguments for `astrogen component`.
#[derive(Debug, Args)]
pub struct ComponentArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Props, e.g. `name:string,age?:number`.
    #[arg(long = "props", value_name = "PROPS", help = "Props specification")]
    pub props: Option<String>,
}

/// Arguments for `astrogen content`.
#[derive(Debug, Args)]
pub struct ContentArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Content collection.
    #[arg(
        long = "collection",
        value_name = "COLLECTION",
        help = "Collection under src/content"
    )]
    pub collection: Option<String>,

    /// Entry title.
    #[arg(short = 't', long = "title", value_name = "TITLE", help = "Entry title")]
    pub title: Option<String>,

    /// Extra frontmatter fields.
    #[arg(
        long = "frontmatter",
        value_name = "KEY=VALUE",
        value_parser = parse_frontmatter,
        help = "Frontmatter field (repeatable); JSON values are parsed"
    )]
    pub frontmatter: Vec<(String, Value)>,
}

/// Arguments for `astrogen file`.
#[derive(Debug, Args)]
pub struct FileArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Parse `key=value`; the value is JSON when it parses, a string otherwise.
pub fn parse_frontmatter(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `astrogen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `astrogen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `astrogen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `astrogen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generate.layout`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the configuration file locations.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
