//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `ASTROGEN__*` environment variables (`__` separates nesting)
//! 3. The file passed with `--config` (must exist)
//! 4. `astrogen.toml` in the current directory
//! 5. The global `config.toml` in the platform config directory
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name of the per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = "astrogen.toml";

const ENV_PREFIX: &str = "ASTROGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where projects are discovered.
    pub workspace: WorkspaceConfig,
    /// Defaults for generator flags.
    pub generate: GenerateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub root: PathBuf,
    /// Source directory of projects whose `project.json` has no `sourceRoot`.
    pub src_dir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub overwrite: bool,
    /// Layout imported by new pages; empty means none.
    pub layout: String,
    /// Extension of new pages whose name carries none.
    pub page_extension: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            src_dir: "src".into(),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            overwrite: false,
            layout: "Layout".into(),
            page_extension: "astro".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every source, `config_file` being the path
    /// given with `--config`.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            Self::config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            config_file.map(PathBuf::as_path),
        )
    }

    fn load_from(
        global: Option<&Path>,
        local: &Path,
        explicit: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise default config")?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(global) = global {
            builder = builder.add_source(File::from(global).required(false));
        }
        builder = builder.add_source(File::from(local).required(false));
        if let Some(path) = explicit {
            debug!(path = %path.display(), "Using explicit config file");
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "astrogen", "astrogen")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Layout for new pages, `None` when configured empty.
    pub fn default_layout(&self) -> Option<String> {
        let layout = self.generate.layout.trim();
        (!layout.is_empty()).then(|| layout.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.workspace.root, PathBuf::from("."));
        assert_eq!(cfg.workspace.src_dir, "src");
        assert!(!cfg.generate.overwrite);
        assert_eq!(cfg.default_layout().as_deref(), Some("Layout"));
        assert_eq!(cfg.generate.page_extension, "astro");
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn load_without_files_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(None, &dir.path().join(LOCAL_CONFIG_FILE), None).unwrap();
        assert_eq!(cfg.workspace, WorkspaceConfig::default());
        assert_eq!(cfg.generate.page_extension, "astro");
    }

    #[test]
    fn local_file_overrides_global_and_explicit_overrides_both() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join(LOCAL_CONFIG_FILE);
        let explicit = dir.path().join("explicit.toml");
        fs::write(&global, "[generate]\nlayout = \"Global\"\noverwrite = true\n").unwrap();
        fs::write(&local, "[generate]\nlayout = \"Local\"\n").unwrap();
        fs::write(&explicit, "[workspace]\nsrc_dir = \"app\"\n").unwrap();

        let cfg = AppConfig::load_from(Some(global.as_path()), &local, None).unwrap();
        assert_eq!(cfg.generate.layout, "Local");
        assert!(cfg.generate.overwrite);

        let cfg = AppConfig::load_from(Some(global.as_path()), &local, Some(explicit.as_path())).unwrap();
        assert_eq!(cfg.workspace.src_dir, "app");
        assert_eq!(cfg.generate.layout, "Local");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = AppConfig::load_from(
            None,
            &dir.path().join(LOCAL_CONFIG_FILE),
            Some(dir.path().join("nope.toml").as_path()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_layout_means_none() {
        let mut cfg = AppConfig::default();
        cfg.generate.layout = "  ".into();
        assert_eq!(cfg.default_layout(), None);
    }
}
