//! Shared fixtures for the binary tests.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A workspace with an MDX blog (with a layouts dir) and a plain docs site.
pub fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "apps/blog/project.json", r#"{"name":"blog"}"#);
    write(
        dir.path(),
        "apps/blog/package.json",
        r#"{"dependencies":{"astro":"^4.0.0","@astrojs/mdx":"^2.0.0"}}"#,
    );
    fs::create_dir_all(dir.path().join("apps/blog/src/layouts")).unwrap();
    write(dir.path(), "apps/docs/project.json", r#"{"name":"docs"}"#);
    write(dir.path(), "apps/docs/package.json", r#"{"dependencies":{"astro":"^4.0.0"}}"#);
    dir
}

/// `astrogen` running inside `dir`, isolated from user configuration.
pub fn astrogen(dir: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("astrogen");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path().join(".home"))
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}
