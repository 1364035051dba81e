//! Integration tests for astrogen-cli.

mod common;

use std::fs;

use predicates::prelude::*;

use common::{astrogen, workspace, write};

#[test]
fn help_lists_generators() {
    let dir = workspace();
    astrogen(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("page"))
        .stdout(predicate::str::contains("component"))
        .stdout(predicate::str::contains("content"));
}

#[test]
fn version_flag() {
    let dir = workspace();
    astrogen(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn component_with_props_is_written() {
    let dir = workspace();
    astrogen(&dir)
        .args(["component", "user-card", "--project", "blog"])
        .args(["--props", "name:string,age?:number"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created apps/blog/src/components/user-card.astro",
        ));

    let written =
        fs::read_to_string(dir.path().join("apps/blog/src/components/user-card.astro")).unwrap();
    assert!(written.contains("export interface Props {"));
    assert!(written.contains("age?: number;"));
    assert!(written.contains("const { name, age } = Astro.props;"));
}

#[test]
fn existing_file_is_replaced_only_with_overwrite() {
    let dir = workspace();
    write(dir.path(), "apps/blog/src/pages/about.astro", "old");

    astrogen(&dir)
        .args(["page", "about", "--project", "blog", "--overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrote apps/blog/src/pages/about.astro"));

    let written = fs::read_to_string(dir.path().join("apps/blog/src/pages/about.astro")).unwrap();
    assert!(written.contains("import Layout from '../layouts/Layout.astro';"));
}

#[test]
fn nested_dynamic_page_imports_layout() {
    let dir = workspace();
    astrogen(&dir)
        .args(["page", "blog/[slug]", "--project", "blog", "--title", "Post"])
        .assert()
        .success();

    let written =
        fs::read_to_string(dir.path().join("apps/blog/src/pages/blog/[slug].astro")).unwrap();
    assert!(written.contains("import Layout from '../../layouts/Layout.astro';"));
    assert!(written.contains("<h1>Post</h1>"));
}

#[test]
fn no_layout_page_is_a_full_document() {
    let dir = workspace();
    astrogen(&dir)
        .args(["page", "contact", "--project", "blog", "--no-layout"])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("apps/blog/src/pages/contact.astro")).unwrap();
    assert!(!written.contains("import"));
    assert!(written.contains("<title>Contact</title>"));
}

#[test]
fn bulk_content_follows_each_project_format() {
    let dir = workspace();
    astrogen(&dir)
        .args(["content", "hello-world", "--projects", "blog,docs"])
        .args(["--collection", "posts", "--frontmatter", "draft=true"])
        .assert()
        .success();

    let blog =
        fs::read_to_string(dir.path().join("apps/blog/src/content/posts/hello-world.mdx")).unwrap();
    assert!(blog.starts_with("---\n"));
    assert!(blog.contains("draft: true\n"));
    assert!(blog.contains("title: Hello World\n"));
    assert!(dir.path().join("apps/docs/src/content/posts/hello-world.md").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = workspace();
    astrogen(&dir)
        .args(["component", "Card", "--project", "docs", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create apps/docs/src/components/Card.astro"));

    assert!(!dir.path().join("apps/docs/src/components").exists());
}

#[test]
fn file_keeps_its_name() {
    let dir = workspace();
    astrogen(&dir)
        .args(["file", "env.d.ts", "--project", "docs", "--directory", "types"])
        .assert()
        .success();

    let path = dir.path().join("apps/docs/src/types/env.d.ts");
    assert_eq!(fs::read_to_string(path).unwrap(), "");
}

#[test]
fn json_output_describes_the_artifact() {
    let dir = workspace();
    let output = astrogen(&dir)
        .args(["--output-format", "json"])
        .args(["component", "Badge", "--project", "blog"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["project"], "blog");
    assert_eq!(value["overwritten"], false);
    assert_eq!(value["dry_run"], false);
}

#[test]
fn workspace_flag_points_at_another_directory() {
    let dir = workspace();
    let elsewhere = tempfile::TempDir::new().unwrap();
    astrogen(&elsewhere)
        .arg("--workspace")
        .arg(dir.path())
        .args(["component", "Nav", "--project", "docs"])
        .assert()
        .success();

    assert!(dir.path().join("apps/docs/src/components/Nav.astro").is_file());
}

#[test]
fn local_config_sets_page_defaults() {
    let dir = workspace();
    write(
        dir.path(),
        "astrogen.toml",
        "[generate]\nlayout = \"\"\npage_extension = \"md\"\n",
    );

    astrogen(&dir)
        .args(["page", "changelog", "--project", "docs"])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("apps/docs/src/pages/changelog.md")).unwrap();
    assert!(!written.contains("layout:"));
}

#[test]
fn config_get_reads_environment_overrides() {
    let dir = workspace();
    astrogen(&dir)
        .args(["config", "get", "generate.layout"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Layout\n"));

    astrogen(&dir)
        .env("ASTROGEN__GENERATE__LAYOUT", "BaseLayout")
        .args(["config", "get", "generate.layout"])
        .assert()
        .success()
        .stdout(predicate::str::diff("BaseLayout\n"));
}

#[test]
fn init_local_writes_default_config() {
    let dir = workspace();
    astrogen(&dir).args(["init", "--local"]).assert().success();

    let written = fs::read_to_string(dir.path().join("astrogen.toml")).unwrap();
    assert!(written.contains("[workspace]"));
    assert!(written.contains("page_extension = \"astro\""));
}

#[test]
fn log_file_receives_events() {
    let dir = workspace();
    astrogen(&dir)
        .args(["-vv", "--log-file", "logs/run.log"])
        .args(["component", "Logged", "--project", "blog"])
        .assert()
        .success();

    let log = fs::read_to_string(dir.path().join("logs/run.log")).unwrap();
    assert!(log.contains("Workspace scanned"));
}
