//! Tests for error handling, suggestions and exit codes.

mod common;

use predicates::prelude::*;

use common::{astrogen, workspace, write};

#[test]
fn collision_exits_with_conflict_code() {
    let dir = workspace();
    write(dir.path(), "apps/blog/src/components/user-card.astro", "old");

    astrogen(&dir)
        .args(["component", "user-card", "--project", "blog"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("File already exists at"))
        .stderr(predicate::str::contains("--overwrite"));

    let kept = std::fs::read_to_string(dir.path().join("apps/blog/src/components/user-card.astro"))
        .unwrap();
    assert_eq!(kept, "old");
}

#[test]
fn bulk_collision_aborts_every_project() {
    let dir = workspace();
    write(dir.path(), "apps/docs/src/pages/about.astro", "old");

    astrogen(&dir)
        .args(["page", "about", "--projects", "blog,docs"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("[docs]"));

    assert!(!dir.path().join("apps/blog/src/pages/about.astro").exists());
}

#[test]
fn unknown_project_exits_not_found() {
    let dir = workspace();
    astrogen(&dir)
        .args(["page", "about", "--project", "shop"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Project 'shop' not found"))
        .stderr(predicate::str::contains("Known projects: blog, docs"));
}

#[test]
fn separator_only_name_is_rejected() {
    let dir = workspace();
    astrogen(&dir)
        .args(["component", "__", "--project", "blog"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid name '__'"));

    assert!(!dir.path().join("apps/blog/src/components/.astro").exists());
}

#[test]
fn bad_props_echo_the_segment() {
    let dir = workspace();
    astrogen(&dir)
        .args(["component", "Card", "--project", "blog", "--props", "title:string,count"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'count'"));
}

#[test]
fn content_needs_a_collection() {
    let dir = workspace();
    astrogen(&dir)
        .args(["content", "post", "--project", "blog"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("collection"));
}

#[test]
fn path_escape_is_rejected() {
    let dir = workspace();
    astrogen(&dir)
        .args(["page", "../escape", "--project", "blog"])
        .assert()
        .code(2);
    assert!(!dir.path().join("apps/blog/src/escape.astro").exists());
}

#[test]
fn missing_project_flag_is_a_usage_error() {
    let dir = workspace();
    astrogen(&dir)
        .args(["page", "about"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--project"));
}

#[test]
fn missing_config_file_exits_with_configuration_code() {
    let dir = workspace();
    astrogen(&dir)
        .args(["--config", "nope.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_config_key_exits_with_configuration_code() {
    let dir = workspace();
    astrogen(&dir)
        .args(["config", "get", "generate.colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}
