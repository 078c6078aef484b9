use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn template() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("src/index.ts"), "import express from 'express';\n");
    write(&root.join("src/routes/deep/nested/.env"), "LEAK=1");
    write(&root.join("src/routes/deep/nested/handler.ts"), "export {};\n");
    write(&root.join("scripts/seed.ts"), "seed");
    write(&root.join("dist/index.js"), "compiled");
    write(
        &root.join("package.json"),
        r#"{"name":"tpl","bin":"./cli.js","scripts":{"build":"x","prepublishOnly":"y"}}"#,
    );
    write(&root.join("package-lock.json"), "{}");
    write(&root.join(".env.example"), "PORT=3000");
    dir
}

fn cmd() -> Command {
    Command::cargo_bin("create-express-api").unwrap()
}

#[test]
fn creates_project_in_working_directory() {
    let template = template();
    let work = tempfile::tempdir().unwrap();

    cmd()
        .current_dir(work.path())
        .arg("my-api")
        .arg("--template")
        .arg(template.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cd my-api"));

    let project = work.path().join("my-api");
    assert_eq!(
        fs::read(project.join("src/index.ts")).unwrap(),
        fs::read(template.path().join("src/index.ts")).unwrap()
    );
    assert!(project.join("src/routes/deep/nested/handler.ts").is_file());
    assert!(!project.join("src/routes/deep/nested/.env").exists());
    assert!(project.join("scripts/seed.ts").is_file());
    assert!(!project.join("dist").exists());
    assert!(!project.join("package-lock.json").exists());

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(project.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest, serde_json::json!({ "name": "my-api", "scripts": { "build": "x" } }));
    assert_eq!(fs::read_to_string(project.join(".env")).unwrap(), "PORT=3000");
}

#[test]
fn default_name_is_used_when_omitted() {
    let template = template();
    let work = tempfile::tempdir().unwrap();

    cmd()
        .arg("--template")
        .arg(template.path())
        .arg("--dir")
        .arg(work.path())
        .assert()
        .success();

    assert!(work.path().join("my-express-api/package.json").is_file());
}

#[test]
fn template_from_environment() {
    let template = template();
    let work = tempfile::tempdir().unwrap();

    cmd()
        .env("EXPRESS_STARTER_TEMPLATE", template.path())
        .arg("env-api")
        .arg("--dir")
        .arg(work.path())
        .assert()
        .success();

    assert!(work.path().join("env-api/src/index.ts").is_file());
}

#[test]
fn invalid_names_are_rejected_without_writing() {
    let template = template();
    for name in ["", "MyApi", "my_api", "my api"] {
        let work = tempfile::tempdir().unwrap();
        cmd()
            .current_dir(work.path())
            .arg(name)
            .arg("--template")
            .arg(template.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("invalid project name"));
        assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0, "{name:?}");
    }
}

#[test]
fn existing_directory_is_rejected() {
    let template = template();
    let work = tempfile::tempdir().unwrap();
    fs::create_dir(work.path().join("taken")).unwrap();

    cmd()
        .current_dir(work.path())
        .arg("taken")
        .arg("--template")
        .arg(template.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_dir(work.path().join("taken")).unwrap().count(), 0);
}

#[test]
fn broken_manifest_cleans_up() {
    let template = tempfile::tempdir().unwrap();
    write(&template.path().join("src/index.ts"), "x");
    write(&template.path().join("package.json"), "{ not json");
    let work = tempfile::tempdir().unwrap();

    cmd()
        .current_dir(work.path())
        .arg("broken")
        .arg("--template")
        .arg(template.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse manifest"));

    assert!(!work.path().join("broken").exists());
}

#[test]
fn missing_template_fails() {
    let work = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(work.path())
        .arg("my-api")
        .arg("--template")
        .arg(work.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("template directory not found"));

    assert!(!work.path().join("my-api").exists());
}

#[test]
fn bundled_template_scaffolds() {
    let work = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(work.path())
        .env_remove("EXPRESS_STARTER_TEMPLATE")
        .arg("bundled-api")
        .assert()
        .success();

    let project = work.path().join("bundled-api");
    assert!(project.join("src/index.ts").is_file());
    assert!(project.join(".env").is_file());
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(project.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "bundled-api");
    assert!(manifest.get("bin").is_none());
    assert!(manifest["scripts"].get("prepublishOnly").is_none());
}

#[test]
fn relocated_binary_uses_embedded_template() {
    let install = tempfile::tempdir().unwrap();
    let built = assert_cmd::cargo::cargo_bin("create-express-api");
    let relocated = install.path().join(built.file_name().unwrap());
    fs::copy(&built, &relocated).unwrap();

    let work = tempfile::tempdir().unwrap();
    Command::new(&relocated)
        .current_dir(work.path())
        .env_remove("EXPRESS_STARTER_TEMPLATE")
        .arg("moved-api")
        .assert()
        .success();

    let project = work.path().join("moved-api");
    assert!(project.join("src/routes/health.ts").is_file());
    assert!(project.join("tsconfig.json").is_file());
    assert_eq!(fs::read_to_string(project.join(".env")).unwrap(), "PORT=3000\nNODE_ENV=development\n");
}

#[test]
fn missing_parent_directory_is_not_created() {
    let template = template();
    let work = tempfile::tempdir().unwrap();

    cmd()
        .arg("my-api")
        .arg("--template")
        .arg(template.path())
        .arg("--dir")
        .arg(work.path().join("a/b/c"))
        .assert()
        .code(1);

    assert!(!work.path().join("a").exists());
}
