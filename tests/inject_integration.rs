//! Integration tests for the inject, scan, and placeholder commands.
//!
//! These tests exercise the full flow over real temporary deployment roots:
//! config loading, artifact discovery, rewriting, verification, and the
//! process exit-code contract.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use restamp::core::placeholder::{self, ConfigForms};

// =============================================================================
// Test Fixtures
// =============================================================================

/// A deployment root with a build output tree, as a container entrypoint
/// would see it.
struct TestDeploy {
    dir: TempDir,
}

impl TestDeploy {
    /// Create an empty deployment root with a build output directory.
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join(".next")).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the deployment configuration at the well-known path.
    fn write_deploy_config(&self, contents: &str) {
        let config_dir = self.path().join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("generated-config.json"), contents).unwrap();
    }

    /// Write a build artifact under `.next/`.
    fn write_artifact(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path().join(".next").join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Read a build artifact back.
    fn artifact(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(".next").join(rel)).unwrap()
    }

    /// Invoke the restamp binary rooted at this deployment.
    fn restamp(&self) -> Command {
        let mut cmd = Command::cargo_bin("restamp").expect("binary exists");
        cmd.arg("--cwd").arg(self.path());
        cmd
    }
}

/// The forms of a small deployment configuration used across tests.
fn demo2_forms() -> ConfigForms {
    ConfigForms::derive(&json!({"pageId": "demo2"}))
}

// =============================================================================
// inject
// =============================================================================

#[test]
fn inject_updates_json_dialect_build() {
    let deploy = TestDeploy::new();
    let sentinel = placeholder::builtin();
    deploy.write_deploy_config(r#"{"pageId":"demo2"}"#);
    deploy.write_artifact(
        "server/app/page.js",
        format!("var chunk=JSON.parse('{}');render(chunk);", sentinel.json),
    );

    deploy
        .restamp()
        .arg("inject")
        .assert()
        .success()
        .stdout(predicate::str::contains("found 1 file(s) to update"))
        .stdout(predicate::str::contains("update complete: 1 succeeded, 0 failed"));

    let rewritten = deploy.artifact("server/app/page.js");
    assert!(rewritten.contains(&demo2_forms().json));
    assert!(!rewritten.contains(&sentinel.json));
}

#[test]
fn inject_updates_js_literal_dialect_build() {
    let deploy = TestDeploy::new();
    let sentinel = placeholder::builtin();
    deploy.write_deploy_config(r#"{"pageId":"demo2"}"#);
    deploy.write_artifact(
        "static/chunks/main.js",
        format!("self.push([[\"main\"],{{data:{}}}])", sentinel.js_literal),
    );

    deploy.restamp().arg("inject").assert().success();

    let rewritten = deploy.artifact("static/chunks/main.js");
    assert!(rewritten.contains(&demo2_forms().js_literal));
    assert!(!rewritten.contains(&sentinel.js_literal));
}

#[test]
fn inject_replaces_every_occurrence_across_files() {
    let deploy = TestDeploy::new();
    let sentinel = placeholder::builtin();
    deploy.write_deploy_config(r#"{"pageId":"demo2"}"#);
    // One bundle embedding the configuration twice, one embedding it once.
    deploy.write_artifact(
        "server/chunks/shared.js",
        format!("a={};b={};", sentinel.js_literal, sentinel.js_literal),
    );
    deploy.write_artifact("server/app/page.js", sentinel.json.clone());

    deploy
        .restamp()
        .arg("inject")
        .assert()
        .success()
        .stdout(predicate::str::contains("update complete: 2 succeeded, 0 failed"));

    let shared = deploy.artifact("server/chunks/shared.js");
    assert_eq!(shared.matches(&demo2_forms().js_literal).count(), 2);
    assert_eq!(shared.matches(&sentinel.js_literal).count(), 0);
}

#[test]
fn inject_warns_when_build_is_not_a_template() {
    let deploy = TestDeploy::new();
    deploy.write_deploy_config(r#"{"pageId":"demo2"}"#);
    deploy.write_artifact("static/clean.js", "nothing to see");

    deploy
        .restamp()
        .arg("inject")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "no files embedding the placeholder configuration were found",
        ));
}

#[test]
fn inject_is_idempotent() {
    let deploy = TestDeploy::new();
    let sentinel = placeholder::builtin();
    deploy.write_deploy_config(r#"{"pageId":"demo2"}"#);
    deploy.write_artifact("server/app/page.js", sentinel.json.clone());

    deploy.restamp().arg("inject").assert().success();
    let after_first = deploy.artifact("server/app/page.js");

    // The tree now carries the real configuration; a second run must find
    // nothing and change nothing.
    deploy
        .restamp()
        .arg("inject")
        .assert()
        .success()
        .stderr(predicate::str::contains("no files embedding"));
    assert_eq!(deploy.artifact("server/app/page.js"), after_first);
}

#[test]
fn inject_fails_without_deploy_config() {
    let deploy = TestDeploy::new();
    deploy.write_artifact("server/app/page.js", placeholder::builtin().json.clone());

    deploy
        .restamp()
        .arg("inject")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));

    // Nothing was rewritten before the abort.
    assert_eq!(
        deploy.artifact("server/app/page.js"),
        placeholder::builtin().json
    );
}

#[test]
fn inject_fails_on_malformed_deploy_config() {
    let deploy = TestDeploy::new();
    deploy.write_deploy_config("{not json at all");

    deploy
        .restamp()
        .arg("inject")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn inject_tolerates_unreadable_binary_assets() {
    let deploy = TestDeploy::new();
    let sentinel = placeholder::builtin();
    deploy.write_deploy_config(r#"{"pageId":"demo2"}"#);
    // Invalid UTF-8, as an image asset would be.
    deploy.write_artifact("static/media/logo.png", [0xffu8, 0xfe, 0x00, 0x80]);
    deploy.write_artifact("server/app/page.js", sentinel.json.clone());

    deploy
        .restamp()
        .arg("inject")
        .assert()
        .success()
        .stderr(predicate::str::contains("cannot read file"))
        .stdout(predicate::str::contains("update complete: 1 succeeded, 0 failed"));
}

#[test]
fn inject_dry_run_reports_without_writing() {
    let deploy = TestDeploy::new();
    let sentinel = placeholder::builtin();
    deploy.write_deploy_config(r#"{"pageId":"demo2"}"#);
    deploy.write_artifact("server/app/page.js", sentinel.json.clone());

    deploy
        .restamp()
        .args(["inject", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would update"))
        .stdout(predicate::str::contains("update complete: 1 succeeded, 0 failed"));

    assert_eq!(deploy.artifact("server/app/page.js"), sentinel.json);
}

#[test]
fn inject_honors_flag_overrides() {
    let deploy = TestDeploy::new();
    let sentinel = placeholder::builtin();
    let dist = deploy.path().join("dist");
    fs::create_dir_all(&dist).unwrap();
    fs::write(dist.join("bundle.js"), &sentinel.json).unwrap();
    fs::write(
        deploy.path().join("deploy.json"),
        r#"{"pageId":"demo2"}"#,
    )
    .unwrap();

    deploy
        .restamp()
        .args(["inject", "--config", "deploy.json", "--build-dir", "dist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 succeeded, 0 failed"));

    let rewritten = fs::read_to_string(dist.join("bundle.js")).unwrap();
    assert!(rewritten.contains(&demo2_forms().json));
}

#[test]
fn inject_quiet_mode_only_reports_errors() {
    let deploy = TestDeploy::new();
    let sentinel = placeholder::builtin();
    deploy.write_deploy_config(r#"{"pageId":"demo2"}"#);
    deploy.write_artifact("server/app/page.js", sentinel.json.clone());

    deploy
        .restamp()
        .args(["--quiet", "inject"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// scan
// =============================================================================

#[test]
fn scan_lists_template_artifacts() {
    let deploy = TestDeploy::new();
    let sentinel = placeholder::builtin();
    deploy.write_artifact("server/app/page.js", sentinel.json.clone());
    deploy.write_artifact("static/clean.js", "already fine");

    deploy
        .restamp()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("server/app/page.js"))
        .stdout(predicate::str::contains("1 template artifact(s)"))
        .stdout(predicate::str::contains("clean.js").not());
}

#[test]
fn scan_reports_clean_tree() {
    let deploy = TestDeploy::new();
    deploy.write_artifact("static/clean.js", "already fine");

    deploy
        .restamp()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("no template artifacts found"));
}

#[test]
fn scan_does_not_modify_anything() {
    let deploy = TestDeploy::new();
    let sentinel = placeholder::builtin();
    deploy.write_artifact("server/app/page.js", sentinel.json.clone());

    deploy.restamp().arg("scan").assert().success();
    assert_eq!(deploy.artifact("server/app/page.js"), sentinel.json);
}

// =============================================================================
// placeholder
// =============================================================================

#[test]
fn placeholder_prints_json_form_by_default() {
    let deploy = TestDeploy::new();
    let expected = format!("{}\n", placeholder::builtin().json);

    deploy
        .restamp()
        .arg("placeholder")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn placeholder_prints_literal_form_on_request() {
    let deploy = TestDeploy::new();
    let expected = format!("{}\n", placeholder::builtin().js_literal);

    deploy
        .restamp()
        .args(["placeholder", "--dialect", "js"])
        .assert()
        .success()
        .stdout(expected);
}

// =============================================================================
// settings
// =============================================================================

#[test]
fn root_settings_redirect_the_build_dir() {
    let deploy = TestDeploy::new();
    let sentinel = placeholder::builtin();
    let dist = deploy.path().join("dist");
    fs::create_dir_all(&dist).unwrap();
    fs::write(dist.join("bundle.js"), &sentinel.json).unwrap();
    deploy.write_deploy_config(r#"{"pageId":"demo2"}"#);

    let stamp_dir = deploy.path().join(".restamp");
    fs::create_dir_all(&stamp_dir).unwrap();
    fs::write(stamp_dir.join("config.toml"), "build_dir = \"dist\"").unwrap();

    deploy
        .restamp()
        .arg("inject")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 succeeded, 0 failed"));
}

#[test]
fn alternative_sentinel_via_settings() {
    let deploy = TestDeploy::new();
    deploy.write_deploy_config(r#"{"pageId":"demo2"}"#);
    fs::write(
        deploy.path().join("sentinel.json"),
        r#"{"pageId":"demo"}"#,
    )
    .unwrap();
    let stamp_dir = deploy.path().join(".restamp");
    fs::create_dir_all(&stamp_dir).unwrap();
    fs::write(
        stamp_dir.join("config.toml"),
        "placeholder_path = \"sentinel.json\"",
    )
    .unwrap();
    deploy.write_artifact("server/app/page.js", r#"x={pageId:"demo"};"#);

    deploy
        .restamp()
        .arg("inject")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 succeeded, 0 failed"));

    assert_eq!(
        deploy.artifact("server/app/page.js"),
        r#"x={pageId:"demo2"};"#
    );
}
