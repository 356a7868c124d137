//! End-to-end tests for the `stencil` binary.
//!
//! Every test isolates itself with a temp store (`--store`) and scrubbed
//! environment so a developer's real config can never leak in.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ── helpers ───────────────────────────────────────────────────────────────────

fn stencil() -> Command {
    let mut cmd = Command::cargo_bin("stencil").unwrap();
    cmd.env_remove("STENCIL_STORE")
        .env_remove("STENCIL_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Build a small source tree: root/proj/{app.txt, nested/deep.txt}
fn seed_source(root: &Path) -> PathBuf {
    let src = root.join("proj");
    fs::create_dir_all(src.join("nested")).unwrap();
    fs::write(src.join("app.txt"), "alpha").unwrap();
    fs::write(src.join("nested/deep.txt"), "beta").unwrap();
    src
}

fn create_template(store: &Path, src: &Path, name: &str) {
    stencil()
        .arg("--store")
        .arg(store)
        .args(["create", "-n", name, "-p"])
        .arg(src)
        .assert()
        .success();
}

// ── global surface ────────────────────────────────────────────────────────────

#[test]
fn help_shows_usage() {
    stencil()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("stencil"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("clone"));
}

#[test]
fn version_flag_matches_cargo() {
    stencil()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_help_and_exits_2() {
    stencil().assert().failure().code(2);
}

#[test]
fn unknown_subcommand_exits_2() {
    stencil().arg("frobnicate").assert().failure().code(2);
}

#[test]
fn create_requires_a_name_flag() {
    stencil()
        .arg("create")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--name"));
}

// ── create ────────────────────────────────────────────────────────────────────

#[test]
fn create_captures_and_reports_success() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["create", "-n", "demo", "-p"])
        .arg(&src)
        .assert()
        .success()
        .stdout(predicate::str::contains("Template `demo` has been created."));

    assert_eq!(
        fs::read_to_string(store.join("demo/app.txt")).unwrap(),
        "alpha"
    );
    assert_eq!(
        fs::read_to_string(store.join("demo/nested/deep.txt")).unwrap(),
        "beta"
    );
}

#[test]
fn create_uses_the_cwd_by_default() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());

    stencil()
        .current_dir(&src)
        .arg("--store")
        .arg(&store)
        .args(["create", "-n", "here"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(store.join("here/app.txt")).unwrap(),
        "alpha"
    );
}

#[test]
fn create_from_a_missing_source_exits_1() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let ghost = temp.path().join("nothing-here");

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["create", "-n", "demo", "-p"])
        .arg(&ghost)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist."));
}

#[test]
fn duplicate_create_without_force_exits_1() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());
    create_template(&store, &src, "demo");

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["create", "-n", "demo", "-p"])
        .arg(&src)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Template `demo` already exists. Run command with -f to override.",
        ));
}

#[test]
fn force_overwrites_an_existing_template() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());
    create_template(&store, &src, "demo");

    fs::write(src.join("app.txt"), "updated").unwrap();

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["create", "-n", "demo", "-f", "-p"])
        .arg(&src)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(store.join("demo/app.txt")).unwrap(),
        "updated"
    );
}

// ── clone ─────────────────────────────────────────────────────────────────────

#[test]
fn clone_round_trips_a_template() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());
    create_template(&store, &src, "demo");

    let dest = temp.path().join("out");
    fs::create_dir(&dest).unwrap();

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["clone", "-t", "demo", "-n", "copy", "-p"])
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("has been cloned to"));

    assert_eq!(
        fs::read_to_string(dest.join("copy/app.txt")).unwrap(),
        "alpha"
    );
    assert_eq!(
        fs::read_to_string(dest.join("copy/nested/deep.txt")).unwrap(),
        "beta"
    );
}

#[test]
fn clone_defaults_to_untitled() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());
    create_template(&store, &src, "demo");

    // Hermetic config: an empty file parses and leaves every default alone.
    let cfg = temp.path().join("stencil.toml");
    fs::write(&cfg, "").unwrap();

    let dest = temp.path().join("out");
    fs::create_dir(&dest).unwrap();

    stencil()
        .current_dir(&dest)
        .arg("--config")
        .arg(&cfg)
        .arg("--store")
        .arg(&store)
        .args(["clone", "-t", "demo"])
        .assert()
        .success();

    assert!(dest.join("Untitled/app.txt").exists());
}

#[test]
fn clone_name_comes_from_the_config_file() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());
    create_template(&store, &src, "demo");

    let cfg = temp.path().join("stencil.toml");
    fs::write(&cfg, "[defaults]\nclone_name = \"Fresh\"\n").unwrap();

    let dest = temp.path().join("out");
    fs::create_dir(&dest).unwrap();

    stencil()
        .current_dir(&dest)
        .arg("--config")
        .arg(&cfg)
        .arg("--store")
        .arg(&store)
        .args(["clone", "-t", "demo"])
        .assert()
        .success();

    assert!(dest.join("Fresh/app.txt").exists());
}

#[test]
fn clone_of_a_missing_template_exits_1() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["clone", "-t", "ghost", "-n", "copy", "-p"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Template `ghost` does not exist."));
}

// ── delete ────────────────────────────────────────────────────────────────────

#[test]
fn delete_removes_the_template() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());
    create_template(&store, &src, "demo");

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["delete", "-t", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template `demo` has been deleted."));

    assert!(!store.join("demo").exists());
}

#[test]
fn delete_of_a_ghost_exits_1() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["delete", "-t", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Template `ghost` does not exist."));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_prints_bare_names() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());
    create_template(&store, &src, "alpha-svc");
    create_template(&store, &src, "beta-svc");

    stencil()
        .arg("--store")
        .arg(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha-svc"))
        .stdout(predicate::str::contains("beta-svc"));
}

#[test]
fn list_filter_narrows_the_output() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());
    create_template(&store, &src, "alpha-svc");
    create_template(&store, &src, "beta-svc");

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["list", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha-svc"))
        .stdout(predicate::str::contains("beta-svc").not());
}

#[test]
fn list_format_json_emits_an_array() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());
    create_template(&store, &src, "demo");

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[\"demo\"]"));
}

#[test]
fn empty_list_reports_no_templates() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");

    stencil()
        .arg("--store")
        .arg(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates found."));
}

#[test]
fn quiet_list_still_prints_bare_names() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());
    create_template(&store, &src, "alpha-svc");

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["-q", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha-svc"))
        .stdout(predicate::str::contains("Templates:").not());
}

// ── quiet mode ────────────────────────────────────────────────────────────────

#[test]
fn quiet_create_prints_nothing_but_still_works() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["-q", "create", "-n", "demo", "-p"])
        .arg(&src)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(store.join("demo/app.txt").exists());
}

#[test]
fn quiet_never_hides_failures() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");

    stencil()
        .arg("--store")
        .arg(&store)
        .args(["-q", "delete", "-t", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Template `ghost` does not exist."));
}

// ── environment & configuration ───────────────────────────────────────────────

#[test]
fn store_can_be_set_via_the_environment() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let src = seed_source(temp.path());

    stencil()
        .env("STENCIL_STORE", &store)
        .args(["create", "-n", "demo", "-p"])
        .arg(&src)
        .assert()
        .success();

    assert!(store.join("demo/app.txt").exists());
}

#[test]
fn malformed_config_file_exits_4() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("broken.toml");
    fs::write(&cfg, "this is not [ toml").unwrap();

    stencil()
        .arg("--config")
        .arg(&cfg)
        .arg("list")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn missing_explicit_config_exits_4() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("absent.toml");

    stencil()
        .arg("--config")
        .arg(&cfg)
        .arg("list")
        .assert()
        .failure()
        .code(4);
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_writes_config_and_creates_the_store() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let cfg = temp.path().join("conf/stencil.toml");

    // STENCIL_CONFIG steers the write target just like --config would.
    stencil()
        .env("STENCIL_CONFIG", &cfg)
        .arg("--store")
        .arg(&store)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration written"));

    let written = fs::read_to_string(&cfg).unwrap();
    assert!(written.contains("clone_name = \"Untitled\""));
    assert!(store.is_dir());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("stencil.toml");
    fs::write(&cfg, "").unwrap();

    stencil()
        .arg("--config")
        .arg(&cfg)
        .arg("init")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn init_force_overwrites_an_existing_config() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let cfg = temp.path().join("stencil.toml");
    fs::write(&cfg, "").unwrap();

    stencil()
        .arg("--config")
        .arg(&cfg)
        .arg("--store")
        .arg(&store)
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fs::read_to_string(&cfg).unwrap().contains("clone_name"));
}

// Other commands refuse a malformed config outright; init --force is the
// documented way out and must still reach the write.
#[test]
fn init_force_replaces_a_malformed_config() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store");
    let cfg = temp.path().join("broken.toml");
    fs::write(&cfg, "this is not [ toml").unwrap();

    stencil()
        .arg("--config")
        .arg(&cfg)
        .arg("--store")
        .arg(&store)
        .args(["init", "--force"])
        .assert()
        .success();

    let written = fs::read_to_string(&cfg).unwrap();
    assert!(written.contains("clone_name = \"Untitled\""));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_bash_emits_a_script() {
    stencil()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
