//! Integration tests for the PassKeep CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`. The
//! master password is supplied through `PASSKEEP_PASSWORD` and entry
//! fields through piped stdin, so no interactive prompting is needed.
//! Clipboard-dependent paths use `--show` to stay headless-friendly.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the passkeep binary, rooted in `dir`,
/// with the master password preset.
fn passkeep(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("passkeep").expect("binary should exist");
    cmd.current_dir(dir.path());
    cmd.env("PASSKEEP_PASSWORD", "hunter2");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    #[allow(deprecated)]
    Command::cargo_bin("passkeep")
        .expect("binary should exist")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local encrypted password store"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("rm"))
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("gen"));
}

#[test]
fn version_flag_shows_version() {
    #[allow(deprecated)]
    Command::cargo_bin("passkeep")
        .expect("binary should exist")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passkeep"));
}

#[test]
fn get_on_missing_store_fails() {
    let tmp = TempDir::new().unwrap();

    passkeep(&tmp)
        .args(["get", "--show", "github"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn init_twice_reports_already_exists() {
    let tmp = TempDir::new().unwrap();

    passkeep(&tmp).arg("init").assert().success();

    passkeep(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn add_get_rm_lifecycle() {
    let tmp = TempDir::new().unwrap();

    passkeep(&tmp).arg("init").assert().success();

    // Description and secret arrive over piped stdin.
    passkeep(&tmp)
        .args(["add", "github"])
        .write_stdin("my github\ns3cr3t\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entry 'github'"));

    // `get --show -d` prints both fields.
    passkeep(&tmp)
        .args(["get", "--show", "-d", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: my github"))
        .stdout(predicate::str::contains("s3cr3t"));

    passkeep(&tmp)
        .args(["rm", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed entry 'github'"));

    passkeep(&tmp)
        .args(["get", "--show", "github"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn wrong_master_password_is_rejected() {
    let tmp = TempDir::new().unwrap();

    passkeep(&tmp).arg("init").assert().success();
    passkeep(&tmp)
        .args(["add", "github"])
        .write_stdin("d\ns\n")
        .assert()
        .success();

    let mut cmd = passkeep(&tmp);
    cmd.env("PASSKEEP_PASSWORD", "wrong-password");
    cmd.args(["get", "--show", "github"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("master password is incorrect"));
}

#[test]
fn duplicate_add_is_rejected() {
    let tmp = TempDir::new().unwrap();

    passkeep(&tmp).arg("init").assert().success();
    passkeep(&tmp)
        .args(["add", "github"])
        .write_stdin("d\ns\n")
        .assert()
        .success();

    passkeep(&tmp)
        .args(["add", "github"])
        .write_stdin("d\ns\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn find_lists_matching_names() {
    let tmp = TempDir::new().unwrap();

    passkeep(&tmp).arg("init").assert().success();
    passkeep(&tmp)
        .args(["add", "github"])
        .write_stdin("d\ns\n")
        .assert()
        .success();
    passkeep(&tmp)
        .args(["add", "gitlab"])
        .write_stdin("d\ns\n")
        .assert()
        .success();

    // `find` requires no password at all.
    let mut cmd = passkeep(&tmp);
    cmd.env_remove("PASSKEEP_PASSWORD");
    cmd.args(["find", "git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("github"))
        .stdout(predicate::str::contains("gitlab"));

    passkeep(&tmp)
        .args(["find", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries matched"));
}

#[test]
fn gen_show_prints_a_password_of_requested_length() {
    let tmp = TempDir::new().unwrap();

    let output = passkeep(&tmp)
        .args(["gen", "20", "--show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let printed = String::from_utf8(output).unwrap();
    assert_eq!(printed.trim_end().len(), 20);
}

#[test]
fn gen_zero_length_is_rejected() {
    let tmp = TempDir::new().unwrap();

    passkeep(&tmp)
        .args(["gen", "0", "--show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid password length"));
}

#[test]
fn store_flag_overrides_the_store_file_name() {
    let tmp = TempDir::new().unwrap();

    passkeep(&tmp)
        .args(["--store", "other.db", "init"])
        .assert()
        .success();

    assert!(tmp.path().join("other.db").exists());
    assert!(!tmp.path().join("passdb").exists());
}
