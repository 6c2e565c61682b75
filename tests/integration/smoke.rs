// tests/integration/smoke.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_stamp"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stamp").and(predicate::str::contains("METADATA")));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_stamp"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn too_few_arguments_is_a_usage_error() {
    Command::new(env!("CARGO_BIN_EXE_stamp"))
        .args(["scratch.txt", "version.tmpl"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("OUTPUT"));
}

#[test]
fn too_many_arguments_is_a_usage_error() {
    Command::new(env!("CARGO_BIN_EXE_stamp"))
        .args(["a", "b", "c", "d"])
        .assert()
        .code(2);
}
