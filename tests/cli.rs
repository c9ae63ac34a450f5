//! Command line behaviour of the `tktfwd_bundler` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn bundler(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tktfwd_bundler").unwrap();
    cmd.current_dir(dir).env_remove("TKTFWD_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn variants_lists_builtin_table() {
    let dir = tempfile::tempdir().unwrap();

    bundler(dir.path())
        .arg("variants")
        .assert()
        .success()
        .stdout(predicate::str::contains("release (binary suffix: none)"))
        .stdout(predicate::str::contains("  linux: -O0 -g"));
}

#[test]
fn configured_variant_is_listed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tktfwd.toml"),
        "[variants.asan]\nbin_suffix = \"-asan\"\ncxxflags = { linux = [\"-fsanitize=address\"] }\n",
    )
    .unwrap();

    bundler(dir.path())
        .arg("variants")
        .assert()
        .success()
        .stdout(predicate::str::contains("asan (binary suffix: -asan)"))
        .stdout(predicate::str::contains("  linux: -fsanitize=address"));
}

#[test]
fn unknown_variant_fails() {
    let dir = tempfile::tempdir().unwrap();

    bundler(dir.path())
        .args(["--variant", "nope", "package"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown build variant `nope`"));
}

#[test]
fn explicit_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();

    bundler(dir.path())
        .args(["--config", "absent.toml", "variants"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read configuration"));
}

#[test]
fn malformed_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tktfwd.toml"), "[package\nname = 1").unwrap();

    bundler(dir.path())
        .arg("variants")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn package_without_build_output_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();

    // Either the host is not rpm-based or the build output is missing;
    // both end in a reported error, never a panic.
    bundler(dir.path())
        .arg("package")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}
