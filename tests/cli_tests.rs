//! CLI integration tests
//!
//! Drive the binary with the stdout backend so no notification daemon
//! is needed.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn push_courier() -> Command {
    let mut cmd = Command::cargo_bin("push-courier").unwrap();
    // Isolate from any user config
    cmd.env("XDG_CONFIG_HOME", "/nonexistent");
    cmd.env_remove("PUSH_COURIER_ICON");
    cmd.env_remove("PUSH_COURIER_DISPLAY");
    cmd
}

#[test]
fn oneshot_dispatches_full_payload() {
    push_courier()
        .args(["-D", "stdout"])
        .write_stdin(r#"{"notification":{"title":"Alert","body":"Server down"},"data":{"id":"42"}}"#)
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""title":"Alert""#)
                .and(predicate::str::contains(r#""body":"Server down""#))
                .and(predicate::str::contains(r#""id":"42""#)),
        );
}

#[test]
fn oneshot_empty_payload_uses_defaults() {
    push_courier()
        .args(["-D", "stdout"])
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""title":"Notification""#)
                .and(predicate::str::contains(r#""body":"""#))
                .and(predicate::str::contains("data").not()),
        );
}

#[test]
fn oneshot_uses_configured_icon() {
    push_courier()
        .args(["-D", "stdout", "-i", "/icons/app-192.png"])
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""icon":"/icons/app-192.png""#));
}

#[test]
fn oneshot_reads_payload_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"notification":{{"title":"FromFile"}}}}"#).unwrap();

    push_courier()
        .args(["-D", "stdout", "-p"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title":"FromFile""#));
}

#[test]
fn oneshot_rejects_malformed_payload() {
    push_courier()
        .args(["-D", "stdout"])
        .write_stdin("{not json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid push payload"));
}

#[test]
fn listen_dispatches_each_line() {
    push_courier()
        .args(["--listen", "-D", "stdout"])
        .write_stdin(concat!(
            r#"{"notification":{"title":"First"}}"#,
            "\n",
            r#"{"notification":{"title":"Second"}}"#,
            "\n",
        ))
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""title":"First""#)
                .and(predicate::str::contains(r#""title":"Second""#)),
        );
}

#[test]
fn listen_skips_malformed_lines_and_continues() {
    push_courier()
        .args(["--listen", "-D", "stdout"])
        .write_stdin("{broken\n{\"notification\":{\"title\":\"Still here\"}}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title":"Still here""#))
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn display_env_var_selects_backend() {
    push_courier()
        .env("PUSH_COURIER_DISPLAY", "stdout")
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title":"Notification""#));
}

#[test]
fn unknown_display_backend_is_usage_error() {
    // clap validates the env-supplied value like a flag value
    push_courier()
        .env("PUSH_COURIER_DISPLAY", "growl")
        .write_stdin("{}")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'growl'"));
}

#[test]
fn display_flag_overrides_env_var() {
    // No stdout output proves the noop backend won over the env var
    push_courier()
        .env("PUSH_COURIER_DISPLAY", "stdout")
        .args(["-D", "noop"])
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::contains("title").not());
}

#[test]
fn config_get_unknown_key() {
    push_courier()
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_unknown_key() {
    push_courier()
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn signing_reports_debug_without_keystore() {
    let dir = tempfile::tempdir().unwrap();

    push_courier()
        .arg("signing")
        .arg("--properties")
        .arg(dir.path().join("key.properties"))
        .assert()
        .success()
        .stdout(predicate::str::contains("debug"));
}

#[test]
fn signing_reports_release_with_keystore() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "keyAlias=upload\nkeyPassword=p1\nstoreFile=/keys/upload.jks\nstorePassword=p2\n"
    )
    .unwrap();

    push_courier()
        .arg("signing")
        .arg("--properties")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("release"));
}

#[test]
fn signing_fails_on_incomplete_keystore() {
    // storeFile is the one key left out
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "keyAlias=upload\nkeyPassword=p1\nstorePassword=p2\n").unwrap();

    push_courier()
        .arg("signing")
        .arg("--properties")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("storeFile"));
}
