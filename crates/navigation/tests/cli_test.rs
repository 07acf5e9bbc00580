#![allow(clippy::unwrap_used, clippy::expect_used)]
//! `navreg` command-line tests.

use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn navreg() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_navreg"));
    cmd.env_remove("NAV_MANIFEST")
        .env_remove("NAV_ICON_CHECK")
        .env("RUST_LOG", "off");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_check_builtin_succeeds() {
    let output = navreg().arg("check").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_check_defects_fails() {
    let output = navreg()
        .arg("--manifest")
        .arg(fixture("defects.toml"))
        .arg("check")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 3, "{out}");
    assert!(out.contains("primary[0]: empty title"));
    assert!(out.contains("unknown icon 'ChartBar'"));
}

#[test]
fn test_no_icons_skips_icon_lookup() {
    let output = navreg()
        .arg("--manifest")
        .arg(fixture("defects.toml"))
        .args(["check", "--no-icons"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 2, "{out}");
    assert!(!out.contains("unknown icon"));
}

#[test]
fn test_icon_check_env_disables_lookup() {
    let output = navreg()
        .env("NAV_ICON_CHECK", "false")
        .arg("--manifest")
        .arg(fixture("defects.toml"))
        .arg("check")
        .output()
        .unwrap();

    assert!(!stdout(&output).contains("unknown icon"));
}

#[test]
fn test_manifest_flag_overrides_env() {
    let output = navreg()
        .env("NAV_MANIFEST", fixture("defects.toml"))
        .arg("--manifest")
        .arg(fixture("frontend.toml"))
        .arg("check")
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stdout(&output));
}

#[test]
fn test_manifest_env_is_used() {
    let output = navreg()
        .env("NAV_MANIFEST", fixture("starter_kit.toml"))
        .args(["show", "--section", "footer", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let items: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(items[2]["title"], "Starter Kit");
}
