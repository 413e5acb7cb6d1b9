//! CLI Interface Tests
//!
//! These tests run the `pifc` binary against small source files in a
//! temporary directory and check its outputs, exit status and diagnostics.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the pifc binary
fn pifc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pifc"))
}

/// A command running in `dir` with no inherited pifc settings
fn pifc_in(dir: &Path) -> Command {
    let mut cmd = Command::new(pifc_bin());
    cmd.current_dir(dir)
        .env_remove("PIFC_CONFIG")
        .env_remove("PIFC_VERBOSE")
        .env_remove("RUST_LOG")
        .env("PIFC_NO_COLOR", "true");
    cmd
}

fn write_source(dir: &TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, source).expect("Failed to write source file");
    path
}

const PROGRAM: &str = "\
main {
    number n = -5;
    string s = \"a, b\";
    if (n <= 10) {
        write(s);
    }
}
";

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(pifc_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--out-dir")));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(pifc_bin());
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pifc").and(predicate::str::contains("0.")));
}

#[test]
fn test_cli_missing_argument() {
    let mut cmd = Command::new(pifc_bin());
    cmd.assert().failure().stderr(predicate::str::contains("<INPUT>"));
}

#[test]
fn test_cli_writes_default_outputs() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "program.txt", PROGRAM);

    pifc_in(dir.path()).arg("program.txt").assert().success();

    let pif = fs::read_to_string(dir.path().join("PIF.out")).expect("PIF.out missing");
    let lines: Vec<&str> = pif.lines().collect();
    assert_eq!(lines[0], "(main, 0)");
    assert_eq!(lines[1], "({, 0)");
    assert_eq!(lines[2], "(number, 0)");
    assert!(lines[3].starts_with("(IDENTIFIER, ("));
    assert!(pif.contains("(NUMBER_CONSTANT, ("));
    assert!(pif.contains("(STRING_CONSTANT, ("));
    assert!(pif.contains("(<=, 0)"));

    let st = fs::read_to_string(dir.path().join("ST.out")).expect("ST.out missing");
    assert_eq!(st.lines().count(), 50);
    assert!(st.contains("\"a, b\""));
    assert!(st.contains("-5"));
}

#[test]
fn test_cli_out_dir() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "program.txt", "a = b;");
    let out = dir.path().join("nested").join("out");

    pifc_in(dir.path())
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out.join("PIF.out")).unwrap(),
        "(IDENTIFIER, (47, 0))\n(=, 0)\n(IDENTIFIER, (48, 0))\n(;, 0)\n"
    );
    assert!(out.join("ST.out").exists());
}

#[test]
fn test_cli_stdout() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "p.txt", "x;");

    pifc_in(dir.path())
        .args(["p.txt", "--stdout", "--capacity", "1"])
        .assert()
        .success()
        .stdout("[x]\n\n(IDENTIFIER, (0, 0))\n(;, 0)\n");

    assert!(!dir.path().join("PIF.out").exists());
}

#[test]
fn test_cli_emit_pif_only() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "p.txt", "x;");

    pifc_in(dir.path())
        .args(["p.txt", "--emit", "pif"])
        .assert()
        .success();

    assert!(dir.path().join("PIF.out").exists());
    assert!(!dir.path().join("ST.out").exists());
}

#[test]
fn test_cli_lexical_error_fails_without_output() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "bad.txt", "a = 007;\nb @ c;\n");

    pifc_in(dir.path())
        .arg("bad.txt")
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("error[E1003]")
                .and(predicate::str::contains("error[E1001]"))
                .and(predicate::str::contains("bad.txt:2:3"))
                .and(predicate::str::contains("lexical analysis failed with 2 error(s)")),
        );

    assert!(!dir.path().join("PIF.out").exists());
    assert!(!dir.path().join("ST.out").exists());
}

#[test]
fn test_cli_signed_zero_message() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "z.txt", "x = -0;");

    pifc_in(dir.path())
        .arg("z.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("0 can't be preceded by a sign"));
}

#[test]
fn test_cli_missing_input_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    pifc_in(dir.path())
        .arg("nope.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open `nope.txt`"));
}

#[test]
fn test_cli_config_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "p.txt", "a b");
    write_source(
        &dir,
        "custom.toml",
        "symbol_table_capacity = 1\n\n[output]\nsymbol_table = \"tables/st.txt\"\nemit = \"symbols\"\n",
    );

    pifc_in(dir.path())
        .args(["p.txt", "--config", "custom.toml"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("tables").join("st.txt")).unwrap(),
        "[a,b]\n"
    );
}

#[test]
fn test_cli_config_discovered_in_current_dir() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "p.txt", "a");
    write_source(&dir, "pifc.toml", "[output]\npif = \"pif.txt\"\nemit = \"pif\"\n");

    pifc_in(dir.path()).arg("p.txt").assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("pif.txt")).unwrap(),
        "(IDENTIFIER, (47, 0))\n"
    );
}

#[test]
fn test_cli_flags_override_config() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "p.txt", "a");
    write_source(&dir, "pifc.toml", "symbol_table_capacity = 1\n");

    pifc_in(dir.path())
        .args(["p.txt", "--capacity", "2", "--stdout", "--emit", "symbols"])
        .assert()
        .success()
        .stdout("[]\n[a]\n");
}

#[test]
fn test_cli_invalid_config() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "p.txt", "a");
    write_source(&dir, "pifc.toml", "symbol_table_capacity = 0\n");

    pifc_in(dir.path())
        .arg("p.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("symbol_table_capacity must be greater than 0"));
}

#[test]
fn test_cli_rejects_oversized_capacity_flag() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "p.txt", "a");

    pifc_in(dir.path())
        .args(["p.txt", "--capacity", "4000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--capacity"));

    assert!(!dir.path().join("ST.out").exists());
}

#[test]
fn test_cli_rejects_oversized_capacity_config() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "p.txt", "a");
    write_source(&dir, "pifc.toml", "symbol_table_capacity = 4000000000\n");

    pifc_in(dir.path())
        .arg("p.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("symbol_table_capacity must be at most 1000000"));

    assert!(!dir.path().join("ST.out").exists());
}

#[test]
fn test_cli_verbose_logs_scan() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_source(&dir, "p.txt", "a;");

    pifc_in(dir.path())
        .args(["p.txt", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("scan finished"));
}
