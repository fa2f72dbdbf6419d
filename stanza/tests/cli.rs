//! End-to-end tests for the `stanza` binary.

use std::{
    fs,
    path::Path,
    process::{Command, Stdio},
};

use tempfile::TempDir;

const MANIFEST: &str = r#"
[settings]
dialect = "java"

[blocks.declare]
description = "Trace storage"
nodes = [
    { statement = "final Map<Integer, Object> map = new HashMap<>()" },
    { statement = "int time = 0" },
]

[blocks.loop]
nodes = [
    { scope = "for (Object x : source) {", close = "}", nodes = [{ statement = "map.put(++time, x)" }] },
]
"#;

fn stanza(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_stanza"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run stanza")
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("stanza.toml"), MANIFEST).unwrap();
    temp
}

#[test]
fn test_render_to_stdout() {
    let temp = project();
    let output = stanza(temp.path(), &["render"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "final Map<Integer, Object> map = new HashMap<>();\nint time = 0;\n\n\
         for (Object x : source) {\n    map.put(++time, x);\n}\n"
    );
}

#[test]
fn test_render_single_block_with_indent() {
    let temp = project();
    let output = stanza(temp.path(), &["render", "-b", "declare", "--indent", "2"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "        final Map<Integer, Object> map = new HashMap<>();\n        int time = 0;\n"
    );
}

#[test]
fn test_render_to_file() {
    let temp = project();
    let output = stanza(temp.path(), &["render", "-o", "gen/Trace.java"]);

    assert!(output.status.success());
    let written = fs::read_to_string(temp.path().join("gen/Trace.java")).unwrap();
    assert!(written.starts_with("final Map<Integer, Object> map"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("wrote 2 blocks"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_render_fails_when_stdout_is_full() {
    let temp = project();
    let full = fs::OpenOptions::new().write(true).open("/dev/full").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_stanza"))
        .arg("render")
        .current_dir(temp.path())
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run stanza");

    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("failed to write rendered code to stdout")
    );
}

#[test]
fn test_render_unknown_block_fails() {
    let temp = project();
    let output = stanza(temp.path(), &["render", "-b", "missing"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown block 'missing'"));
}

#[test]
fn test_check_valid_manifest() {
    let temp = project();
    let output = stanza(temp.path(), &["check"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("stanza.toml is valid"));
    assert!(stdout.contains("declare (2 nodes, 2 total; statement: 2): Trace storage"));
    assert!(stdout.contains("loop (1 nodes, 2 total; scope: 1)"));
}

#[test]
fn test_check_invalid_manifest_exits_with_diagnostic() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("stanza.toml"),
        "[settings]\ndialect = \"cobol\"\n",
    )
    .unwrap();

    let output = stanza(temp.path(), &["check"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown dialect 'cobol'"));
}

#[test]
fn test_missing_manifest() {
    let temp = TempDir::new().unwrap();
    let output = stanza(temp.path(), &["check"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}
