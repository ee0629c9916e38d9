//! Tests driving the `tq` binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn tq(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tq"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tq");
    // tq may exit without reading stdin (--args, --list, bad filter)
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes());
    child.wait_with_output().expect("failed to wait on tq")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_filters_stdin() {
    let output = tq(&["snake-case | reverse"], "Hello World!\nfoo bar\n");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "dlrow_olleh\nrab_oof\n");
}

#[test]
fn test_no_filter_echoes_input() {
    let output = tq(&[], "  a  \nb\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "  a  \nb\n");
}

#[test]
fn test_args_mode_uses_literal_lines() {
    let output = tq(&["--args", "pad-left:5:0", "foo", "ab"], "ignored\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "00foo\n000ab\n");
}

#[test]
fn test_reads_files_in_order() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, "b\na\n").unwrap();
    fs::write(&second, "b\nc").unwrap();

    let output = tq(
        &[
            "unique",
            first.to_str().unwrap(),
            second.to_str().unwrap(),
        ],
        "",
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "b\na\nc\n");
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let missing = dir.path().join("nope.txt");
    let output = tq(&["trim", missing.to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to read"));
}

#[test]
fn test_unknown_filter_fails_by_default() {
    let output = tq(&["uppercase | shout"], "a\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("unknown filter 'shout' at position 2"));
}

#[test]
fn test_lenient_passes_unknown_filter_through() {
    let output = tq(&["--lenient", "uppercase | shout"], "a\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "A\n");
}

#[test]
fn test_invalid_parameter_fails() {
    let output = tq(&["truncate:ten"], "abc\n");
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("truncate"), "{err}");
    assert!(err.contains("'ten'"), "{err}");
}

#[test]
fn test_list_shows_every_filter() {
    let output = tq(&["--list"], "");
    assert!(output.status.success());
    let listing = stdout(&output);
    for spec in tq::registry::all() {
        assert!(listing.contains(&spec.signature()), "missing {}", spec.name);
    }
    assert!(listing.contains("pad-left[:w[:c]]"));
}
