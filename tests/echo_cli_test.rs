//! End-to-end tests that launch the arg_echo fixture as a child process

use std::process::{Command, Output};

fn run_fixture(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arg_echo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to launch arg_echo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_no_arguments() {
    let output = run_fixture(&[]);
    assert_eq!(stdout(&output), "no arg passed\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_single_integer_arguments() {
    for (arg, expected) in [("5", 5), ("42", 42), ("-7", -7), ("-3", -3), ("0", 0)] {
        let output = run_fixture(&[arg]);
        assert_eq!(stdout(&output), format!("n passed: {expected}\n"), "arg {arg:?}");
        assert_eq!(output.status.code(), Some(0), "arg {arg:?}");
    }
}

#[test]
fn test_single_non_numeric_argument_yields_zero() {
    for arg in ["foo", "abc", "", "--help", "--version", "--"] {
        let output = run_fixture(&[arg]);
        assert_eq!(stdout(&output), "n passed: 0\n", "arg {arg:?}");
        assert_eq!(output.status.code(), Some(0), "arg {arg:?}");
    }
}

#[test]
fn test_best_effort_prefix_parsing() {
    let output = run_fixture(&["  42abc"]);
    assert_eq!(stdout(&output), "n passed: 42\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_too_many_arguments() {
    let output = run_fixture(&["1", "2"]);
    assert_eq!(
        stdout(&output),
        "too many args passed! expected <= 2, got 3\n"
    );
    assert_eq!(output.status.code(), Some(1));

    let output = run_fixture(&["a", "b", "c", "d"]);
    let text = stdout(&output);
    assert!(text.contains("too many args passed!"));
    assert!(text.ends_with("got 5\n"));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_quiet_stderr_by_default() {
    let output = run_fixture(&["1", "2", "3"]);
    assert!(output.stderr.is_empty(), "unexpected stderr: {:?}", output.stderr);
}

#[test]
fn test_repeated_invocations_are_identical() {
    let first = run_fixture(&["17"]);
    let second = run_fixture(&["17"]);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_does_not_panic() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = Command::new(env!("CARGO_BIN_EXE_arg_echo"))
        .arg(OsStr::from_bytes(b"9\xff"))
        .output()
        .expect("Failed to launch arg_echo");
    assert_eq!(stdout(&output), "n passed: 9\n");
    assert_eq!(output.status.code(), Some(0));
}
