//! CLI failure-contract tests.
//!
//! Every failure path must exit non-zero with nothing on stdout; diagnostics
//! go to stderr only.

use std::process::Command;

fn toll_inference() -> Command {
    Command::new(env!("CARGO_BIN_EXE_toll-inference"))
}

#[test]
fn test_missing_model_exits_nonzero_with_empty_stdout() {
    let output = toll_inference()
        .args(["2", "14", "--model", "no_such_model.onnx"])
        .output()
        .expect("failed to spawn binary");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "stdout must carry no JSON on failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no_such_model.onnx"));
}

#[test]
fn test_non_integer_argument_exits_nonzero_with_empty_stdout() {
    let output = toll_inference()
        .args(["abc", "14"])
        .output()
        .expect("failed to spawn binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout must carry no JSON on failure");
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_missing_arguments_exit_nonzero_with_empty_stdout() {
    let output = toll_inference()
        .args(["2"])
        .output()
        .expect("failed to spawn binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout must carry no JSON on failure");

    let output = toll_inference().output().expect("failed to spawn binary");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
