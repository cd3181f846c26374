//! `hello`: greeting, nested argument report, one helper routine.

use crate::common::{HELLO, Sandbox};

const NO_ARGS: [&str; 0] = [];

#[test]
fn no_arguments() {
    let out = Sandbox::new().run(HELLO, &NO_ARGS);
    assert!(out.status.success(), "stderr: {}", out.stderr);
    assert_eq!(
        out.stdout,
        "Hello world!\nNo argument was specified\nHello from hello_util.\n"
    );
}

#[test]
fn one_argument() {
    let out = Sandbox::new().run(HELLO, &["foo"]);
    assert!(out.status.success());
    assert_eq!(
        out.stdout,
        "Hello world!\nFirst argument: foo\nHello from hello_util.\n"
    );
}

#[test]
fn two_arguments() {
    let out = Sandbox::new().run(HELLO, &["foo", "bar"]);
    assert!(out.status.success());
    assert!(out.stdout.contains("First argument: foo\n"));
    assert!(out.stdout.contains("Second argument: bar\n"));
    assert!(!out.stdout.contains("No argument"));
}

#[test]
fn extra_arguments_are_ignored() {
    let out = Sandbox::new().run(HELLO, &["a", "b", "c"]);
    assert_eq!(
        out.lines(),
        [
            "Hello world!",
            "First argument: a",
            "Second argument: b",
            "Hello from hello_util.",
        ]
    );
}

#[test]
fn arguments_with_spaces_are_verbatim() {
    let out = Sandbox::new().run(HELLO, &["two words", "--not-a-flag"]);
    assert!(out.stdout.contains("First argument: two words\n"));
    assert!(out.stdout.contains("Second argument: --not-a-flag\n"));
}

#[test]
fn repeated_runs_are_identical() {
    let sandbox = Sandbox::new();
    let first = sandbox.run(HELLO, &["foo", "bar"]);
    let second = sandbox.run(HELLO, &["foo", "bar"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn logs_stay_off_stdout() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(HELLO, &NO_ARGS);
    assert!(!out.stdout.contains("Starting program"));

    let log = std::fs::read_to_string(sandbox.default_log_path()).unwrap();
    assert!(log.contains("Starting program"));
}
