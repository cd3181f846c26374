//! `program-c`: identification line, first argument, sqrt(5), two helpers in sequence.

use crate::common::{PROGRAM_C, Sandbox};

const NO_ARGS: [&str; 0] = [];

#[test]
fn no_arguments() {
    let out = Sandbox::new().run(PROGRAM_C, &NO_ARGS);
    assert!(out.status.success(), "stderr: {}", out.stderr);
    assert_eq!(
        out.stdout,
        "This is program-c.\n\
         No argument was specified.\n\
         sqrt(5) is 2.236068\n\
         Hello from util.\n\
         Hello from util_aux.\n"
    );
}

#[test]
fn first_argument_is_reported() {
    let out = Sandbox::new().run(PROGRAM_C, &["foo"]);
    assert!(out.stdout.contains("The first argument was foo\n"));
    assert!(!out.stdout.contains("No argument was specified"));
}

#[test]
fn second_argument_is_never_reported() {
    let out = Sandbox::new().run(PROGRAM_C, &["foo", "bar"]);
    assert!(out.stdout.contains("The first argument was foo\n"));
    assert!(!out.stdout.contains("bar"));
}

#[test]
fn helpers_run_after_sqrt_in_order() {
    let out = Sandbox::new().run(PROGRAM_C, &["x"]);
    let lines = out.lines();
    assert_eq!(
        &lines[2..],
        ["sqrt(5) is 2.236068", "Hello from util.", "Hello from util_aux."]
    );
}

#[test]
fn configured_name_replaces_binary_name() {
    let out = Sandbox::new()
        .with_config("[identity]\nprogram_name = \"program_c\"\n")
        .run(PROGRAM_C, &NO_ARGS);
    assert!(out.stdout.starts_with("This is program_c.\n"));
}
