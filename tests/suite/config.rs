//! Configuration discovery and failure handling, observed through the binaries.

use crate::common::{HELLO, PROGRAM_B, Sandbox};

const NO_ARGS: [&str; 0] = [];

#[test]
fn explicit_config_path_wins() {
    let sandbox = Sandbox::new().with_config("[identity]\nprogram_name = \"from_home\"\n");
    let explicit = sandbox.home().join("explicit.toml");
    std::fs::write(&explicit, "[identity]\nprogram_name = \"from_env\"\n").unwrap();

    let out = sandbox
        .with_env("FIXTURE_CONFIG", explicit.to_str().unwrap())
        .run(PROGRAM_B, &NO_ARGS);
    assert!(out.stdout.starts_with("This is from_env "));
}

#[test]
fn missing_config_uses_defaults() {
    let out = Sandbox::new().run(PROGRAM_B, &NO_ARGS);
    assert!(out.status.success());
    assert!(out.stdout.starts_with("This is program-b "));
}

#[test]
fn malformed_config_is_fatal() {
    let out = Sandbox::new()
        .with_config("[identity\n")
        .run(HELLO, &NO_ARGS);
    assert!(!out.status.success());
    assert!(out.stderr.contains("failed to load configuration"));
    assert!(out.stdout.is_empty());
}

#[test]
fn identity_expanding_to_empty_is_fatal() {
    let out = Sandbox::new()
        .with_config("[identity]\nversion = \"${FIXTURE_TEST_DEFINITELY_UNSET}\"\n")
        .run(PROGRAM_B, &NO_ARGS);
    assert!(!out.status.success());
    assert!(out.stderr.contains("identity.version must not be empty"));
}

#[test]
fn configured_log_file_is_used() {
    let sandbox = Sandbox::new();
    let log_path = sandbox.home().join("custom").join("run.log");
    let sandbox = sandbox.with_config(&format!(
        "[logging]\nfile = \"{}\"\n",
        log_path.display().to_string().replace('\\', "\\\\")
    ));

    let out = sandbox.run(HELLO, &NO_ARGS);
    assert!(out.status.success());
    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Logging initialized"));
    assert!(!sandbox.default_log_path().exists());
}

#[test]
fn missing_explicit_config_is_fatal() {
    let sandbox = Sandbox::new();
    let absent = sandbox.home().join("absent.toml");

    let out = sandbox
        .with_env("FIXTURE_CONFIG", absent.to_str().unwrap())
        .run(HELLO, &NO_ARGS);
    assert!(!out.status.success());
    assert!(out.stderr.contains("failed to load configuration"));
    assert!(out.stderr.contains("failed to read config at"));
    assert!(out.stdout.is_empty());
}
