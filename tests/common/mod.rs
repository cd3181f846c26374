//! Shared test utilities and fixtures
//!
//! Runs the real binaries with `HOME` and the working directory pointed at a
//! scratch directory, so configuration and log files never touch the user's
//! environment.

#![allow(dead_code)]

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tempfile::TempDir;

pub const HELLO: &str = env!("CARGO_BIN_EXE_hello");
pub const PROGRAM_B: &str = env!("CARGO_BIN_EXE_program-b");
pub const PROGRAM_C: &str = env!("CARGO_BIN_EXE_program-c");

pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

pub struct Sandbox {
    home: TempDir,
    envs: Vec<(String, String)>,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("failed to create sandbox home"),
            envs: Vec::new(),
        }
    }

    /// Write `~/.fixture/config.toml` inside the sandbox.
    pub fn with_config(self, contents: &str) -> Self {
        let path = self.default_config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        self
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn default_config_path(&self) -> PathBuf {
        self.home().join(".fixture").join("config.toml")
    }

    pub fn default_log_path(&self) -> PathBuf {
        self.home().join(".fixture").join("logs").join("fixture.log")
    }

    pub fn run<S: AsRef<OsStr>>(&self, binary: &str, args: &[S]) -> RunOutput {
        let mut command = Command::new(binary);
        command
            .args(args)
            .current_dir(self.home())
            .env("HOME", self.home())
            .env_remove("FIXTURE_CONFIG")
            .env_remove("RUST_LOG");
        for (key, value) in &self.envs {
            command.env(key, value);
        }

        let output = command.output().expect("failed to launch fixture binary");
        RunOutput {
            status: output.status,
            stdout: String::from_utf8(output.stdout).expect("stdout is UTF-8"),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
