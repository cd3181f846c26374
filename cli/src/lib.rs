//! Shared bootstrap for the fixture binaries.
//!
//! ```text
//! main() -> fixture::run(program, name, version)
//!             |-> FixtureConfig::load()      (FIXTURE_CONFIG or ~/.fixture/config.toml)
//!             |-> init_tracing(config)       (log file only, never stdout)
//!             |-> ProgramContext             (identity + argv + worker options)
//!             '-> Program::run(ctx)
//! ```
//!
//! Stdout carries only the program's fixture output. Errors are returned to
//! `main`, which prints them to stderr and exits non-zero.

mod logging;

use anyhow::{Context, Result};

use fixture_config::FixtureConfig;
use fixture_core::{WorkerOptions, fanout::DEFAULT_NAME_PREFIX};
use fixture_types::{ArgumentVector, ProgramIdentity};

pub use fixture_core::{OutputSink, Program, ProgramContext};
pub use logging::init_tracing;

/// Entry point shared by every binary.
///
/// `name` and `version` are the build-time defaults for the identification
/// line; configuration may override them.
pub fn run(program: Program, name: &str, version: &str) -> Result<()> {
    let loaded = FixtureConfig::load();
    init_tracing(loaded.as_ref().ok().and_then(Option::as_ref));

    let config = loaded
        .context("failed to load configuration")?
        .unwrap_or_default();

    let ctx = build_context(&config, name, version, ArgumentVector::from_env())?;
    program
        .run(&ctx)
        .with_context(|| format!("{} failed", program.binary_name()))
}

/// Resolve identity and worker options from configuration.
pub fn build_context(
    config: &FixtureConfig,
    name: &str,
    version: &str,
    args: ArgumentVector,
) -> Result<ProgramContext> {
    let defaults = ProgramIdentity::parse(name, version)
        .with_context(|| format!("invalid built-in identity {name:?} {version:?}"))?;
    let identity = config.identity(defaults);

    tracing::debug!(
        program_name = identity.program_name(),
        version = identity.version(),
        "Resolved identity"
    );

    Ok(ProgramContext::new(identity, args).with_workers(worker_options(config)))
}

#[must_use]
pub fn worker_options(config: &FixtureConfig) -> WorkerOptions {
    WorkerOptions {
        stack_size: config.worker_stack_size(),
        name_prefix: config
            .worker_name_prefix()
            .unwrap_or(DEFAULT_NAME_PREFIX)
            .to_string(),
    }
}
