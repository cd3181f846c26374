use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use fixture_config::FixtureConfig;

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// Filter precedence: `RUST_LOG`, then `[logging] filter`, then `info`.
/// Events go to the first log file that can be opened; stdout and stderr are
/// never written, since stdout is the program's contract.
pub fn init_tracing(config: Option<&FixtureConfig>) {
    let mut init_warnings = Vec::new();
    let env_filter = select_filter(config.and_then(FixtureConfig::log_filter), &mut init_warnings);

    let candidates = log_file_candidates(config.and_then(FixtureConfig::log_file));
    let (log_file, open_warnings) = open_log_file(&candidates);
    init_warnings.extend(open_warnings);

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No writable log location: drop events rather than touch stdout.
    tracing_subscriber::registry().with(env_filter).init();
}

fn select_filter(configured: Option<&str>, warnings: &mut Vec<String>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    if let Some(raw) = configured {
        match EnvFilter::try_new(raw) {
            Ok(filter) => return filter,
            Err(e) => warnings.push(format!("Ignoring invalid log filter {raw:?}: {e}")),
        }
    }
    EnvFilter::new(DEFAULT_FILTER)
}

fn open_log_file(candidates: &[PathBuf]) -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(candidate) {
            Ok(file) => return (Some((candidate.clone(), file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = configured {
        candidates.push(path.to_path_buf());
    }

    // Primary: ~/.fixture/logs/fixture.log
    if let Some(config_path) = FixtureConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("fixture.log"));
    }

    // Fallback: ./.fixture/logs/fixture.log
    candidates.push(PathBuf::from(".fixture").join("logs").join("fixture.log"));

    candidates
}
