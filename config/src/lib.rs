//! Configuration for the fixture programs.
//!
//! ```toml
//! [identity]
//! program_name = "program_b"
//! version = "${FIXTURE_VERSION}"
//!
//! [workers]
//! stack_size = 262144
//! name_prefix = "fixture-worker"
//!
//! [logging]
//! filter = "debug"
//! file = "/tmp/fixture.log"
//! ```
//!
//! The file is looked up at `$FIXTURE_CONFIG`, falling back to
//! `~/.fixture/config.toml`. A missing file is not an error.

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use fixture_types::{NonEmptyString, ProgramIdentity};

pub const CONFIG_PATH_ENV: &str = "FIXTURE_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    pub identity: Option<IdentityConfig>,
    pub workers: Option<WorkersConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config at {}: {field} must not be empty", path.display())]
    Invalid { path: PathBuf, field: &'static str },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

/// Overrides for the identification line. Values support `${VAR}` expansion.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityConfig {
    pub program_name: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkersConfig {
    /// Stack size in bytes for each worker thread. Platform default if unset.
    pub stack_size: Option<usize>,
    /// Prefix for worker thread names (`<prefix>-<routine>`).
    pub name_prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` takes precedence.
    pub filter: Option<String>,
    /// Log file tried before the default locations.
    pub file: Option<PathBuf>,
}

pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find("${") {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if var.is_empty() {
                    out.push_str("${}");
                } else {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                // Unclosed: keep the remainder verbatim.
                out.push_str(&rest[pos..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

impl FixtureConfig {
    /// Load from `$FIXTURE_CONFIG`, else `~/.fixture/config.toml`.
    ///
    /// Only the home-directory file may be absent; an explicitly named file
    /// that cannot be read is an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        if let Some(path) = explicit_config_path() {
            return Self::load_from(&path).map(Some);
        }

        let path = match home_config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config: Self = match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        config.validate(path)?;
        Ok(config)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Overlay configured identity fields on the binary's defaults.
    pub fn identity(&self, defaults: ProgramIdentity) -> ProgramIdentity {
        let Some(identity) = self.identity.as_ref() else {
            return defaults;
        };

        let mut resolved = defaults;
        if let Some(name) = identity.program_name.as_deref().and_then(expand_non_empty) {
            resolved = resolved.with_program_name(name);
        }
        if let Some(version) = identity.version.as_deref().and_then(expand_non_empty) {
            resolved = resolved.with_version(version);
        }
        resolved
    }

    #[must_use]
    pub fn worker_stack_size(&self) -> Option<usize> {
        self.workers.as_ref().and_then(|workers| workers.stack_size)
    }

    #[must_use]
    pub fn worker_name_prefix(&self) -> Option<&str> {
        self.workers
            .as_ref()
            .and_then(|workers| workers.name_prefix.as_deref())
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.filter.as_deref())
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.file.as_deref())
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let Some(identity) = self.identity.as_ref() else {
            return Ok(());
        };
        let fields = [
            ("identity.program_name", identity.program_name.as_deref()),
            ("identity.version", identity.version.as_deref()),
        ];
        for (field, value) in fields {
            if let Some(raw) = value
                && expand_non_empty(raw).is_none()
            {
                return Err(ConfigError::Invalid {
                    path: path.to_path_buf(),
                    field,
                });
            }
        }
        Ok(())
    }
}

fn expand_non_empty(raw: &str) -> Option<NonEmptyString> {
    NonEmptyString::new(expand_env_vars(raw)).ok()
}

pub fn config_path() -> Option<PathBuf> {
    explicit_config_path().or_else(home_config_path)
}

fn explicit_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_ENV)
        .filter(|explicit| !explicit.is_empty())
        .map(PathBuf::from)
}

fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".fixture").join("config.toml"))
}
