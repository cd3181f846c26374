use std::{fmt, io};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutineError {
    #[error("failed to write routine output")]
    Output(#[from] io::Error),
    #[error("{0}")]
    Failed(String),
}

/// A zero-argument unit of work with its own side effects.
///
/// Implementations must be shareable across threads: the fan-out hands each
/// one to a separate worker.
pub trait Runnable: Send + Sync {
    fn name(&self) -> &str;

    fn invoke(&self) -> Result<(), RoutineError>;
}

type RoutineFn = dyn Fn() -> Result<(), RoutineError> + Send + Sync;

/// Closure-backed [`Runnable`].
pub struct Routine {
    name: String,
    body: Box<RoutineFn>,
}

impl Routine {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> Result<(), RoutineError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn infallible<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::new(name, move || {
            body();
            Ok(())
        })
    }
}

impl fmt::Debug for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Routine")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Runnable for Routine {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self) -> Result<(), RoutineError> {
        (self.body)()
    }
}
