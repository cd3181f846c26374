//! Worker fan-out and join.
//!
//! A [`WorkerGroup`] spawns one OS thread per [`Runnable`] and joins them in
//! creation order. Workers run unordered relative to each other; the only
//! synchronization point is the join, which blocks with no timeout. There is
//! no cancellation: a spawned worker always runs to completion.
//!
//! Invariant: every spawned worker is joined exactly once. [`WorkerHandle::join`]
//! consumes the handle, and dropping a group joins whatever it still owns
//! (the path taken when a later spawn fails after earlier workers started).

use std::{any::Any, io, mem, sync::Arc, thread};

use thiserror::Error;

use crate::{RoutineError, Runnable};

pub const DEFAULT_NAME_PREFIX: &str = "fixture";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerOptions {
    /// Stack size in bytes per worker. Platform default when `None`.
    pub stack_size: Option<usize>,
    /// Worker threads are named `<prefix>-<routine name>`.
    pub name_prefix: String,
}

impl Default for WorkerOptions {
    fn default() -> Self {
        Self {
            stack_size: None,
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FanOutError {
    #[error("failed to spawn worker {worker}")]
    Spawn {
        worker: String,
        #[source]
        source: io::Error,
    },
    #[error("worker {worker} failed")]
    Failed {
        worker: String,
        #[source]
        source: RoutineError,
    },
    #[error("worker {worker} panicked: {message}")]
    Panicked { worker: String, message: String },
}

/// How a joined worker finished.
#[derive(Debug)]
pub enum WorkerOutcome {
    Completed,
    Failed(RoutineError),
    Panicked(String),
}

impl WorkerOutcome {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, WorkerOutcome::Completed)
    }
}

/// A running worker. Joining consumes the handle.
#[derive(Debug)]
pub struct WorkerHandle {
    name: String,
    thread: thread::JoinHandle<Result<(), RoutineError>>,
}

impl WorkerHandle {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn join(self) -> (String, WorkerOutcome) {
        let outcome = match self.thread.join() {
            Ok(Ok(())) => WorkerOutcome::Completed,
            Ok(Err(err)) => WorkerOutcome::Failed(err),
            Err(payload) => WorkerOutcome::Panicked(panic_payload_to_string(&payload)),
        };
        (self.name, outcome)
    }
}

fn panic_payload_to_string(payload: &Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Owner of spawned workers.
#[derive(Debug, Default)]
pub struct WorkerGroup {
    options: WorkerOptions,
    handles: Vec<WorkerHandle>,
}

impl WorkerGroup {
    #[must_use]
    pub fn new(options: WorkerOptions) -> Self {
        Self {
            options,
            handles: Vec::new(),
        }
    }

    /// Start a worker bound to `runnable`.
    ///
    /// Creation failure is returned immediately; workers already started stay
    /// owned by the group and are joined when it is joined or dropped.
    pub fn spawn(&mut self, runnable: Arc<dyn Runnable>) -> Result<(), FanOutError> {
        let worker = runnable.name().to_string();
        let mut builder =
            thread::Builder::new().name(format!("{}-{}", self.options.name_prefix, worker));
        if let Some(stack_size) = self.options.stack_size {
            builder = builder.stack_size(stack_size);
        }

        let thread = match builder.spawn(move || runnable.invoke()) {
            Ok(thread) => thread,
            Err(source) => {
                tracing::error!(worker = %worker, error = %source, "Failed to spawn worker");
                return Err(FanOutError::Spawn { worker, source });
            }
        };

        tracing::debug!(worker = %worker, index = self.handles.len(), "Spawned worker");
        self.handles.push(WorkerHandle {
            name: worker,
            thread,
        });
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Block until every worker has finished, joining in creation order.
    pub fn join_all(mut self) -> FanOutReport {
        let handles = mem::take(&mut self.handles);
        let outcomes = handles
            .into_iter()
            .map(|handle| {
                let (worker, outcome) = handle.join();
                log_outcome(&worker, &outcome);
                (worker, outcome)
            })
            .collect();
        FanOutReport { outcomes }
    }
}

impl Drop for WorkerGroup {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            tracing::debug!(worker = %handle.name(), "Joining worker from dropped group");
            let (worker, outcome) = handle.join();
            log_outcome(&worker, &outcome);
        }
    }
}

fn log_outcome(worker: &str, outcome: &WorkerOutcome) {
    match outcome {
        WorkerOutcome::Completed => {
            tracing::debug!(worker = %worker, "Joined worker");
        }
        WorkerOutcome::Failed(err) => {
            tracing::warn!(worker = %worker, error = %err, "Worker routine failed");
        }
        WorkerOutcome::Panicked(message) => {
            tracing::warn!(worker = %worker, panic = %message, "Worker panicked");
        }
    }
}

/// Per-worker outcomes in creation order.
#[derive(Debug)]
pub struct FanOutReport {
    outcomes: Vec<(String, WorkerOutcome)>,
}

impl FanOutReport {
    pub fn outcomes(&self) -> impl Iterator<Item = (&str, &WorkerOutcome)> {
        self.outcomes
            .iter()
            .map(|(worker, outcome)| (worker.as_str(), outcome))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.outcomes
            .iter()
            .all(|(_, outcome)| outcome.is_completed())
    }

    /// First failed or panicked worker as an error.
    pub fn into_result(self) -> Result<(), FanOutError> {
        for (worker, outcome) in self.outcomes {
            match outcome {
                WorkerOutcome::Completed => {}
                WorkerOutcome::Failed(source) => {
                    return Err(FanOutError::Failed { worker, source });
                }
                WorkerOutcome::Panicked(message) => {
                    return Err(FanOutError::Panicked { worker, message });
                }
            }
        }
        Ok(())
    }
}

/// Spawn one worker per routine, in order, then join them all.
///
/// Stops at the first creation failure; workers started before it are still
/// joined before the error is returned.
pub fn fan_out<I>(routines: I, options: WorkerOptions) -> Result<FanOutReport, FanOutError>
where
    I: IntoIterator<Item = Arc<dyn Runnable>>,
{
    let mut group = WorkerGroup::new(options);
    for routine in routines {
        group.spawn(routine)?;
    }
    Ok(group.join_all())
}

/// Two-worker fan-out: `primary` is created first, then `secondary`.
pub fn fan_out_pair(
    primary: Arc<dyn Runnable>,
    secondary: Arc<dyn Runnable>,
    options: WorkerOptions,
) -> Result<FanOutReport, FanOutError> {
    fan_out([primary, secondary], options)
}
