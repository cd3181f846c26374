//! The three fixture program flows.

use std::{io, sync::Arc};

use thiserror::Error;

use fixture_types::{ArgumentVector, ProgramIdentity};

use crate::{
    ArgumentStyle, Dispatcher, FanOutError, Greeting, OutputSink, RoutineError, Runnable,
    WorkerOptions, fan_out_pair, routines, sqrt_line,
};

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("failed to write program output")]
    Output(#[from] io::Error),
    #[error("routine failed")]
    Routine(#[from] RoutineError),
    #[error(transparent)]
    FanOut(#[from] FanOutError),
}

/// Everything a program needs at startup.
#[derive(Debug, Clone)]
pub struct ProgramContext {
    pub identity: ProgramIdentity,
    pub args: ArgumentVector,
    pub sink: OutputSink,
    pub workers: WorkerOptions,
}

impl ProgramContext {
    #[must_use]
    pub fn new(identity: ProgramIdentity, args: ArgumentVector) -> Self {
        Self {
            identity,
            args,
            sink: OutputSink::stdout(),
            workers: WorkerOptions::default(),
        }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: OutputSink) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: WorkerOptions) -> Self {
        self.workers = workers;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// Greeting, nested argument report, `hello_util`.
    Hello,
    /// Name and version, `sqrt(3)`, `util` and `util_aux` on two workers.
    ProgramB,
    /// Name, first argument, `sqrt(5)`, `util` then `util_aux` in sequence.
    ProgramC,
}

impl Program {
    #[must_use]
    pub const fn binary_name(self) -> &'static str {
        match self {
            Program::Hello => "hello",
            Program::ProgramB => "program-b",
            Program::ProgramC => "program-c",
        }
    }

    #[must_use]
    pub const fn dispatcher(self) -> Dispatcher {
        match self {
            Program::Hello => Dispatcher::new(Greeting::HelloWorld, ArgumentStyle::Nested),
            Program::ProgramB => Dispatcher::new(Greeting::NameAndVersion, ArgumentStyle::Silent),
            Program::ProgramC => Dispatcher::new(Greeting::Name, ArgumentStyle::FirstOnly),
        }
    }

    pub fn run(self, ctx: &ProgramContext) -> Result<(), ProgramError> {
        tracing::info!(
            program = self.binary_name(),
            argc = ctx.args.len(),
            "Starting program"
        );

        self.dispatcher()
            .dispatch(&ctx.sink, &ctx.identity, &ctx.args)?;

        match self {
            Program::Hello => {
                run_in_sequence([routines::hello_util(&ctx.sink)])?;
            }
            Program::ProgramC => {
                ctx.sink.write_line(&sqrt_line(5))?;
                run_in_sequence([routines::util(&ctx.sink), routines::util_aux(&ctx.sink)])?;
            }
            Program::ProgramB => {
                ctx.sink.write_line(&sqrt_line(3))?;
                let report = fan_out_pair(
                    routines::util(&ctx.sink),
                    routines::util_aux(&ctx.sink),
                    ctx.workers.clone(),
                )?;
                report.into_result()?;
            }
        }

        tracing::info!(program = self.binary_name(), "Program finished");
        Ok(())
    }
}

fn run_in_sequence<I>(routines: I) -> Result<(), RoutineError>
where
    I: IntoIterator<Item = Arc<dyn Runnable>>,
{
    for routine in routines {
        tracing::debug!(routine = routine.name(), "Invoking routine");
        routine.invoke()?;
    }
    Ok(())
}
