//! Core logic for the fixture programs.
//!
//! Every program follows the same shape:
//!
//! ```text
//! ArgumentVector -> Dispatcher (greeting + argument lines)
//!                -> optional numeric line
//!                -> routines, either in sequence or via WorkerGroup fan-out + join
//! ```
//!
//! All output goes through an [`OutputSink`] so the flows can be exercised
//! in-process as well as from the real binaries.

pub mod dispatch;
pub mod fanout;
mod numeric;
pub mod program;
pub mod routines;
mod runnable;
mod sink;

pub use dispatch::{ArgumentStyle, Dispatcher, Greeting};
pub use fanout::{
    FanOutError, FanOutReport, WorkerGroup, WorkerHandle, WorkerOptions, WorkerOutcome, fan_out,
    fan_out_pair,
};
pub use numeric::sqrt_line;
pub use program::{Program, ProgramContext, ProgramError};
pub use runnable::{Routine, RoutineError, Runnable};
pub use sink::OutputSink;
