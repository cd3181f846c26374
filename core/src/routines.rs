//! Helper routines the programs call, synchronously or through the fan-out.
//!
//! Each writes one diagnostic line to the sink it is bound to.

use std::sync::Arc;

use crate::{OutputSink, Routine, Runnable};

pub const UTIL_LINE: &str = "Hello from util.";
pub const UTIL_AUX_LINE: &str = "Hello from util_aux.";
pub const HELLO_UTIL_LINE: &str = "Hello from hello_util.";

#[must_use]
pub fn util(sink: &OutputSink) -> Arc<dyn Runnable> {
    diagnostic("util", UTIL_LINE, sink)
}

#[must_use]
pub fn util_aux(sink: &OutputSink) -> Arc<dyn Runnable> {
    diagnostic("util_aux", UTIL_AUX_LINE, sink)
}

#[must_use]
pub fn hello_util(sink: &OutputSink) -> Arc<dyn Runnable> {
    diagnostic("hello_util", HELLO_UTIL_LINE, sink)
}

fn diagnostic(name: &'static str, line: &'static str, sink: &OutputSink) -> Arc<dyn Runnable> {
    let sink = sink.clone();
    Arc::new(Routine::new(name, move || {
        sink.write_line(line)?;
        Ok(())
    }))
}
