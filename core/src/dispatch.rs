//! Startup identification and argument dispatch.
//!
//! A [`Dispatcher`] pairs a [`Greeting`] (the identification line) with an
//! [`ArgumentStyle`] (how user arguments are echoed). Rendering is total over
//! every argument count, including an empty vector, and holds no state between
//! calls.

use std::io;

use fixture_types::{ArgumentVector, ProgramIdentity};

use crate::OutputSink;

/// The identification line printed before anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    /// `Hello world!`
    HelloWorld,
    /// `This is <name>.`
    Name,
    /// `This is <name> <version>.`
    NameAndVersion,
}

impl Greeting {
    #[must_use]
    pub fn render(self, identity: &ProgramIdentity) -> String {
        match self {
            Greeting::HelloWorld => "Hello world!".to_string(),
            Greeting::Name => format!("This is {}.", identity.program_name()),
            Greeting::NameAndVersion => format!(
                "This is {} {}.",
                identity.program_name(),
                identity.version()
            ),
        }
    }
}

/// How user arguments are reported after the greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentStyle {
    /// `First argument: <a>`, then `Second argument: <b>` only when a first
    /// argument exists. `No argument was specified` otherwise.
    Nested,
    /// `The first argument was <a>`, or `No argument was specified.`.
    /// Later arguments are ignored.
    FirstOnly,
    /// Arguments are not reported.
    Silent,
}

const NO_ARGUMENT_NESTED: &str = "No argument was specified";
const NO_ARGUMENT_FIRST_ONLY: &str = "No argument was specified.";

impl ArgumentStyle {
    fn lines(self, args: &ArgumentVector) -> Vec<String> {
        match self {
            ArgumentStyle::Nested => match args.first() {
                Some(first) => {
                    let mut lines = vec![format!("First argument: {first}")];
                    if let Some(second) = args.second() {
                        lines.push(format!("Second argument: {second}"));
                    }
                    lines
                }
                None => vec![NO_ARGUMENT_NESTED.to_string()],
            },
            ArgumentStyle::FirstOnly => match args.first() {
                Some(first) => vec![format!("The first argument was {first}")],
                None => vec![NO_ARGUMENT_FIRST_ONLY.to_string()],
            },
            ArgumentStyle::Silent => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatcher {
    greeting: Greeting,
    style: ArgumentStyle,
}

impl Dispatcher {
    #[must_use]
    pub const fn new(greeting: Greeting, style: ArgumentStyle) -> Self {
        Self { greeting, style }
    }

    /// Output lines in print order, without trailing newlines.
    #[must_use]
    pub fn lines(&self, identity: &ProgramIdentity, args: &ArgumentVector) -> Vec<String> {
        let mut lines = vec![self.greeting.render(identity)];
        lines.extend(self.style.lines(args));
        lines
    }

    pub fn dispatch(
        &self,
        sink: &OutputSink,
        identity: &ProgramIdentity,
        args: &ArgumentVector,
    ) -> io::Result<()> {
        for line in self.lines(identity, args) {
            sink.write_line(&line)?;
        }
        Ok(())
    }
}
