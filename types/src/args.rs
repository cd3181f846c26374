//! The process argument vector.

use std::ffi::OsString;

/// Ordered, read-only argument tokens handed to a program at startup.
///
/// Index 0 is the program name by convention; indices 1.. are user tokens.
/// The vector may be empty (an exec with no `argv[0]` is legal).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVector(Vec<String>);

impl ArgumentVector {
    #[must_use]
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// Build from raw OS strings. Non-UTF-8 tokens are converted lossily.
    #[must_use]
    pub fn from_os<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self(
            tokens
                .into_iter()
                .map(|token| token.to_string_lossy().into_owned())
                .collect(),
        )
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::from_os(std::env::args_os())
    }

    #[must_use]
    pub fn program(&self) -> Option<&str> {
        self.get(0)
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.get(1)
    }

    #[must_use]
    pub fn second(&self) -> Option<&str> {
        self.get(2)
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Tokens after the program name.
    #[must_use]
    pub fn user_args(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
