use crate::{EmptyStringError, NonEmptyString};

/// Name and version a program announces on its identification line.
///
/// Each binary supplies its package metadata as the default; configuration
/// may override either field at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramIdentity {
    program_name: NonEmptyString,
    version: NonEmptyString,
}

impl ProgramIdentity {
    #[must_use]
    pub fn new(program_name: NonEmptyString, version: NonEmptyString) -> Self {
        Self {
            program_name,
            version,
        }
    }

    pub fn parse(
        program_name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, EmptyStringError> {
        Ok(Self::new(
            NonEmptyString::new(program_name)?,
            NonEmptyString::new(version)?,
        ))
    }

    #[must_use]
    pub fn program_name(&self) -> &str {
        self.program_name.as_str()
    }

    #[must_use]
    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    #[must_use]
    pub fn with_program_name(mut self, program_name: NonEmptyString) -> Self {
        self.program_name = program_name;
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: NonEmptyString) -> Self {
        self.version = version;
        self
    }
}
