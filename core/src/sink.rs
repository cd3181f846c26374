use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

/// Line-oriented destination for program output.
///
/// Cloning shares the destination. Each `write_line` is atomic with respect
/// to other writers, so lines from concurrent workers never interleave
/// mid-line; their relative order is unspecified.
#[derive(Debug, Clone, Default)]
pub enum OutputSink {
    #[default]
    Stdout,
    Buffer(Arc<Mutex<Vec<u8>>>),
}

impl OutputSink {
    #[must_use]
    pub fn stdout() -> Self {
        Self::Stdout
    }

    #[must_use]
    pub fn buffer() -> Self {
        Self::Buffer(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes())?;
                out.write_all(b"\n")?;
                out.flush()
            }
            Self::Buffer(buffer) => {
                let mut buffer = buffer.lock().unwrap_or_else(PoisonError::into_inner);
                buffer.extend_from_slice(line.as_bytes());
                buffer.push(b'\n');
                Ok(())
            }
        }
    }

    /// Contents written so far. `None` for stdout.
    #[must_use]
    pub fn captured(&self) -> Option<String> {
        match self {
            Self::Stdout => None,
            Self::Buffer(buffer) => {
                let buffer = buffer.lock().unwrap_or_else(PoisonError::into_inner);
                Some(String::from_utf8_lossy(&buffer).into_owned())
            }
        }
    }
}
