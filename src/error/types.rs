//! Error types
//!
//! Defines the error type reported by every fallible `FileLogger` operation.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::handle::OpenMode;

/// Errors reported by the file logger handle
#[derive(Debug)]
pub enum LoggerError {
    /// An operation that needs an open file was called with none open.
    NotOpen,
    /// The open stream cannot serve the operation (e.g. reading an append stream).
    WrongMode {
        mode: OpenMode,
        operation: &'static str,
    },
    InvalidArgument(String),
    RootCreation { path: PathBuf, source: io::Error },
    OpenFailed { name: String, source: io::Error },
    NotFound(String),
    NotAFile(String),
    Io(io::Error),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::NotOpen => write!(f, "Error FileLogger: File is not open."),
            LoggerError::WrongMode { mode, operation } => write!(
                f,
                "Error FileLogger: Cannot {} a file opened in {} mode.",
                operation, mode
            ),
            LoggerError::InvalidArgument(msg) => write!(f, "Error FileLogger: {}", msg),
            LoggerError::RootCreation { path, .. } => write!(
                f,
                "Error FileLogger: Failed to create directory: {}",
                path.display()
            ),
            LoggerError::OpenFailed { name, .. } => {
                write!(f, "Error FileLogger: Can not open the file: {}.", name)
            }
            LoggerError::NotFound(p) => {
                write!(f, "Error FileLogger: No such file or directory: {}", p)
            }
            LoggerError::NotAFile(p) => write!(f, "Error FileLogger: Not a regular file: {}", p),
            LoggerError::Io(e) => write!(f, "Error FileLogger: I/O error: {}", e),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::RootCreation { source, .. } | LoggerError::OpenFailed { source, .. } => {
                Some(source)
            }
            LoggerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoggerError {
    fn from(error: io::Error) -> Self {
        LoggerError::Io(error)
    }
}

// Lets `FileLogger` implement `std::io::Write`
impl From<LoggerError> for io::Error {
    fn from(error: LoggerError) -> Self {
        match error {
            LoggerError::Io(e) => e,
            LoggerError::NotOpen => io::Error::new(io::ErrorKind::NotConnected, error),
            LoggerError::WrongMode { .. } => io::Error::new(io::ErrorKind::Unsupported, error),
            LoggerError::InvalidArgument(_) => io::Error::new(io::ErrorKind::InvalidInput, error),
            LoggerError::NotFound(_) => io::Error::new(io::ErrorKind::NotFound, error),
            other => io::Error::other(other),
        }
    }
}
