//! Error handlers
//!
//! Diagnostic reporting and classification of logger errors.

use crate::error::types::LoggerError;
use log::error;

/// Broad classes of failure a caller may want to branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// An operation needing an open file (or a different mode) was attempted.
    StateViolation,
    /// A root or target path could not be created or used, or an argument was rejected.
    PathFailure,
    /// The host filesystem reported a failure.
    Io,
}

/// Route an error to the diagnostic log channel
pub fn handle_error(err: &LoggerError) {
    error!("{}", err);
}

/// Classify an error into its failure class
pub fn classify(err: &LoggerError) -> ErrorClass {
    match err {
        LoggerError::NotOpen => ErrorClass::StateViolation,
        LoggerError::WrongMode { .. } => ErrorClass::StateViolation,
        LoggerError::InvalidArgument(_) => ErrorClass::PathFailure,
        LoggerError::RootCreation { .. } => ErrorClass::PathFailure,
        LoggerError::NotFound(_) => ErrorClass::PathFailure,
        LoggerError::NotAFile(_) => ErrorClass::PathFailure,
        LoggerError::OpenFailed { .. } => ErrorClass::Io,
        LoggerError::Io(_) => ErrorClass::Io,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::OpenMode;
    use std::io;

    #[test]
    fn classifies_state_violations() {
        assert_eq!(classify(&LoggerError::NotOpen), ErrorClass::StateViolation);
        let wrong = LoggerError::WrongMode {
            mode: OpenMode::Append,
            operation: "read",
        };
        assert_eq!(classify(&wrong), ErrorClass::StateViolation);
    }

    #[test]
    fn classifies_path_and_io_failures() {
        assert_eq!(
            classify(&LoggerError::InvalidArgument("x".into())),
            ErrorClass::PathFailure
        );
        let io_err = LoggerError::from(io::Error::other("disk full"));
        assert_eq!(classify(&io_err), ErrorClass::Io);
    }

    #[test]
    fn not_open_converts_to_not_connected() {
        let e: io::Error = LoggerError::NotOpen.into();
        assert_eq!(e.kind(), io::ErrorKind::NotConnected);
    }
}
