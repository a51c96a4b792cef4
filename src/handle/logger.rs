//! Module `logger`
//!
//! Defines `FileLogger`, an SD-card style file handle rooted under a base
//! directory. It owns at most one open stream and tracks the current file
//! name, a line counter and the last reported error.

use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::LoggerConfig;
use crate::error::{LoggerError, handle_error};
use crate::handle::printable::Printable;
use crate::handle::schedule::RecordSchedule;
use crate::handle::stream::{OpenMode, Stream};
use crate::storage::{self, resolve_under_root};

/// Line terminator appended by `println`
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator appended by `println`
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const DEFAULT_ROOT: &str = "./";

/// Callback invoked with every error a `FileLogger` reports
pub type ErrorObserver = Box<dyn FnMut(&LoggerError) + Send>;

/// A file handle in the style of an embedded SD library.
///
/// Every fallible call returns a `Result`. Failures are also recorded in
/// [`last_error`](Self::last_error), logged at error level, and passed to the
/// error observer when one is attached.
pub struct FileLogger {
    root: PathBuf,
    stream: Option<Stream>,
    current_name: String,
    line_number: u64,
    last_error: String,
    schedule: RecordSchedule,
    observer: Option<ErrorObserver>,
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::with_schedule(RecordSchedule::default())
    }
}

impl FileLogger {
    /// Creates a closed logger rooted at `./`.
    ///
    /// `record_frequency` (Hz, clamped to at least 1) and `record_duration`
    /// (seconds) are stored for the caller; see [`RecordSchedule`].
    pub fn new(record_frequency: u16, record_duration: u32) -> Self {
        Self::with_schedule(RecordSchedule::new(record_frequency, record_duration))
    }

    fn with_schedule(schedule: RecordSchedule) -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            stream: None,
            current_name: String::new(),
            line_number: 0,
            last_error: String::new(),
            schedule,
            observer: None,
        }
    }

    /// Builds a logger from loaded configuration and applies its root directory.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, LoggerError> {
        let mut logger = Self::new(config.record_frequency_hz, config.record_duration_secs);
        logger.set_root_with(config.root_path(), config.create_root)?;
        Ok(logger)
    }

    // --------------------
    // Configuration
    // --------------------

    /// Sets the root directory, creating it when missing.
    pub fn set_root(&mut self, path: impl AsRef<Path>) -> Result<(), LoggerError> {
        self.set_root_with(path, true)
    }

    /// Sets the root directory. On failure the previous root is kept.
    pub fn set_root_with(
        &mut self,
        path: impl AsRef<Path>,
        create_if_missing: bool,
    ) -> Result<(), LoggerError> {
        let path = path.as_ref();

        if !storage::filesystem::path_exists(path) {
            if !create_if_missing {
                return Err(self.report(LoggerError::NotFound(path.display().to_string())));
            }
            if let Err(source) = storage::filesystem::create_directory(path) {
                return Err(self.report(LoggerError::RootCreation {
                    path: path.to_path_buf(),
                    source,
                }));
            }
            info!("Created root directory {}", path.display());
        }

        self.root = path.to_path_buf();
        info!("Root directory: {}", self.root.display());
        Ok(())
    }

    /// Attaches a callback that receives every reported error
    pub fn set_error_observer(&mut self, observer: impl FnMut(&LoggerError) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Detaches the error callback
    pub fn clear_error_observer(&mut self) {
        self.observer = None;
    }

    // --------------------
    // Open / close
    // --------------------

    /// Opens `name` under the root, closing any file already open.
    pub fn open(&mut self, name: &str, mode: OpenMode) -> Result<(), LoggerError> {
        if let Some(previous) = self.stream.take() {
            if let Err(e) = previous.close() {
                debug!("Implicit close of {} failed: {}", self.current_name, e);
            }
        }

        let path = resolve_under_root(&self.root, name);
        match Stream::open(&path, mode) {
            Ok(stream) => {
                self.stream = Some(stream);
                self.current_name = name.to_string();
                info!("Opened {} in {} mode (real: {})", name, mode, path.display());
                Ok(())
            }
            Err(source) => Err(self.report(LoggerError::OpenFailed {
                name: name.to_string(),
                source,
            })),
        }
    }

    /// Flushes and closes the open file. Does nothing when already closed.
    pub fn close(&mut self) -> Result<(), LoggerError> {
        match self.stream.take() {
            Some(stream) => {
                debug!("Closing {}", self.current_name);
                stream.close().map_err(|e| self.report(e))
            }
            None => Ok(()),
        }
    }

    /// Whether a file is currently open
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Mode of the open file, if any
    pub fn mode(&self) -> Option<OpenMode> {
        self.stream.as_ref().map(Stream::mode)
    }

    // --------------------
    // Writing
    // --------------------

    /// Appends a single byte. Returns 1.
    pub fn write_byte(&mut self, byte: u8) -> Result<usize, LoggerError> {
        self.with_stream(|s| s.write_all(&[byte]))?;
        Ok(1)
    }

    /// Appends the whole buffer and returns its length.
    pub fn write_buffer(&mut self, buf: &[u8]) -> Result<usize, LoggerError> {
        if !self.is_open() {
            return Err(self.report(LoggerError::NotOpen));
        }
        if buf.is_empty() {
            return Err(self.report(LoggerError::InvalidArgument(
                "Null buffer or zero size.".into(),
            )));
        }
        self.with_stream(|s| s.write_all(buf))?;
        Ok(buf.len())
    }

    /// Appends the textual form of `value`
    pub fn print<P: Printable>(&mut self, value: P) -> Result<(), LoggerError> {
        let text = value.render();
        self.with_stream(|s| s.write_all(text.as_bytes()))
    }

    /// Appends `value` followed by [`LINE_ENDING`].
    ///
    /// Every call bumps the line counter by one, including calls that fail.
    pub fn println<P: Printable>(&mut self, value: P) -> Result<(), LoggerError> {
        self.line_number += 1;
        let mut text = value.render();
        text.push_str(LINE_ENDING);
        self.with_stream(|s| s.write_all(text.as_bytes()))
    }

    /// 1 when a file is open, otherwise 0
    pub fn available_for_write(&self) -> usize {
        usize::from(self.is_open())
    }

    // --------------------
    // Reading
    // --------------------

    /// Reads one byte. `Ok(None)` at end of file.
    pub fn read_byte(&mut self) -> Result<Option<u8>, LoggerError> {
        self.with_stream(Stream::read_byte)
    }

    /// Reads up to `buf.len()` bytes and returns how many were read.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, LoggerError> {
        self.with_stream(|s| s.read_into(buf))
    }

    /// Reads everything from the cursor to the end of the file as text.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn read_all(&mut self) -> Result<String, LoggerError> {
        let bytes = self.read_all_bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Reads everything from the cursor to the end of the file
    pub fn read_all_bytes(&mut self) -> Result<Vec<u8>, LoggerError> {
        self.with_stream(Stream::read_to_end)
    }

    /// Returns the next byte without consuming it
    pub fn peek(&mut self) -> Result<Option<u8>, LoggerError> {
        self.with_stream(Stream::peek)
    }

    /// Bytes left between the cursor and the end of the file
    pub fn available(&mut self) -> Result<u64, LoggerError> {
        self.with_stream(|s| {
            let len = s.len()?;
            let pos = s.position()?;
            Ok(len.saturating_sub(pos))
        })
    }

    // --------------------
    // Positioning
    // --------------------

    /// Moves the cursor to the absolute offset `pos`
    pub fn seek(&mut self, pos: u64) -> Result<(), LoggerError> {
        self.with_stream(|s| s.seek(pos))
    }

    /// Current cursor offset
    pub fn position(&mut self) -> Result<u64, LoggerError> {
        self.with_stream(Stream::position)
    }

    /// Length of the open file, including writes still buffered. The cursor is untouched.
    pub fn size(&mut self) -> Result<u64, LoggerError> {
        self.with_stream(Stream::len)
    }

    /// Pushes buffered writes to storage. Does nothing when closed.
    pub fn flush(&mut self) -> Result<(), LoggerError> {
        if !self.is_open() {
            return Ok(());
        }
        self.with_stream(Stream::flush)
    }

    // --------------------
    // Paths and metadata
    // --------------------

    /// Tests whether a file or directory exists under the root
    pub fn exists(&self, path: &str) -> bool {
        storage::filesystem::path_exists(&resolve_under_root(&self.root, path))
    }

    /// Creates a directory and any missing intermediate directories
    pub fn make_directory(&mut self, path: &str) -> Result<(), LoggerError> {
        storage::make_directory(&self.root, path).map_err(|e| self.report(e))
    }

    /// Removes a single file
    pub fn remove(&mut self, path: &str) -> Result<(), LoggerError> {
        storage::delete_file(&self.root, path).map_err(|e| self.report(e))
    }

    /// Removes a directory and everything under it, returning the entry count
    pub fn remove_directory_recursive(&mut self, path: &str) -> Result<u64, LoggerError> {
        storage::delete_tree(&self.root, path).map_err(|e| self.report(e))
    }

    /// Whether `root/name()` is a directory
    pub fn is_directory(&self) -> bool {
        storage::filesystem::directory_exists(&resolve_under_root(&self.root, &self.current_name))
    }

    /// Name last passed to a successful `open`
    pub fn name(&self) -> &str {
        &self.current_name
    }

    /// Current root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Clears the root. Later paths resolve against the working directory.
    /// An open file stays open.
    pub fn end(&mut self) {
        self.root = PathBuf::new();
    }

    /// Number of `println` calls since creation or the last reset
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Resets the line counter and moves the cursor back to the start.
    pub fn reset_line_number(&mut self) {
        self.line_number = 0;
        if let Some(stream) = self.stream.as_mut() {
            if let Err(e) = stream.seek(0) {
                debug!("Rewind of {} failed: {}", self.current_name, e);
            }
        }
    }

    /// Description of the most recent failure, empty if none occurred
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Sampling metadata given at construction
    pub fn schedule(&self) -> &RecordSchedule {
        &self.schedule
    }

    // --------------------
    // Internals
    // --------------------

    fn with_stream<T>(
        &mut self,
        op: impl FnOnce(&mut Stream) -> Result<T, LoggerError>,
    ) -> Result<T, LoggerError> {
        let result = match self.stream.as_mut() {
            Some(stream) => op(stream),
            None => Err(LoggerError::NotOpen),
        };
        result.map_err(|e| self.report(e))
    }

    fn report(&mut self, err: LoggerError) -> LoggerError {
        self.last_error = err.to_string();
        handle_error(&err);
        if let Some(observer) = self.observer.as_mut() {
            observer(&err);
        }
        err
    }
}

/// Formatted appends through `write!`/`writeln!`.
///
/// `writeln!` ends lines with `\n` and does not touch the line counter.
impl io::Write for FileLogger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        Ok(self.write_buffer(buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(FileLogger::flush(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    fn rooted() -> (tempfile::TempDir, FileLogger) {
        let dir = tempdir().unwrap();
        let mut logger = FileLogger::default();
        logger.set_root(dir.path()).unwrap();
        (dir, logger)
    }

    #[test]
    fn new_logger_is_closed_and_clamps_frequency() {
        let logger = FileLogger::new(0, 60);
        assert!(!logger.is_open());
        assert_eq!(logger.available_for_write(), 0);
        assert_eq!(logger.schedule().frequency_hz(), 1);
        assert_eq!(logger.schedule().duration_secs(), 60);
        assert_eq!(logger.root(), Path::new("./"));
    }

    #[test]
    fn failed_open_reports_and_stays_closed() {
        let (_dir, mut logger) = rooted();
        let err = logger.open("nope.txt", OpenMode::Read).unwrap_err();
        assert!(matches!(err, LoggerError::OpenFailed { .. }));
        assert!(!logger.is_open());
        assert_eq!(
            logger.last_error(),
            "Error FileLogger: Can not open the file: nope.txt."
        );
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(logger.name(), "");
    }

    #[test]
    fn observer_sees_each_failure() {
        let (_dir, mut logger) = rooted();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        logger.set_error_observer(move |e| sink.lock().unwrap().push(e.to_string()));

        let _ = logger.write_byte(b'x');
        let _ = logger.remove("missing.txt");
        assert_eq!(seen.lock().unwrap().len(), 2);

        logger.clear_error_observer();
        let _ = logger.peek();
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn read_on_append_stream_is_wrong_mode() {
        let (_dir, mut logger) = rooted();
        logger.open("w.txt", OpenMode::Append).unwrap();
        let err = logger.read_byte().unwrap_err();
        assert!(matches!(
            err,
            LoggerError::WrongMode {
                mode: OpenMode::Append,
                ..
            }
        ));
        assert_eq!(logger.mode(), Some(OpenMode::Append));
    }

    #[test]
    fn write_on_read_stream_is_wrong_mode() {
        let (dir, mut logger) = rooted();
        std::fs::write(dir.path().join("r.txt"), b"abc").unwrap();
        logger.open("r.txt", OpenMode::Read).unwrap();
        assert!(logger.write_byte(b'x').is_err());
        assert!(logger.println("x").is_err());
        assert_eq!(logger.line_number(), 1);
    }

    #[test]
    fn empty_buffer_is_rejected() {
        let (_dir, mut logger) = rooted();
        logger.open("b.bin", OpenMode::Append).unwrap();
        let err = logger.write_buffer(&[]).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidArgument(_)));
        assert!(logger.last_error().contains("Null buffer or zero size."));
    }

    #[test]
    fn end_clears_root_but_keeps_stream() {
        let (_dir, mut logger) = rooted();
        logger.open("keep.txt", OpenMode::Append).unwrap();
        logger.end();
        assert_eq!(logger.root(), Path::new(""));
        assert!(logger.is_open());
        assert_eq!(logger.write_byte(b'k').unwrap(), 1);
    }

    #[test]
    fn set_root_without_create_keeps_previous_root() {
        let (dir, mut logger) = rooted();
        let missing = dir.path().join("absent");
        assert!(logger.set_root_with(&missing, false).is_err());
        assert_eq!(logger.root(), dir.path());
        assert!(!missing.exists());
    }
}
