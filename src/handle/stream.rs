//! Open file streams
//!
//! The single stream a `FileLogger` owns, in either of the two supported modes.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::LoggerError;
use crate::storage::filesystem::open_file;

/// How a file is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Read-only, cursor at the start. The file must exist.
    #[default]
    Read,
    /// Write-only, cursor at the end. Created when missing, never truncated.
    Append,
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenMode::Read => write!(f, "read"),
            OpenMode::Append => write!(f, "append"),
        }
    }
}

pub(crate) enum Stream {
    Reader(BufReader<File>),
    Appender(BufWriter<File>),
}

impl Stream {
    pub(crate) fn open(path: &Path, mode: OpenMode) -> io::Result<Self> {
        let mut file = open_file(path, mode)?;
        match mode {
            OpenMode::Read => {
                if !file.metadata()?.is_file() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "not a regular file",
                    ));
                }
                Ok(Stream::Reader(BufReader::new(file)))
            }
            OpenMode::Append => {
                file.seek(SeekFrom::End(0))?;
                Ok(Stream::Appender(BufWriter::new(file)))
            }
        }
    }

    pub(crate) fn mode(&self) -> OpenMode {
        match self {
            Stream::Reader(_) => OpenMode::Read,
            Stream::Appender(_) => OpenMode::Append,
        }
    }

    fn reader(&mut self, operation: &'static str) -> Result<&mut BufReader<File>, LoggerError> {
        match self {
            Stream::Reader(reader) => Ok(reader),
            Stream::Appender(_) => Err(LoggerError::WrongMode {
                mode: OpenMode::Append,
                operation,
            }),
        }
    }

    pub(crate) fn write_all(&mut self, bytes: &[u8]) -> Result<(), LoggerError> {
        match self {
            Stream::Appender(writer) => Ok(writer.write_all(bytes)?),
            Stream::Reader(_) => Err(LoggerError::WrongMode {
                mode: OpenMode::Read,
                operation: "write to",
            }),
        }
    }

    pub(crate) fn peek(&mut self) -> Result<Option<u8>, LoggerError> {
        let reader = self.reader("peek")?;
        Ok(reader.fill_buf()?.first().copied())
    }

    pub(crate) fn read_byte(&mut self) -> Result<Option<u8>, LoggerError> {
        let reader = self.reader("read")?;
        let byte = reader.fill_buf()?.first().copied();
        if byte.is_some() {
            reader.consume(1);
        }
        Ok(byte)
    }

    /// Reads until `buf` is full or the stream ends.
    pub(crate) fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, LoggerError> {
        let reader = self.reader("read")?;
        let mut filled = 0;
        while filled < buf.len() {
            match reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }

    pub(crate) fn read_to_end(&mut self) -> Result<Vec<u8>, LoggerError> {
        let reader = self.reader("read")?;
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents)?;
        Ok(contents)
    }

    pub(crate) fn seek(&mut self, pos: u64) -> Result<(), LoggerError> {
        match self {
            Stream::Reader(reader) => reader.seek(SeekFrom::Start(pos))?,
            Stream::Appender(writer) => writer.seek(SeekFrom::Start(pos))?,
        };
        Ok(())
    }

    pub(crate) fn position(&mut self) -> Result<u64, LoggerError> {
        let pos = match self {
            Stream::Reader(reader) => reader.stream_position()?,
            Stream::Appender(writer) => writer.stream_position()?,
        };
        Ok(pos)
    }

    /// Length from file metadata; buffered writes are flushed first.
    pub(crate) fn len(&mut self) -> Result<u64, LoggerError> {
        let file = match self {
            Stream::Reader(reader) => reader.get_ref(),
            Stream::Appender(writer) => {
                writer.flush()?;
                writer.get_ref()
            }
        };
        Ok(file.metadata()?.len())
    }

    pub(crate) fn flush(&mut self) -> Result<(), LoggerError> {
        if let Stream::Appender(writer) = self {
            writer.flush()?;
            writer.get_ref().sync_data()?;
        }
        Ok(())
    }

    pub(crate) fn close(mut self) -> Result<(), LoggerError> {
        self.flush()
    }
}
