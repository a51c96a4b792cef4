//! SD File Logger
//!
//! An SD-card style file API (open, print, read, seek, mkdir, remove) backed
//! by the host filesystem and rooted under a configurable directory.

pub mod config;
pub mod error;
pub mod handle;
pub mod storage;
pub mod utils;

pub use config::LoggerConfig;
pub use error::{ErrorClass, LoggerError};
pub use handle::{FileLogger, LINE_ENDING, OpenMode, Printable, RecordSchedule};
