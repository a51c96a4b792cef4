//! File handle
//!
//! The `FileLogger` handle and the types it is built from.

pub mod logger;
pub mod printable;
pub mod schedule;
pub mod stream;

pub use logger::{ErrorObserver, FileLogger, LINE_ENDING};
pub use printable::Printable;
pub use schedule::RecordSchedule;
pub use stream::OpenMode;
