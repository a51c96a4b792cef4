//! File system operations
//!
//! Thin wrappers over `std::fs` used by the logger handle.

use std::fs::{self, File, OpenOptions};
use std::io::Result;
use std::path::Path;

use crate::handle::OpenMode;

/// Create a directory and any missing parents
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
}

/// Check if a file or directory exists
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Open `path` in the given mode.
///
/// Append mode creates the file when missing and never truncates.
pub fn open_file(path: &Path, mode: OpenMode) -> Result<File> {
    match mode {
        OpenMode::Read => OpenOptions::new().read(true).open(path),
        OpenMode::Append => OpenOptions::new().append(true).create(true).open(path),
    }
}
