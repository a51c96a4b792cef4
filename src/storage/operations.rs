//! Storage operations
//!
//! Root-relative directory creation and file/directory removal.

use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::LoggerError;
use crate::storage::filesystem::create_directory;
use crate::storage::validation::resolve_under_root;

/// Creates `relative` (and all intermediate directories) under `root`
pub fn make_directory(root: &Path, relative: &str) -> Result<(), LoggerError> {
    let real_path = resolve_under_root(root, relative);

    create_directory(&real_path)?;
    if !real_path.is_dir() {
        return Err(LoggerError::NotFound(real_path.display().to_string()));
    }

    debug!("Directory ready: {}", real_path.display());
    Ok(())
}

/// Deletes a single file under `root`
pub fn delete_file(root: &Path, relative: &str) -> Result<(), LoggerError> {
    let real_path = resolve_under_root(root, relative);

    let metadata = match fs::symlink_metadata(&real_path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoggerError::NotFound(real_path.display().to_string()));
        }
        Err(e) => return Err(LoggerError::from(e)),
    };

    if metadata.is_dir() {
        return Err(LoggerError::NotAFile(real_path.display().to_string()));
    }

    fs::remove_file(&real_path)?;
    info!("Deleted file {} (real: {})", relative, real_path.display());
    Ok(())
}

/// Deletes `relative` and everything beneath it, returning the number of entries removed
pub fn delete_tree(root: &Path, relative: &str) -> Result<u64, LoggerError> {
    let real_path = resolve_under_root(root, relative);

    if let Err(e) = fs::symlink_metadata(&real_path) {
        return Err(match e.kind() {
            io::ErrorKind::NotFound => LoggerError::NotFound(real_path.display().to_string()),
            _ => LoggerError::from(e),
        });
    }

    let removed = remove_entry(&real_path)?;
    info!(
        "Removed {} (real: {}) - {} entries",
        relative,
        real_path.display(),
        removed
    );
    Ok(removed)
}

// Symlinks are unlinked, never followed.
fn remove_entry(path: &Path) -> io::Result<u64> {
    let metadata = fs::symlink_metadata(path)?;
    if !metadata.is_dir() {
        fs::remove_file(path)?;
        return Ok(1);
    }

    let mut removed = 0;
    for entry in fs::read_dir(path)? {
        removed += remove_entry(&entry?.path())?;
    }
    fs::remove_dir(path)?;
    Ok(removed + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn delete_tree_counts_every_entry() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        File::create(dir.path().join("a/one.txt")).unwrap();
        File::create(dir.path().join("a/b/two.txt")).unwrap();

        // a, a/b, a/one.txt, a/b/two.txt
        assert_eq!(delete_tree(dir.path(), "a").unwrap(), 4);
        assert!(!dir.path().join("a").exists());
    }

    #[test]
    fn delete_tree_on_single_file_counts_one() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("f.bin")).unwrap();
        assert_eq!(delete_tree(dir.path(), "f.bin").unwrap(), 1);
    }

    #[test]
    fn delete_file_rejects_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("d")).unwrap();
        let err = delete_file(dir.path(), "d").unwrap_err();
        assert!(matches!(err, LoggerError::NotAFile(_)));
        assert!(dir.path().join("d").exists());
    }

    #[test]
    fn make_directory_is_idempotent() {
        let dir = tempdir().unwrap();
        make_directory(dir.path(), "x/y/z").unwrap();
        make_directory(dir.path(), "x/y/z").unwrap();
        assert!(dir.path().join("x/y/z").is_dir());
    }

    #[test]
    fn make_directory_over_a_file_fails() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("taken")).unwrap();
        assert!(make_directory(dir.path(), "taken").is_err());
    }
}
