//! Path resolution
//!
//! Maps caller-supplied paths onto the logger root.

use std::path::{Component, Path, PathBuf};

/// Resolve `relative` against `root`.
///
/// Every argument is treated as relative: root and prefix components are
/// dropped, so `/logs/a.txt` lands at `root/logs/a.txt` rather than at the
/// filesystem root. `.` and `..` components are kept as given.
pub fn resolve_under_root(root: &Path, relative: &str) -> PathBuf {
    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => continue,
            Component::CurDir => {}
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_plain_relative_path() {
        let p = resolve_under_root(Path::new("./data"), "a/b.txt");
        assert_eq!(p, PathBuf::from("./data/a/b.txt"));
    }

    #[test]
    fn leading_slash_stays_under_root() {
        let p = resolve_under_root(Path::new("root"), "/log.txt");
        assert_eq!(p, PathBuf::from("root/log.txt"));
    }

    #[test]
    fn empty_root_yields_bare_relative_path() {
        let p = resolve_under_root(Path::new(""), "x/y");
        assert_eq!(p, PathBuf::from("x/y"));
    }

    #[test]
    fn current_dir_components_are_skipped() {
        let p = resolve_under_root(Path::new("r"), "./a/./b");
        assert_eq!(p, PathBuf::from("r/a/b"));
    }
}
