//! File system storage management
//!
//! Handles root-relative path resolution and the filesystem primitives behind
//! the logger handle.

pub mod filesystem;
pub mod operations;
pub mod validation;

pub use operations::{delete_file, delete_tree, make_directory};
pub use validation::resolve_under_root;
