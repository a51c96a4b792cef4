//! Error handling
//!
//! Defines the logger error type and its reporting helpers.

pub mod handlers;
pub mod types;

pub use handlers::{ErrorClass, classify, handle_error};
pub use types::*;
