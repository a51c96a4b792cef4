//! Logging utilities
//!
//! Provides logging setup for binaries embedding the file logger.

use env_logger::Env;

/// Setup logging at `info` unless `RUST_LOG` says otherwise
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Like `setup_logging`, but tolerates a logger that is already installed
pub fn try_setup_logging() -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .try_init()
        .is_ok()
}
