//! SD File Logger - Example
//!
//! Roots a logger under the configured directory (`./folder1` unless
//! `sd_logger.toml` or `SDLOG_ROOT_DIR` says otherwise), opens a file for
//! appending, checks that it exists and closes it again.

use log::{error, info};
use std::process::ExitCode;

use sd_file_logger::utils::logging::setup_logging;
use sd_file_logger::{FileLogger, LoggerConfig, OpenMode};

const EXAMPLE_ROOT: &str = "./folder1";

fn main() -> ExitCode {
    setup_logging();

    let config = match LoggerConfig::load_with_root(EXAMPLE_ROOT) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut logger = match FileLogger::from_config(&config) {
        Ok(logger) => logger,
        Err(_) => return ExitCode::FAILURE,
    };

    if logger.open("test1.txt", OpenMode::Append).is_err() {
        info!("can not open.");
    }

    if logger.exists("test1.txt") {
        info!("exist");
    }

    if let Err(e) = logger.close() {
        error!("Close failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
