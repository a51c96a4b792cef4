// Kept in its own test binary: the process environment is shared, so
// SDLOG_* variables must not leak into the other config tests.

use std::fs;

use sd_file_logger::LoggerConfig;
use tempfile::tempdir;

#[test]
fn test_env_overrides_file_and_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logger.toml");
    fs::write(&path, "root_dir = \"./from_file\"\n").unwrap();

    // SAFETY: this is the only test in this binary, so no other thread reads the environment.
    unsafe {
        std::env::set_var("SDLOG_ROOT_DIR", "./from_env");
        std::env::set_var("SDLOG_RECORD_FREQUENCY_HZ", "250");
    }

    let config = LoggerConfig::load_from(&path).unwrap();
    assert_eq!(config.root_dir, "./from_env");
    assert_eq!(config.record_frequency_hz, 250);
    assert_eq!(config.record_duration_secs, 3600);

    unsafe {
        std::env::remove_var("SDLOG_ROOT_DIR");
        std::env::remove_var("SDLOG_RECORD_FREQUENCY_HZ");
    }

    let config = LoggerConfig::load_from(&path).unwrap();
    assert_eq!(config.root_dir, "./from_file");
    assert_eq!(config.record_frequency_hz, 100);
}
