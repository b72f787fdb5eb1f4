//! Shared helpers for locating test fixtures

#![allow(dead_code)]

use std::path::PathBuf;

/// Path of a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Check if a fixture file exists
pub fn fixture_exists(name: &str) -> bool {
    fixture_path(name).exists()
}

/// Copy a fixture into `dir` so it can be modified
pub fn copy_fixture(name: &str, dir: &std::path::Path) -> PathBuf {
    let target = dir.join(name);
    std::fs::copy(fixture_path(name), &target).expect("copy fixture");
    target
}

/// Route `log` output to the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
