//! Logger initialization.

use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// Diagnostics go to stderr, so they never mix with PPM output on stdout.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
