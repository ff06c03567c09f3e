//! File logging through log4rs.
//!
//! The CLI logs to the console with env_logger by default; when a log file
//! is requested this module installs log4rs instead.

pub mod setup;

pub use setup::{LOG_PATTERN, default_log_file, setup_file_logging};
