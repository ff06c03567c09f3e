// ditfolder-cli/src/config.rs
//
// Default values for CLI arguments.

/// Environment variable naming the presets directory.
pub const PRESETS_DIR_ENV: &str = "DITFOLDER_PRESETS_DIR";

pub const DEFAULT_PRESETS_DIR: &str = ditfolder_core::config::DEFAULT_PRESETS_DIR;

pub const DEFAULT_UNIT: &str = "MU";
