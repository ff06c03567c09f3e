// ============================================================================
// ditfolder-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console or file logging for a CLI run
//
// Console logging uses env_logger on stderr, so the tree and other command
// output on stdout stay clean. RUST_LOG overrides the level chosen here:
// - default: info
// - --verbose: debug
//
// With --log-file, log4rs writes every record to the file instead.

use std::io::Write;
use std::path::{Path, PathBuf};

use console::style;
use ditfolder_core::CoreError;
use ditfolder_core::file_logging::{default_log_file, setup_file_logging};
use log::{LevelFilter, debug};

use crate::error::CliResult;

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the console logger.
pub fn init_console(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => style("ERROR").for_stderr().red().bold(),
                log::Level::Warn => style("WARN ").for_stderr().yellow(),
                log::Level::Info => style("INFO ").for_stderr().green(),
                log::Level::Debug => style("DEBUG").for_stderr().blue(),
                log::Level::Trace => style("TRACE").for_stderr().magenta(),
            };
            writeln!(buf, "{} {}", level, record.args())
        })
        .filter(None, level)
        .parse_default_env()
        .try_init();

    if result.is_ok() {
        debug!("Logger initialized with level: {}", level);
    }
}

/// Resolves `--log-file`: an existing directory gets a timestamped file.
pub fn resolve_log_file(path: &Path) -> PathBuf {
    if path.is_dir() {
        default_log_file(path)
    } else {
        path.to_path_buf()
    }
}

/// Sets up logging for this run.
pub fn init(verbose: bool, log_file: Option<&Path>) -> CliResult<()> {
    let level = level_for(verbose);
    match log_file {
        Some(path) => {
            let path = resolve_log_file(path);
            setup_file_logging(&path, level).map_err(|e| {
                CoreError::OperationFailed(format!(
                    "Failed to set up logging to {}: {e:#}",
                    path.display()
                ))
            })?;
            debug!("Logging to {}", path.display());
        }
        None => init_console(level),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false), LevelFilter::Info);
        assert_eq!(level_for(true), LevelFilter::Debug);
    }

    #[test]
    fn test_resolve_log_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("run.log");
        assert_eq!(resolve_log_file(&file), file);

        let resolved = resolve_log_file(dir.path());
        assert_eq!(resolved.parent(), Some(dir.path()));
        assert!(resolved.extension().is_some_and(|ext| ext == "log"));
    }
}
