use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

/// Line format for log files.
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {m}{n}";

/// Routes all `log` output to `log_file`, appending if it exists.
///
/// Creates the parent directory when needed. Only one logger can be
/// installed per process.
pub fn setup_file_logging(log_file: &Path, log_level: LevelFilter) -> Result<()> {
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .append(true)
        .build(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(Root::builder().appender("file").build(log_level))?;

    log4rs::init_config(config)?;

    Ok(())
}

/// `ditfolder_YYYYMMDD_HHMMSS.log` inside `dir`.
pub fn default_log_file(dir: &Path) -> PathBuf {
    dir.join(format!("ditfolder_{}.log", Local::now().format("%Y%m%d_%H%M%S")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_file_name() {
        let path = default_log_file(Path::new("/var/log/dit"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("ditfolder_"));
        assert!(name.ends_with(".log"));
        // ditfolder_ + 8 date digits + _ + 6 time digits + .log
        assert_eq!(name.len(), 10 + 8 + 1 + 6 + 4);
        assert_eq!(path.parent(), Some(Path::new("/var/log/dit")));
    }
}
