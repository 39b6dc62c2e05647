use std::fs::OpenOptions;
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::io::config_io::ConfigError;
use crate::model::config::LogConfig;

/// Parse a level name from the config (case-insensitive)
pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

/// Install a file logger. The terminal belongs to the UI, so log output
/// never goes to stdout or stderr. Level `off` installs nothing.
pub fn init_logger(config: &LogConfig, default_path: &Path) -> Result<(), ConfigError> {
    let level = parse_level(&config.level)?;
    if level == LevelFilter::Off {
        return Ok(());
    }

    let path = config.file.as_deref().unwrap_or(default_path);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ConfigError::LogFile {
            path: path.to_path_buf(),
            source: e,
        })?;

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    // A logger may already be installed (tests, embedding); keep the first one.
    let _ = WriteLogger::init(level, log_config, file);
    Ok(())
}
