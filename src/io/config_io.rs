use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for locating and reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    NoHomeDir,
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse config: {}", .0.message().trim_end().replace('\n', "; "))]
    Parse(#[from] toml::de::Error),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("could not open log file {path}: {source}")]
    LogFile { path: PathBuf, source: io::Error },
}

/// Fixed file locations under the user's home directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// The task file
    pub data: PathBuf,
    /// Optional TOML config
    pub config: PathBuf,
    /// Default log file
    pub log: PathBuf,
}

impl AppPaths {
    pub fn in_dir(home: &Path) -> Self {
        AppPaths {
            data: home.join(".todo-cli"),
            config: home.join(".todo-cli.toml"),
            log: home.join(".todo-cli.log"),
        }
    }

    pub fn resolve() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(AppPaths::in_dir(&home))
    }
}

/// Read the config file. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn paths_live_in_home() {
        let paths = AppPaths::in_dir(Path::new("/home/someone"));
        assert_eq!(paths.data, PathBuf::from("/home/someone/.todo-cli"));
        assert_eq!(paths.config, PathBuf::from("/home/someone/.todo-cli.toml"));
        assert_eq!(paths.log, PathBuf::from("/home/someone/.todo-cli.log"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = read_config(&dir.path().join(".todo-cli.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log.level, "warn");
        assert!(!config.ui.show_key_hints);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".todo-cli.toml");
        fs::write(
            &path,
            r##"
[ui]
show_key_hints = true

[ui.colors]
cursor = "#FF4444"
"##,
        )
        .unwrap();
        let config = read_config(&path).unwrap();
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("cursor").map(String::as_str), Some("#FF4444"));
        assert_eq!(config.log.level, "warn");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn log_section_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".todo-cli.toml");
        fs::write(&path, "[log]\nlevel = \"debug\"\nfile = \"/tmp/todo.log\"\n").unwrap();
        let config = read_config(&path).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/todo.log")));
    }

    #[test]
    fn malformed_config_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".todo-cli.toml");
        fs::write(&path, "[ui\nshow_key_hints = ").unwrap();
        assert!(matches!(read_config(&path), Err(ConfigError::Parse(_))));
    }
}
