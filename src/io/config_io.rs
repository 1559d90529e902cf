use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// File name of the optional config inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Resolve the config directory: explicit override, then
/// `$XDG_CONFIG_HOME/tasklist`, then `$HOME/.config/tasklist`.
pub fn config_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| dirs_home().join(".config"));
    base.join("tasklist")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read config.toml from the config directory. A missing file yields defaults.
pub fn read_config(config_dir: &Path) -> Result<Config, ConfigError> {
    let path = config_dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(source) => return Err(ConfigError::ReadError { path, source }),
    };
    toml::from_str(&text).map_err(|source| ConfigError::ParseError { path, source })
}
