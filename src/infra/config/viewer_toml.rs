use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::app::config::{ConfigFile, ViewerConfig};

const CONFIG_DIR_NAME: &str = "tabpeek";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: String, message: String },
    #[error("Invalid config {path}: {message}")]
    Parse { path: String, message: String },
}

/// `<config dir>/tabpeek/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads viewer settings.
///
/// An explicit path must exist and parse. Without one, the default location
/// is tried and a missing file yields defaults.
pub fn load_viewer_config(explicit: Option<&Path>) -> Result<ViewerConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let Some(path) = default_config_path() else {
        return Ok(ViewerConfig::default());
    };

    match read_config(&path) {
        Err(ConfigError::Read { .. }) if !path.exists() => {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(ViewerConfig::default())
        }
        other => other,
    }
}

fn read_config(path: &Path) -> Result<ViewerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: match e.kind() {
            ErrorKind::NotFound => "file not found".to_string(),
            _ => e.to_string(),
        },
    })?;

    let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!(path = %path.display(), "Loaded config");
    Ok(file.viewer)
}
