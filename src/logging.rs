use std::fs::{self, File};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, eyre};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "TABPEEK_LOG";
const LOG_FILE_NAME: &str = "tabpeek.log";
const DEFAULT_DIRECTIVE: &str = "tabpeek=info";

/// `<cache dir>/tabpeek/tabpeek.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|base| base.join("tabpeek").join(LOG_FILE_NAME))
}

/// Sends tracing output to a file; stdout belongs to the terminal UI.
///
/// The filter comes from `TABPEEK_LOG` (env or `.env`), defaulting to info.
pub fn init(log_file: Option<&Path>) -> Result<PathBuf> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => default_log_path().ok_or_else(|| eyre!("Could not find a cache directory for logs"))?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_target(true)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(path)
}
