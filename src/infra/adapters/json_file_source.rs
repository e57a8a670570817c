use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::app::ports::{PayloadSource, PayloadSourceError};
use crate::domain::{LoadOutcome, PayloadEnvelope};

/// Reads the JSON file the interpreter-side exporter writes.
///
/// The file is re-read on every fetch, so a refresh picks up a new export.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl PayloadSource for JsonFileSource {
    async fn fetch(&self) -> Result<LoadOutcome, PayloadSourceError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            // Exporter has not written anything yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadOutcome::Pending),
            Err(e) => {
                return Err(PayloadSourceError::Read {
                    path: self.path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(LoadOutcome::Pending);
        }

        let envelope: PayloadEnvelope = serde_json::from_str(&content)
            .map_err(|e| PayloadSourceError::InvalidJson(e.to_string()))?;

        debug!(path = %self.path.display(), bytes = content.len(), "Payload file parsed");
        Ok(envelope.into_outcome())
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}
