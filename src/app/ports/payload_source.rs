use async_trait::async_trait;
use thiserror::Error;

use crate::domain::LoadOutcome;

#[derive(Debug, Error)]
pub enum PayloadSourceError {
    #[error("Failed to read payload from {path}: {message}")]
    Read { path: String, message: String },
    #[error("Payload is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Where table payloads come from. Each call returns the source's current state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PayloadSource: Send + Sync {
    async fn fetch(&self) -> Result<LoadOutcome, PayloadSourceError>;

    /// Short human-readable origin, shown in the header
    fn describe(&self) -> String;
}
