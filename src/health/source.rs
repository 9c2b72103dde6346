// src/health/source.rs
use super::HealthPayload;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything the view can ask for the current health of a service.
#[async_trait]
pub trait HealthSource: Send + Sync {
    async fn fetch(&self) -> Result<HealthPayload, FetchError>;

    fn endpoint(&self) -> &str;
}
