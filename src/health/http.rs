// src/health/http.rs
use super::{FetchError, HealthPayload, HealthSource};
use crate::config::EndpointConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Plain `GET` against a health URL, no body and no extra headers.
pub struct HttpHealthSource {
    url: Url,
    client: Client,
}

impl HttpHealthSource {
    pub fn new(config: &EndpointConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            url: config.url.clone(),
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HealthSource for HttpHealthSource {
    async fn fetch(&self) -> Result<HealthPayload, FetchError> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Health endpoint {} answered {}", self.url, status);
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn endpoint(&self) -> &str {
        self.url.as_str()
    }
}
