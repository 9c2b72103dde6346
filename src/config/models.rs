// src/config/models.rs
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/health";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        match self.endpoint.url.scheme() {
            "http" | "https" => {}
            other => bail!("Unsupported endpoint scheme: {}", other),
        }

        if self.endpoint.timeout_secs == Some(0) {
            bail!("endpoint.timeout_secs must be greater than zero");
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_url")]
    pub url: Url,
    /// Unset means the transport's own defaults apply.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl EndpointConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub stale_responses: StaleResponsePolicy,
}

/// What to do with a response whose request has since been superseded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Every completion overwrites the view state, last arrival wins.
    #[default]
    Apply,
    /// Only the most recently issued request may update the view state.
    Discard,
}

fn default_url() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}
