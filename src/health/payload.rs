// src/health/payload.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body returned by a health endpoint. Only `status` is required; anything
/// else the service reports is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthPayload {
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthPayload {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            extra: Map::new(),
        }
    }
}
