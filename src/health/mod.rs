// src/health/mod.rs
mod http;
mod payload;
mod source;

pub use http::HttpHealthSource;
pub use payload::HealthPayload;
pub use source::{FetchError, HealthSource};
