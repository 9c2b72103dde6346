// src/lib.rs
pub mod config;
pub mod health;
pub mod view;

pub use health::{FetchError, HealthPayload, HealthSource, HttpHealthSource};
pub use view::{render, Action, HealthStatusView, Screen, ViewState};
