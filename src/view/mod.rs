// src/view/mod.rs
mod component;
mod render;
mod state;

pub use component::{HealthStatusView, RefreshTicket};
pub use render::{render, Action, Screen};
pub use state::ViewState;
