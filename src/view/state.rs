// src/view/state.rs
use crate::health::{FetchError, HealthPayload};

/// The record every screen is rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub status: Option<HealthPayload>,
}

impl Default for ViewState {
    /// A freshly displayed view is waiting on its first response.
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            status: None,
        }
    }
}

impl ViewState {
    pub(crate) fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A failed fetch leaves the last good `status` in place; the error
    /// view takes precedence when rendering.
    pub(crate) fn complete(&mut self, result: Result<HealthPayload, FetchError>) {
        match result {
            Ok(payload) => {
                self.status = Some(payload);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    pub fn is_terminal(&self) -> bool {
        !self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading() {
        let state = ViewState::default();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.status.is_none());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_success_clears_error() {
        let mut state = ViewState::default();
        state.complete(Err(FetchError::Http { status: 500 }));
        state.begin();
        state.complete(Ok(HealthPayload::new("ok")));

        assert!(state.is_terminal());
        assert!(state.error.is_none());
        assert_eq!(state.status, Some(HealthPayload::new("ok")));
    }

    #[test]
    fn test_begin_clears_error_and_sets_loading() {
        let mut state = ViewState::default();
        state.complete(Err(FetchError::Http { status: 404 }));
        assert_eq!(state.error.as_deref(), Some("HTTP error! status: 404"));

        state.begin();
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failure_keeps_previous_status() {
        let mut state = ViewState::default();
        state.complete(Ok(HealthPayload::new("ok")));
        state.begin();
        state.complete(Err(FetchError::Http { status: 502 }));

        assert!(state.error.is_some());
        assert_eq!(state.status, Some(HealthPayload::new("ok")));
    }
}
