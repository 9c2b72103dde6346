// src/view/render.rs
use super::ViewState;
use std::fmt;

/// User action bound to a terminal screen. Both re-run the same refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Retry,
    Refresh,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Retry => f.write_str("Retry"),
            Action::Refresh => f.write_str("Refresh"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Failure { message: String },
    Success { status: String },
    /// Not loading and nothing to show; unreachable once a fetch completed.
    Blank,
}

impl Screen {
    pub fn action(&self) -> Option<Action> {
        match self {
            Screen::Failure { .. } => Some(Action::Retry),
            Screen::Success { .. } => Some(Action::Refresh),
            Screen::Loading | Screen::Blank => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Loading => f.write_str("Checking health status...")?,
            Screen::Failure { message } => write!(f, "Error: {}", message)?,
            Screen::Success { status } => write!(f, "Status: {}", status)?,
            Screen::Blank => {}
        }

        if let Some(action) = self.action() {
            write!(f, "\n[{}]", action)?;
        }
        Ok(())
    }
}

pub fn render(state: &ViewState) -> Screen {
    if state.loading {
        return Screen::Loading;
    }

    if let Some(message) = &state.error {
        return Screen::Failure {
            message: message.clone(),
        };
    }

    match &state.status {
        Some(payload) => Screen::Success {
            status: payload.status.clone(),
        },
        None => Screen::Blank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthPayload;
    use proptest::prelude::*;

    #[test]
    fn test_success_screen_text() {
        let state = ViewState {
            loading: false,
            error: None,
            status: Some(HealthPayload::new("ok")),
        };

        let screen = render(&state);
        assert_eq!(screen.to_string(), "Status: ok\n[Refresh]");
        assert_eq!(screen.action(), Some(Action::Refresh));
    }

    #[test]
    fn test_failure_screen_text() {
        let state = ViewState {
            loading: false,
            error: Some("HTTP error! status: 500".to_string()),
            status: None,
        };

        let screen = render(&state);
        assert_eq!(screen.to_string(), "Error: HTTP error! status: 500\n[Retry]");
        assert_eq!(screen.action(), Some(Action::Retry));
    }

    #[test]
    fn test_terminal_state_without_data_is_blank() {
        let state = ViewState {
            loading: false,
            error: None,
            status: None,
        };

        assert_eq!(render(&state), Screen::Blank);
        assert_eq!(render(&state).to_string(), "");
    }

    fn arb_state() -> impl Strategy<Value = ViewState> {
        (
            any::<bool>(),
            proptest::option::of("[a-z0-9 !:]{0,24}"),
            proptest::option::of("[a-z]{1,12}"),
        )
            .prop_map(|(loading, error, status)| ViewState {
                loading,
                error,
                status: status.map(HealthPayload::new),
            })
    }

    proptest! {
        #[test]
        fn loading_suppresses_everything_else(state in arb_state()) {
            let mut state = state;
            state.loading = true;
            prop_assert_eq!(render(&state), Screen::Loading);
            prop_assert_eq!(render(&state).action(), None);
        }

        #[test]
        fn error_wins_over_status(state in arb_state(), message in "[a-z0-9 ]{1,24}") {
            let mut state = state;
            state.loading = false;
            state.error = Some(message);
            let screen = render(&state);
            prop_assert!(matches!(screen, Screen::Failure { .. }), "unexpected screen");
            prop_assert!(!screen.to_string().contains("Status:"));
        }

        #[test]
        fn render_is_deterministic(state in arb_state()) {
            prop_assert_eq!(render(&state), render(&state.clone()));
        }
    }
}
