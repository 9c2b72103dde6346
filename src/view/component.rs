// src/view/component.rs
use super::{render, Action, Screen, ViewState};
use crate::config::StaleResponsePolicy;
use crate::health::{FetchError, HealthPayload, HealthSource};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Issued by [`HealthStatusView::begin_refresh`]; identifies one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    seq: u64,
}

impl RefreshTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Health status display backed by a [`HealthSource`].
///
/// The view state lives in a watch channel: each mutation is applied in one
/// step and published as a whole, so subscribers only ever observe
/// complete states.
pub struct HealthStatusView {
    source: Arc<dyn HealthSource>,
    policy: StaleResponsePolicy,
    state: watch::Sender<ViewState>,
    issued: AtomicU64,
    mounted: AtomicBool,
}

impl HealthStatusView {
    pub fn new(source: Arc<dyn HealthSource>, policy: StaleResponsePolicy) -> Self {
        let (state, _) = watch::channel(ViewState::default());

        Self {
            source,
            policy,
            state,
            issued: AtomicU64::new(0),
            mounted: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn screen(&self) -> Screen {
        render(&self.state.borrow())
    }

    pub fn requests_issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// First display. Issues the initial refresh; later calls are no-ops.
    pub fn mount(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(self.spawn_refresh())
    }

    /// Fetch and apply the result, suspending until the response resolves.
    pub async fn refresh_status(&self) {
        let ticket = self.begin_refresh();
        self.finish_refresh(ticket).await;
    }

    /// Switch to the loading view and hand out the request's ticket.
    pub fn begin_refresh(&self) -> RefreshTicket {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(ViewState::begin);

        debug!("Refresh #{} against {}", seq, self.source.endpoint());
        RefreshTicket { seq }
    }

    pub async fn finish_refresh(&self, ticket: RefreshTicket) {
        let result = self.source.fetch().await;
        self.complete(ticket, result);
    }

    /// Apply a finished request. Returns false if the result was discarded.
    pub fn complete(
        &self,
        ticket: RefreshTicket,
        result: Result<HealthPayload, FetchError>,
    ) -> bool {
        if let Err(err) = &result {
            debug!("Refresh #{} failed: {}", ticket.seq, err);
        }

        self.state.send_if_modified(|state| {
            let latest = self.issued.load(Ordering::SeqCst);
            if self.policy == StaleResponsePolicy::Discard && ticket.seq != latest {
                debug!(
                    "Discarding response to refresh #{} (latest is #{})",
                    ticket.seq, latest
                );
                return false;
            }

            state.complete(result);
            true
        })
    }

    /// Begin synchronously, then finish on a spawned task.
    pub fn spawn_refresh(self: &Arc<Self>) -> JoinHandle<()> {
        let ticket = self.begin_refresh();
        let view = self.clone();

        tokio::spawn(async move { view.finish_refresh(ticket).await })
    }

    pub fn trigger(self: &Arc<Self>, action: Action) -> JoinHandle<()> {
        debug!("{} requested", action);
        self.spawn_refresh()
    }
}
