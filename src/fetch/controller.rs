//! Fetch controller: the single owner of the in-flight request.
//!
//! The controller guarantees at most one fetch in flight. A completion only
//! counts if it carries the id of the request the controller is waiting for;
//! anything else (a duplicate, or an answer to a request dropped by
//! `fail_unavailable`) is ignored without touching the store.

use super::outcome::FetchOutcome;
use crate::app::{ItemStore, Transition};
use chrono::{DateTime, Utc};

/// Context key carrying the request id through Zellij's `web_request`.
pub const REQUEST_ID_KEY: &str = "request_id";

/// An HTTP GET the plugin shim must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Correlates the eventual `WebRequestResult` with this request.
    pub id: u64,
    /// Endpoint to GET.
    pub url: String,
}

/// Drives the store through the fetch lifecycle.
#[derive(Debug, Clone)]
pub struct FetchController {
    endpoint: String,
    next_id: u64,
    in_flight: Option<u64>,
    started: bool,
    last_success_at: Option<DateTime<Utc>>,
}

impl FetchController {
    /// Creates a controller for the given endpoint. Nothing is requested yet.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            next_id: 1,
            in_flight: None,
            started: false,
            last_success_at: None,
        }
    }

    /// Endpoint this controller fetches from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Id of the request currently awaited, if any.
    #[must_use]
    pub const fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// When the last successful fetch completed.
    #[must_use]
    pub const fn last_success_at(&self) -> Option<DateTime<Utc>> {
        self.last_success_at
    }

    /// Issues the startup fetch. Only the first call does anything.
    pub fn start_once(&mut self, store: &mut ItemStore) -> Option<FetchRequest> {
        if self.started {
            tracing::debug!("initial fetch already issued");
            return None;
        }
        self.started = true;
        self.begin(store)
    }

    /// Dispatches `FetchStart` and returns the request to send.
    ///
    /// Returns `None` while another fetch is in flight.
    pub fn begin(&mut self, store: &mut ItemStore) -> Option<FetchRequest> {
        if let Some(id) = self.in_flight {
            tracing::debug!(in_flight = id, "fetch already in flight, ignoring request");
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.started = true;
        self.in_flight = Some(id);
        store.dispatch(Transition::FetchStart);

        tracing::debug!(request_id = id, url = %self.endpoint, "fetch started");
        Some(FetchRequest {
            id,
            url: self.endpoint.clone(),
        })
    }

    /// Applies the outcome of request `request_id` to the store.
    ///
    /// Returns `false` and leaves the store alone if `request_id` is not the
    /// request in flight.
    pub fn complete(
        &mut self,
        store: &mut ItemStore,
        request_id: u64,
        outcome: FetchOutcome,
    ) -> bool {
        if self.in_flight != Some(request_id) {
            tracing::debug!(
                request_id = request_id,
                in_flight = ?self.in_flight,
                "ignoring stale fetch completion"
            );
            return false;
        }
        self.in_flight = None;

        match outcome {
            FetchOutcome::Success(items) => {
                self.last_success_at = Some(Utc::now());
                store.dispatch(Transition::FetchSuccess(items));
            }
            FetchOutcome::Failure(message) => {
                tracing::warn!(request_id = request_id, error = %message, "fetch failed");
                store.dispatch(Transition::FetchFailure(message));
            }
        }
        true
    }

    /// Records that items cannot be fetched at all, e.g. the host refused
    /// network access.
    ///
    /// Surfaces `reason` as a fetch failure. Any request in flight is
    /// dropped, so its completion becomes a no-op.
    pub fn fail_unavailable(&mut self, store: &mut ItemStore, reason: String) -> bool {
        if let Some(id) = self.in_flight.take() {
            tracing::debug!(request_id = id, "dropping in-flight fetch");
        }
        tracing::warn!(error = %reason, "items unavailable");
        store.dispatch(Transition::FetchFailure(reason))
    }
}
