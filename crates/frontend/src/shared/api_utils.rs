//! HTTP plumbing for the order service.
//!
//! Every request gets its own [`CancelToken`] and a timeout. The service is an
//! Apps Script deployment, so the token travels in the query string and
//! responses are read as text before decoding.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use web_sys::{AbortController, AbortSignal};

/// Failure below the level of a specific action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("request cancelled")]
    Cancelled,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Decode(String),
}

impl TransportError {
    /// Wrap a decode failure, keeping its full context chain
    pub fn decode(err: impl std::fmt::Display) -> Self {
        TransportError::Decode(format!("{:#}", err))
    }
}

/// Build `base?query`, appending with `&` when `base` already has a query
pub fn api_url<Q: Serialize>(base: &str, query: &Q) -> Result<String, TransportError> {
    let query = serde_qs::to_string(query)
        .map_err(|e| TransportError::Network(format!("Failed to build query: {}", e)))?;
    Ok(join_query(base, &query))
}

fn join_query(base: &str, query: &str) -> String {
    if query.is_empty() {
        base.to_string()
    } else if base.contains('?') {
        format!("{}&{}", base, query)
    } else {
        format!("{}?{}", base, query)
    }
}

/// Cancellation handle for one outstanding request
#[derive(Clone)]
pub struct CancelToken {
    controller: Option<AbortController>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            controller: AbortController::new().ok(),
        }
    }

    pub fn cancel(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.signal().map(|s| s.aborted()).unwrap_or(false)
    }

    fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Send a GET (no body) or a JSON POST and return the response body.
///
/// The request is aborted through `cancel` when `timeout_ms` elapses.
pub async fn send_text<B: Serialize>(
    url: &str,
    body: Option<&B>,
    timeout_ms: u32,
    cancel: &CancelToken,
) -> Result<String, TransportError> {
    let timed_out = Rc::new(Cell::new(false));
    // Dropping the timer at the end of this function disarms it
    let _timer = {
        let timed_out = timed_out.clone();
        let cancel = cancel.clone();
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            cancel.cancel();
        })
    };

    let signal = cancel.signal();
    let request = match body {
        Some(body) => Request::post(url)
            .abort_signal(signal.as_ref())
            .json(body)
            .map_err(|e| TransportError::Network(format!("Failed to serialize request: {}", e)))?,
        None => Request::get(url)
            .abort_signal(signal.as_ref())
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to build request: {}", e)))?,
    };

    let classify =
        |e: gloo_net::Error| failure_cause(timed_out.get(), cancel.is_cancelled(), timeout_ms, e);

    let response = request.send().await.map_err(&classify)?;
    if !response.ok() {
        return Err(TransportError::Status(response.status()));
    }
    response.text().await.map_err(&classify)
}

/// Name the failure of an aborted or broken request.
///
/// The timer aborts through the same controller, so a timeout also reads as
/// cancelled and has to be checked first.
fn failure_cause(
    timed_out: bool,
    cancelled: bool,
    timeout_ms: u32,
    err: impl std::fmt::Display,
) -> TransportError {
    if timed_out {
        TransportError::Timeout(timeout_ms)
    } else if cancelled {
        TransportError::Cancelled
    } else {
        TransportError::Network(err.to_string())
    }
}

/// Anything the registry can abort
pub trait Cancel {
    fn cancel(&self);
}

impl Cancel for CancelToken {
    fn cancel(&self) {
        CancelToken::cancel(self);
    }
}

/// What an outstanding request is for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    Auth,
    Load,
    Update,
}

/// Outstanding requests of one session.
///
/// A new load supersedes the previous one; logout cancels everything.
pub struct RequestRegistry<H = CancelToken> {
    next_id: u64,
    entries: Vec<(u64, RequestKind, H)>,
}

impl<H> Default for RequestRegistry<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl RequestRegistry<CancelToken> {
    /// Track a new browser request and hand back its id and abort handle
    pub fn register(&mut self, kind: RequestKind) -> (u64, CancelToken) {
        let token = CancelToken::new();
        let id = self.track(kind, token.clone());
        (id, token)
    }
}

impl<H: Cancel> RequestRegistry<H> {
    pub fn track(&mut self, kind: RequestKind, handle: H) -> u64 {
        if kind == RequestKind::Load {
            self.entries.retain(|(_, k, previous)| {
                if *k == RequestKind::Load {
                    previous.cancel();
                    false
                } else {
                    true
                }
            });
        }
        self.next_id += 1;
        self.entries.push((self.next_id, kind, handle));
        self.next_id
    }

    pub fn release(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _, _)| *entry_id != id);
    }

    pub fn cancel_all(&mut self) {
        for (_, _, handle) in self.entries.drain(..) {
            handle.cancel();
        }
    }
}
