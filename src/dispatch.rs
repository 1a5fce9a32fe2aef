//! Background route computation with debounce and stale-result discard.
//!
//! Interactive dragging of stops and waypoints retriggers route
//! computation constantly. The dispatcher owns a worker thread that
//! coalesces submissions until inputs have been stable for the debounce
//! window, computes once, and delivers at most one result per settled
//! input state. A request arriving while a computation is in flight
//! supersedes it; the stale result is discarded, never delivered.
//!
//! The computation itself is [`crate::builder::build`], unchanged; the
//! same function serves synchronous callers directly.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, trace};

use crate::builder::{self, BuildOptions, RouteCoordinates};
use crate::polyline::Polyline;
use crate::types::{Stop, Waypoint};

/// Default input-settle window before a computation runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// One snapshot of the inputs to a route computation. Owned copies, so
/// the worker never shares mutable state with the UI.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub stops: Vec<Stop>,
    pub waypoints: Vec<Waypoint>,
    pub prior_geometry: Option<Polyline>,
    pub options: BuildOptions,
}

enum Message {
    Build(BuildRequest),
    Shutdown,
}

/// Handle to the worker thread. Dropping it shuts the worker down.
pub struct RouteDispatcher {
    tx: Sender<Message>,
    handle: Option<JoinHandle<()>>,
}

impl RouteDispatcher {
    /// Spawns the worker and returns the dispatcher plus the receiving
    /// end for computed results.
    pub fn spawn(debounce: Duration) -> (Self, Receiver<RouteCoordinates>) {
        let (tx, rx) = mpsc::channel::<Message>();
        let (results_tx, results_rx) = mpsc::channel::<RouteCoordinates>();

        let handle = thread::spawn(move || worker(rx, results_tx, debounce));

        (
            Self {
                tx,
                handle: Some(handle),
            },
            results_rx,
        )
    }

    /// Submits a new input snapshot, superseding any pending one.
    /// Submissions after shutdown are silently dropped.
    pub fn submit(&self, request: BuildRequest) {
        let _ = self.tx.send(Message::Build(request));
    }
}

impl Drop for RouteDispatcher {
    fn drop(&mut self) {
        let _ = self.tx.send(Message::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn worker(rx: Receiver<Message>, results: Sender<RouteCoordinates>, debounce: Duration) {
    let mut pending: Option<BuildRequest> = None;

    loop {
        let mut request = match pending.take() {
            Some(request) => request,
            None => match rx.recv() {
                Ok(Message::Build(request)) => request,
                Ok(Message::Shutdown) | Err(_) => return,
            },
        };

        // Coalesce until inputs have been stable for the full window.
        loop {
            match rx.recv_timeout(debounce) {
                Ok(Message::Build(newer)) => {
                    trace!("superseding pending route request");
                    request = newer;
                }
                Ok(Message::Shutdown) => return,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return,
            }
        }

        let result = builder::build(
            &request.stops,
            &request.waypoints,
            request.prior_geometry.as_ref(),
            &request.options,
        );

        // A submission that raced the computation makes this result
        // stale; carry the newer request into the next iteration.
        match rx.try_recv() {
            Ok(Message::Build(newer)) => {
                debug!("discarding stale route result");
                pending = Some(newer);
                continue;
            }
            Ok(Message::Shutdown) => return,
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => return,
        }

        if results.send(result).is_err() {
            return;
        }
    }
}
