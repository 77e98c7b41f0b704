//! Background fetcher for prepop options.
//!
//! Refresh requests go to a worker thread over a channel; the worker posts
//! to the setup server and sends the outcome back. The GUI drains outcomes
//! from its update loop, so the dropdown is only ever mutated there.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use tracing::warn;

use crate::client::{ClientError, SetupClient};
use crate::domain::PrepopEntry;

/// A single refresh request handed to the worker
#[derive(Debug, Clone)]
pub struct PrepopRequest {
    pub seq: u64,
    pub template: String,
}

/// Outcome of one refresh, tagged with the request that produced it
#[derive(Debug)]
pub struct PrepopOutcome {
    pub seq: u64,
    pub template: String,
    pub result: Result<Vec<PrepopEntry>, ClientError>,
}

/// Fetcher owning the worker thread. Sequence numbers are per-fetcher and
/// strictly increasing, so callers can tell stale outcomes from current ones.
pub struct PrepopFetcher {
    tx: Sender<PrepopRequest>,
    rx: Receiver<PrepopOutcome>,
    next_seq: u64,
}

impl PrepopFetcher {
    /// Create a fetcher and start its worker thread.
    pub fn new(client: SetupClient) -> Self {
        let (req_tx, req_rx) = channel();
        let (out_tx, out_rx) = channel();

        thread::spawn(move || fetch_loop(client, req_rx, out_tx));

        Self {
            tx: req_tx,
            rx: out_rx,
            next_seq: 0,
        }
    }

    /// Queue one refresh for the given template text and return its
    /// sequence number. The template may be empty.
    pub fn request_refresh(&mut self, template: &str) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        let _ = self.tx.send(PrepopRequest {
            seq,
            template: template.to_string(),
        });
        seq
    }

    /// Non-blocking poll for the next completed outcome.
    pub fn try_recv(&self) -> Option<PrepopOutcome> {
        self.rx.try_recv().ok()
    }
}

fn fetch_loop(
    client: SetupClient,
    rx: Receiver<PrepopRequest>,
    tx: Sender<PrepopOutcome>,
) {
    while let Ok(request) = rx.recv() {
        let result = client.prepop_settings(&request.template);
        if let Err(e) = &result {
            // The UI stays silent on failure; the log line is the only trace.
            warn!(
                "[deploydeck] Prepop refresh for template {:?} failed: {}",
                request.template, e
            );
        }

        let outcome = PrepopOutcome {
            seq: request.seq,
            template: request.template,
            result,
        };
        if tx.send(outcome).is_err() {
            break;
        }
    }
}
