//! Shared test utilities for setup flow integration tests

use std::io::Read;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tiny_http::{Response, Server};

/// A canned response the recording server returns for one request.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: "error".to_string(),
        }
    }
}

/// Stand-in for the setup server that records every request it sees and
/// replies from a queue of canned responses (the last one repeats).
pub struct RecordingServer {
    server: Arc<Server>,
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl RecordingServer {
    pub fn start(responses: Vec<CannedResponse>) -> Self {
        assert!(!responses.is_empty(), "need at least one canned response");

        let server = Arc::new(Server::http("127.0.0.1:0").expect("Failed to bind mock server"));
        let addr = server
            .server_addr()
            .to_ip()
            .expect("mock server has no IP address");
        let hits = Arc::new(AtomicUsize::new(0));
        let bodies = Arc::new(Mutex::new(Vec::new()));

        let worker = Arc::clone(&server);
        let worker_hits = Arc::clone(&hits);
        let worker_bodies = Arc::clone(&bodies);
        let handle = std::thread::spawn(move || {
            let mut remaining = responses;
            for mut request in worker.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                worker_bodies.lock().unwrap().push(body);

                let canned = if remaining.len() > 1 {
                    remaining.remove(0)
                } else {
                    remaining[0].clone()
                };
                worker_hits.fetch_add(1, Ordering::SeqCst);

                let response = Response::from_string(canned.body).with_status_code(canned.status);
                let _ = request.respond(response);
            }
        });

        Self {
            server,
            addr,
            hits,
            bodies,
            handle: Some(handle),
        }
    }

    pub fn app_root(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn bodies(&self) -> Vec<String> {
        self.bodies.lock().unwrap().clone()
    }

    /// Block until the server has seen `count` requests, panicking on
    /// timeout so a hung flow fails loudly.
    pub fn wait_for_hits(&self, count: usize, timeout: Duration) {
        let deadline = Instant::now() + timeout;
        while self.hits() < count {
            assert!(
                Instant::now() < deadline,
                "timed out waiting for {} request(s), saw {}",
                count,
                self.hits()
            );
            std::thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Drop for RecordingServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Poll a condition until it holds or the timeout elapses.
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    condition()
}
