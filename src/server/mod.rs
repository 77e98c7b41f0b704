//! Setup server for the deploy form.
//!
//! Serves two endpoints:
//! - POST /setup/prepop_setting - prepop options for a template (JSON object)
//! - GET /setup/templates - list of deployable templates (JSON array)

mod registry;

pub use registry::{TEMPLATE_CONFIG_FILE, TemplateEntry, TemplateRegistry};

use std::io::{Cursor, Read};
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;
use tiny_http::{Response, Server};
use tracing::{error, info};

use crate::client::{PREPOP_SETTING_PATH, TEMPLATES_PATH};

/// Body of a prepop-setting request
#[derive(Debug, Deserialize)]
struct PrepopQuery {
    template: String,
}

/// Run the setup server on the current thread until the process exits.
pub fn run(bind: &str, registry: TemplateRegistry) -> Result<()> {
    let server =
        Server::http(bind).map_err(|e| anyhow!("Failed to bind setup server on {bind}: {e}"))?;
    info!(
        "[deploydeck] Setup server listening on {} ({} templates)",
        bind,
        registry.len()
    );
    serve_loop(&server, &registry);
    Ok(())
}

/// Setup server running in a background thread. Dropping the handle stops
/// the accept loop, which lets tests bind port 0.
pub struct SetupServer {
    server: Arc<Server>,
    addr: SocketAddr,
    handle: Option<JoinHandle<()>>,
}

impl SetupServer {
    pub fn spawn(bind: &str, registry: TemplateRegistry) -> Result<Self> {
        let server = Server::http(bind)
            .map_err(|e| anyhow!("Failed to bind setup server on {bind}: {e}"))?;
        let addr = server
            .server_addr()
            .to_ip()
            .context("Setup server has no IP listen address")?;
        info!(
            "[deploydeck] Setup server listening on {} ({} templates)",
            addr,
            registry.len()
        );

        let server = Arc::new(server);
        let worker = Arc::clone(&server);
        let handle = thread::spawn(move || serve_loop(&worker, &registry));

        Ok(Self {
            server,
            addr,
            handle: Some(handle),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL clients should use as their app root.
    pub fn app_root(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for SetupServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn serve_loop(server: &Server, registry: &TemplateRegistry) {
    for mut request in server.incoming_requests() {
        let method = request.method().to_string();
        let url = request.url().to_string();

        let response = match (method.as_str(), url.as_str()) {
            ("POST", PREPOP_SETTING_PATH) => prepop_setting(&mut request, registry),
            ("GET", TEMPLATES_PATH) => templates(registry),
            _ => Response::from_string("Not Found").with_status_code(404),
        };

        let _ = request.respond(response);
    }
}

fn prepop_setting(
    request: &mut tiny_http::Request,
    registry: &TemplateRegistry,
) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    if let Err(e) = request.as_reader().read_to_string(&mut body) {
        error!("[deploydeck] Failed to read prepop request body: {}", e);
        return Response::from_string("Bad Request").with_status_code(400);
    }

    let query: PrepopQuery = match serde_urlencoded::from_str(&body) {
        Ok(query) => query,
        Err(e) => {
            error!("[deploydeck] Invalid prepop request body {:?}: {}", body, e);
            return Response::from_string("Bad Request").with_status_code(400);
        }
    };

    let mut options = serde_json::Map::new();
    for (index, value) in registry.prepop_options(&query.template).iter().enumerate() {
        options.insert(index.to_string(), Value::String(value.clone()));
    }

    json_response(&Value::Object(options))
}

fn templates(registry: &TemplateRegistry) -> Response<Cursor<Vec<u8>>> {
    match serde_json::to_string(&registry.template_names()) {
        Ok(body) => json_body(body),
        Err(e) => {
            error!("[deploydeck] Failed to encode template list: {}", e);
            Response::from_string("Internal Server Error").with_status_code(500)
        }
    }
}

fn json_response(value: &Value) -> Response<Cursor<Vec<u8>>> {
    match serde_json::to_string(value) {
        Ok(body) => json_body(body),
        Err(e) => {
            error!("[deploydeck] Failed to encode response: {}", e);
            Response::from_string("Internal Server Error").with_status_code(500)
        }
    }
}

fn json_body(body: String) -> Response<Cursor<Vec<u8>>> {
    Response::from_string(body).with_header(
        tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
    )
}
