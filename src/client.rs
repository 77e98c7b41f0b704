//! HTTP client for the setup server.
//!
//! Speaks the two application-relative endpoints the deploy form depends on:
//! the template list and the per-template prepop options.

use std::time::Duration;

use serde_json::Value;

use crate::domain::PrepopEntry;

/// Application-relative path of the prepop-setting endpoint
pub const PREPOP_SETTING_PATH: &str = "/setup/prepop_setting";

/// Application-relative path of the template list endpoint
pub const TEMPLATES_PATH: &str = "/setup/templates";

/// Default app root when no config is present
pub const DEFAULT_APP_ROOT: &str = "http://127.0.0.1:8046";

/// Single failure class for a refresh: the component does not distinguish
/// transport errors, non-success statuses and undecodable bodies beyond
/// what ends up in the log line.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] Box<ureq::Error>),

    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        ClientError::Request(Box::new(err))
    }
}

/// Client for the setup server
#[derive(Clone)]
pub struct SetupClient {
    app_root: String,
    agent: ureq::Agent,
}

impl SetupClient {
    /// Create a client for the given app root, e.g. `http://127.0.0.1:8046`.
    pub fn new(app_root: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(30))
            .build();

        Self {
            app_root: app_root.into().trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn app_root(&self) -> &str {
        &self.app_root
    }

    /// Fetch the prepop options associated with a template.
    ///
    /// Posts the template's display text as a form field and decodes the
    /// JSON object response in document order. The template may be empty;
    /// the request is issued regardless.
    pub fn prepop_settings(&self, template: &str) -> Result<Vec<PrepopEntry>, ClientError> {
        let url = format!("{}{}", self.app_root, PREPOP_SETTING_PATH);
        let body: Value = self
            .agent
            .post(&url)
            .send_form(&[("template", template)])?
            .into_json()?;

        let Value::Object(map) = body else {
            return Err(ClientError::Decode("expected a JSON object".to_string()));
        };

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            let Value::String(value) = value else {
                return Err(ClientError::Decode(format!(
                    "non-string value for key {key:?}"
                )));
            };
            entries.push(PrepopEntry { key, value });
        }
        Ok(entries)
    }

    /// Fetch the list of deployable templates.
    pub fn templates(&self) -> Result<Vec<String>, ClientError> {
        let url = format!("{}{}", self.app_root, TEMPLATES_PATH);
        let names: Vec<String> = self.agent.get(&url).call()?.into_json()?;
        Ok(names)
    }
}
