//! Configuration schema definitions

use crate::handler::resolve_handler;
use crate::validation::ConfigValidator;
use serde::{Deserialize, Serialize};
use tasks_types::{ConfigError, Handler, HandlerError};

/// Cloud Tasks queue connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Google Cloud project id
    pub project: String,
    /// Cloud Tasks region, e.g. `europe-west6`
    pub location: String,
    /// Service account used to sign the OIDC token sent to the handler
    pub service_account_email: String,
    /// Queue name
    #[serde(default = "default_queue")]
    pub queue: String,
    /// Public URL Cloud Tasks calls to run a task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    /// Application base URL, used as handler when none is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
}

fn default_queue() -> String {
    "default".to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            project: String::new(),
            location: String::new(),
            service_account_email: String::new(),
            queue: default_queue(),
            handler: None,
            app_url: None,
        }
    }
}

impl ConnectionConfig {
    /// Create a connection with the required settings and the default queue
    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        service_account_email: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            service_account_email: service_account_email.into(),
            ..Self::default()
        }
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    pub fn with_app_url(mut self, app_url: impl Into<String>) -> Self {
        self.app_url = Some(app_url.into());
        self
    }

    /// Check the required settings, stopping at the first missing one
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigValidator::validate(self)
    }

    /// Configured handler. Falls back to the application URL, read when resolved.
    pub fn handler(&self) -> Handler {
        match &self.handler {
            Some(handler) => Handler::Literal(handler.clone()),
            None => {
                let app_url = self.app_url.clone();
                Handler::deferred(move || app_url.clone().unwrap_or_default())
            }
        }
    }

    /// Callback address to register with Cloud Tasks
    pub fn callback_url(&self) -> Result<String, HandlerError> {
        resolve_handler(self.handler())
    }

    /// Fully-qualified queue resource name
    pub fn queue_path(&self) -> String {
        format!(
            "projects/{}/locations/{}/queues/{}",
            self.project, self.location, self.queue
        )
    }
}
