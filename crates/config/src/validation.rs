//! Configuration validation utilities

use crate::schema::ConnectionConfig;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tasks_types::ConfigError;

/// Required connection settings, in the order they are checked
pub const REQUIRED_SETTINGS: [(&str, ConfigError); 3] = [
    ("project", ConfigError::InvalidProject),
    ("location", ConfigError::InvalidLocation),
    ("service_account_email", ConfigError::InvalidServiceAccountEmail),
];

/// Read-only view over a connection's settings
pub trait ConnectionSettings {
    /// Whether `key` is missing or holds an empty value
    fn is_blank(&self, key: &str) -> bool;
}

impl ConnectionSettings for Map<String, Value> {
    fn is_blank(&self, key: &str) -> bool {
        self.get(key).map_or(true, is_empty_value)
    }
}

impl ConnectionSettings for HashMap<String, Value> {
    fn is_blank(&self, key: &str) -> bool {
        self.get(key).map_or(true, is_empty_value)
    }
}

impl ConnectionSettings for HashMap<String, String> {
    fn is_blank(&self, key: &str) -> bool {
        self.get(key).map_or(true, |value| is_empty_str(value))
    }
}

impl ConnectionSettings for ConnectionConfig {
    fn is_blank(&self, key: &str) -> bool {
        match key {
            "project" => is_empty_str(&self.project),
            "location" => is_empty_str(&self.location),
            "service_account_email" => is_empty_str(&self.service_account_email),
            "queue" => is_empty_str(&self.queue),
            "handler" => self.handler.as_deref().map_or(true, is_empty_str),
            "app_url" => self.app_url.as_deref().map_or(true, is_empty_str),
            _ => true,
        }
    }
}

/// Loose emptiness used for connection settings.
///
/// `null`, `false`, zero, `""`, `"0"` and empty collections all count as unset.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n == 0.0),
        Value::String(s) => is_empty_str(s),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn is_empty_str(value: &str) -> bool {
    value.is_empty() || value == "0"
}

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the required settings, failing on the first one that is unset
    pub fn validate<S>(config: &S) -> Result<(), ConfigError>
    where
        S: ConnectionSettings + ?Sized,
    {
        for (key, error) in REQUIRED_SETTINGS {
            if config.is_blank(key) {
                return Err(error);
            }
        }
        Ok(())
    }

    /// Collect every problem with a connection instead of stopping at the first
    pub fn report(config: &ConnectionConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (key, error) in REQUIRED_SETTINGS {
            if config.is_blank(key) {
                report.add_error(key, &error.to_string());
            }
        }

        if config.is_blank("queue") {
            report.add_warning("queue", "Queue name is empty, tasks cannot be routed");
        }

        if !config.is_blank("service_account_email")
            && !config.service_account_email.contains('@')
        {
            report.add_warning(
                "service_account_email",
                &format!(
                    "Service account email '{}' does not look like an email address",
                    config.service_account_email
                ),
            );
        }

        Self::validate_handler(config, &mut report);

        report
    }

    fn validate_handler(config: &ConnectionConfig, report: &mut ValidationReport) {
        let field = if config.handler.is_some() { "handler" } else { "app_url" };

        match config.callback_url() {
            Ok(callback) => {
                if !callback.starts_with("https://") {
                    report.add_warning(
                        field,
                        &format!("Task handler {} should use HTTPS", callback),
                    );
                }
            }
            Err(e) => report.add_error(field, &e.to_string()),
        }
    }
}

/// Validation report containing errors and warnings
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

/// A validation issue (error or warning)
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn summary(&self) -> String {
        format!("Validation: {} errors, {} warnings", self.errors.len(), self.warnings.len())
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
