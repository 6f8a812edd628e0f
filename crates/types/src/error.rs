//! Error types for the Cloud Tasks queue connection

use thiserror::Error;

/// Main error type for queue connection setup
#[derive(Error, Debug)]
pub enum TasksError {
    /// Required connection settings are missing
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Task handler URL could not be turned into a callback address
    #[error(transparent)]
    Handler(#[from] HandlerError),

    /// Loading configuration from its sources failed
    #[error("Configuration error: {0}")]
    Load(String),
}

/// Result type alias for queue connection operations
pub type Result<T> = std::result::Result<T, TasksError>;

/// Missing required connection settings
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `project` is missing or empty
    #[error(
        "Google Cloud project not provided. To fix this, set the `project` \
         connection setting (CLOUD_TASKS_PROJECT)."
    )]
    InvalidProject,

    /// `location` is missing or empty
    #[error(
        "Google Cloud Tasks location not provided. To fix this, set the `location` \
         connection setting (CLOUD_TASKS_LOCATION)."
    )]
    InvalidLocation,

    /// `service_account_email` is missing or empty
    #[error(
        "Google Service Account email address not provided. This is needed to secure \
         the task handler. To fix this, set the `service_account_email` connection \
         setting (CLOUD_TASKS_SERVICE_ACCOUNT_EMAIL)."
    )]
    InvalidServiceAccountEmail,
}

impl ConfigError {
    /// Connection setting the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::InvalidProject => "project",
            ConfigError::InvalidLocation => "location",
            ConfigError::InvalidServiceAccountEmail => "service_account_email",
        }
    }
}

/// Task handler URL errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// URL does not parse or has no host
    #[error(
        "Unable to push task to Cloud Tasks because the task handler URL ({url}) is \
         malformed. Please inspect the URL closely for any mistakes."
    )]
    Malformed { url: String },

    /// URL points at the local machine
    #[error(
        "Unable to push task to Cloud Tasks because the handler URL is set to a local \
         host: {url}. This does not work because Google is not able to call the given \
         local URL. If you are developing locally, consider using a tunnel such as \
         ngrok or Expose to make your application reachable from the internet."
    )]
    LocalHost { url: String },
}

impl HandlerError {
    /// The handler value that was rejected
    pub fn url(&self) -> &str {
        match self {
            HandlerError::Malformed { url } | HandlerError::LocalHost { url } => url,
        }
    }
}
