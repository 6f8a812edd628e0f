//! Configuration loader implementation

use crate::schema::ConnectionConfig;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use std::path::Path;
use tasks_types::TasksError;

/// Prefix for environment variable overrides, e.g. `CLOUD_TASKS_PROJECT`
pub const ENV_PREFIX: &str = "CLOUD_TASKS_";

/// Configuration loader that handles YAML files and environment variables
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file and environment variables
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<ConnectionConfig> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Err(TasksError::Load(format!(
                "Configuration file not found: {}",
                config_path.display()
            ))
            .into());
        }

        let config: ConnectionConfig = Figment::new()
            .merge(Yaml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract_lossy()
            .context("Failed to parse configuration")?;

        tracing::debug!(path = %config_path.display(), "Loaded queue connection configuration");

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn load_from_env() -> Result<ConnectionConfig> {
        let config: ConnectionConfig = Figment::new()
            .merge(Env::prefixed(ENV_PREFIX))
            .extract_lossy()
            .context("Failed to parse configuration from environment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from string (for testing)
    pub fn load_from_str(yaml_content: &str) -> Result<ConnectionConfig> {
        let config: ConnectionConfig = Figment::new()
            .merge(Yaml::string(yaml_content))
            .extract_lossy()
            .context("Failed to parse configuration from string")?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &ConnectionConfig) -> Result<()> {
        config.validate().map_err(TasksError::from)?;
        Ok(())
    }

    /// Create example configuration file
    pub fn create_example<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = ConnectionConfig::new(
            "my-project",
            "europe-west6",
            "cloud-tasks@my-project.iam.gserviceaccount.com",
        )
        .with_handler("https://my-app.example.com");

        let yaml_content = serde_yaml::to_string(&config)
            .context("Failed to serialize example configuration")?;

        std::fs::write(path.as_ref(), yaml_content)
            .context("Failed to write example configuration file")?;

        Ok(())
    }
}
