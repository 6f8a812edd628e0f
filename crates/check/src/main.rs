//! Cloud Tasks queue connection checker - validates a connection and prints its callback URL

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tasks_config::{ConfigLoader, ConfigValidator, ConnectionConfig};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Check a Cloud Tasks queue connection before deploying it
#[derive(Debug, Parser)]
#[command(name = "tasks-check", version, about)]
struct Cli {
    /// Connection configuration file
    #[arg(long, env = "CONFIG_PATH", default_value = "cloud-tasks.yaml")]
    config: PathBuf,

    /// Read the connection from CLOUD_TASKS_* environment variables only
    #[arg(long)]
    env_only: bool,

    /// Write an example configuration file to this path and exit
    #[arg(long, value_name = "PATH")]
    write_example: Option<PathBuf>,
}

fn main() -> Result<()> {
    if let Err(e) = dotenv::dotenv() {
        if !e.to_string().contains("No such file or directory") {
            eprintln!("Could not load .env file: {}", e);
        }
    }

    init_logging()?;

    let cli = Cli::parse();

    if let Some(path) = cli.write_example {
        ConfigLoader::create_example(&path)
            .with_context(|| format!("Failed to write example to {}", path.display()))?;
        info!("Example configuration written to {}", path.display());
        return Ok(());
    }

    let config = if cli.env_only {
        ConfigLoader::load_from_env().context("Failed to load connection from environment")?
    } else {
        ConfigLoader::load(&cli.config).context("Failed to load connection configuration")?
    };

    check(&config)
}

fn check(config: &ConnectionConfig) -> Result<()> {
    info!(queue = %config.queue_path(), "Checking queue connection");

    let report = ConfigValidator::report(config);
    for issue in &report.warnings {
        warn!(field = %issue.field, "{}", issue.message);
    }
    for issue in &report.errors {
        tracing::error!(field = %issue.field, "{}", issue.message);
    }
    info!("{}", report.summary());

    if report.has_errors() {
        bail!("Queue connection is invalid");
    }

    let callback_url = config.callback_url()?;
    info!(callback_url = %callback_url, "Queue connection is valid");
    println!("{}", callback_url);

    Ok(())
}

/// Initialize logging based on environment variables
fn init_logging() -> Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
    }

    Ok(())
}
