//! Queue connection configuration for Google Cloud Tasks
//!
//! This crate validates queue connection settings, resolves the task handler
//! into the callback URL Cloud Tasks invokes, and loads connections from YAML
//! files and environment variables.

pub mod handler;
pub mod loader;
pub mod schema;
pub mod validation;

pub use handler::{resolve_handler, HANDLE_TASK_PATH, LOCAL_HOSTS};
pub use loader::ConfigLoader;
pub use schema::*;
pub use validation::*;
