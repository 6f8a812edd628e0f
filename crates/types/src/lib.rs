//! Shared types for the Cloud Tasks queue connection
//!
//! This crate contains the error taxonomy and the task handler type used by
//! the configuration crate and the operator tooling.

pub mod error;
pub mod handler;

// Re-export commonly used types
pub use error::{ConfigError, HandlerError, Result, TasksError};
pub use handler::{Handler, HandlerProducer};
