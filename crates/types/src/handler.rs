//! Task handler endpoint definitions

use std::fmt;
use std::sync::Arc;

/// Producer invoked at resolution time to obtain the handler URL
pub type HandlerProducer = Arc<dyn Fn() -> String + Send + Sync>;

/// Public endpoint Cloud Tasks calls to execute a queued job
#[derive(Clone)]
pub enum Handler {
    /// URL known up front
    Literal(String),
    /// URL computed on demand, e.g. from late-bound application settings
    Deferred(HandlerProducer),
}

impl Handler {
    /// Create a handler whose URL is produced lazily
    pub fn deferred<F>(producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Handler::Deferred(Arc::new(producer))
    }

    /// Produce the handler URL. Deferred producers run on every call.
    pub fn value(&self) -> String {
        match self {
            Handler::Literal(url) => url.clone(),
            Handler::Deferred(producer) => producer(),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Handler::Deferred(_))
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Literal(url) => f.debug_tuple("Literal").field(url).finish(),
            Handler::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<String> for Handler {
    fn from(url: String) -> Self {
        Handler::Literal(url)
    }
}

impl From<&str> for Handler {
    fn from(url: &str) -> Self {
        Handler::Literal(url.to_string())
    }
}
