//! Error taxonomy for registry construction, template rendering, and request
//! dispatch.
//!
//! Only [`ConfigError`] is fatal: it is produced while the registry is being
//! built and the process must not begin serving with a broken configuration.
//! Everything else is converted to an HTTP outcome at the request boundary so
//! a single bad request (or a missing template) never takes the service down.

use thiserror::Error;

/// Configuration problems detected while building the [`crate::registry::Registry`].
///
/// All of these abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate action id {0:?}")]
    DuplicateAction(String),
    #[error("action {0:?} has an empty path prefix")]
    EmptyPrefix(String),
    #[error("path prefix {prefix:?} of action {action:?} overlaps an already registered prefix")]
    OverlappingPrefix { action: String, prefix: String },
    #[error("duplicate format id {0:?}")]
    DuplicateFormat(String),
    #[error("no formatter registered under the fallback id {0:?}")]
    MissingFallback(String),
}

/// Template rendering failures.
///
/// Caught at the request boundary and turned into a 500 for the offending
/// request only; the process keeps serving.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template {0:?} is not loaded")]
    MissingTemplate(String),
    #[error("template render failed: {0}")]
    Template(#[from] minijinja::Error),
    #[error("response envelope serialization failed: {0}")]
    Envelope(#[from] serde_json::Error),
    #[error("template directory unreadable: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-scoped dispatch failures; each variant maps to exactly one HTTP
/// outcome.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No handler prefix matched the request path.
    #[error("no handler registered for path {0:?}")]
    NotFound(String),
    /// The surface is GET-only.
    #[error("method {0} is not supported")]
    MethodNotAllowed(String),
    /// Fewer path segments than the matched handler requires.
    #[error("action {action:?} requires {required} path segments, got {got}")]
    TooFewSegments {
        action: String,
        required: usize,
        got: usize,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl DispatchError {
    /// The HTTP status this error surfaces as.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            DispatchError::NotFound(_) => 404,
            DispatchError::MethodNotAllowed(_) => 405,
            DispatchError::TooFewSegments { .. } => 400,
            DispatchError::Render(_) => 500,
        }
    }

    /// Fixed literal body for the error outcome. Kept byte-stable on purpose:
    /// clients and tests match these exactly, and internal render detail goes
    /// to the log rather than the wire.
    #[must_use]
    pub fn body(&self) -> &'static str {
        match self.status() {
            400 => "400 Bad Request",
            404 => "404 Not Found",
            405 => "405 Method Not Allowed",
            _ => "500 Internal Server Error",
        }
    }
}
