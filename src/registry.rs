//! Declarative registries for route handlers and output formatters.
//!
//! The [`Registry`] is built once at startup through [`RegistryBuilder`],
//! validated (duplicate ids, empty or overlapping prefixes, missing fallback
//! formatter are all fatal [`ConfigError`]s), and then shared read-only with
//! the dispatcher. Formatters are kept in registration order so content
//! negotiation is deterministic.

use crate::error::ConfigError;
use crate::handlers::Behavior;
use std::sync::Arc;

/// The format id negotiation falls back to when nothing matches. Registry
/// construction guarantees a formatter is registered under it.
pub const FALLBACK_FORMAT: &str = "html";

/// How a formatter produces its body from the template store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Render the `{template_id}.html` template verbatim.
    Html,
    /// Render the `{template_id}.text` template verbatim.
    Text,
    /// Render the text-family template and wrap it in a JSON envelope.
    Json,
}

/// A content-type-specific response renderer.
#[derive(Debug, Clone)]
pub struct Formatter {
    pub format_id: String,
    pub content_type: String,
    pub kind: FormatKind,
}

impl Formatter {
    #[must_use]
    pub fn new(format_id: &str, content_type: &str, kind: FormatKind) -> Self {
        Self {
            format_id: format_id.to_string(),
            content_type: content_type.to_string(),
            kind,
        }
    }
}

/// A route-specific behavior bound to a path prefix and a base template
/// family. Immutable after registry construction.
#[derive(Clone)]
pub struct Handler {
    pub action_id: String,
    pub path_prefix: String,
    pub min_segments: usize,
    pub template_id: String,
    pub behavior: Arc<dyn Behavior>,
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("action_id", &self.action_id)
            .field("path_prefix", &self.path_prefix)
            .field("min_segments", &self.min_segments)
            .field("template_id", &self.template_id)
            .finish_non_exhaustive()
    }
}

impl Handler {
    #[must_use]
    pub fn new(
        action_id: &str,
        path_prefix: &str,
        min_segments: usize,
        template_id: &str,
        behavior: Arc<dyn Behavior>,
    ) -> Self {
        Self {
            action_id: action_id.to_string(),
            path_prefix: path_prefix.to_string(),
            min_segments,
            template_id: template_id.to_string(),
            behavior,
        }
    }
}

/// Immutable handler/formatter tables, constructed before serving begins and
/// never mutated afterwards — safe for unsynchronized concurrent reads.
#[derive(Debug)]
pub struct Registry {
    handlers: Vec<Handler>,
    formatters: Vec<Formatter>,
    fallback: usize,
}

impl Registry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Handlers in registration order.
    #[must_use]
    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// Formatters in registration order — the negotiation scan order.
    #[must_use]
    pub fn formatters(&self) -> &[Formatter] {
        &self.formatters
    }

    /// The mandatory `html` fallback formatter.
    #[must_use]
    pub fn fallback(&self) -> &Formatter {
        &self.formatters[self.fallback]
    }

    /// Look up a formatter by id.
    #[must_use]
    pub fn formatter(&self, format_id: &str) -> Option<&Formatter> {
        self.formatters.iter().find(|f| f.format_id == format_id)
    }
}

/// Builder enforcing the registry invariants up front.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    handlers: Vec<Handler>,
    formatters: Vec<Formatter>,
}

impl RegistryBuilder {
    /// Register a handler. Fails on a duplicate action id, an empty prefix,
    /// or a prefix that overlaps an already registered one (either being a
    /// string prefix of the other) — overlap would make first-match
    /// resolution order-dependent.
    pub fn handler(mut self, handler: Handler) -> Result<Self, ConfigError> {
        if handler.path_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix(handler.action_id));
        }
        if self.handlers.iter().any(|h| h.action_id == handler.action_id) {
            return Err(ConfigError::DuplicateAction(handler.action_id));
        }
        if self.handlers.iter().any(|h| {
            h.path_prefix.starts_with(&handler.path_prefix)
                || handler.path_prefix.starts_with(&h.path_prefix)
        }) {
            return Err(ConfigError::OverlappingPrefix {
                action: handler.action_id,
                prefix: handler.path_prefix,
            });
        }
        self.handlers.push(handler);
        Ok(self)
    }

    /// Register a formatter. Fails on a duplicate format id.
    pub fn formatter(mut self, formatter: Formatter) -> Result<Self, ConfigError> {
        if self
            .formatters
            .iter()
            .any(|f| f.format_id == formatter.format_id)
        {
            return Err(ConfigError::DuplicateFormat(formatter.format_id));
        }
        self.formatters.push(formatter);
        Ok(self)
    }

    /// Validate the fallback invariant and freeze the registry.
    pub fn build(self) -> Result<Registry, ConfigError> {
        let fallback = self
            .formatters
            .iter()
            .position(|f| f.format_id == FALLBACK_FORMAT)
            .ok_or_else(|| ConfigError::MissingFallback(FALLBACK_FORMAT.to_string()))?;
        Ok(Registry {
            handlers: self.handlers,
            formatters: self.formatters,
            fallback,
        })
    }
}

/// The stock hug surface: four actions, three formatters.
pub fn default_registry() -> Result<Registry, ConfigError> {
    use crate::handlers::{DirectHug, GroupHug};

    Registry::builder()
        .handler(Handler::new("hug", "/hug/", 2, "hug", Arc::new(DirectHug)))?
        .handler(Handler::new(
            "bearhug",
            "/bearhug/",
            2,
            "bearhug",
            Arc::new(DirectHug),
        ))?
        .handler(Handler::new(
            "hugattack",
            "/hugattack/",
            1,
            "hugattack",
            Arc::new(DirectHug),
        ))?
        .handler(Handler::new(
            "grouphug",
            "/grouphug/",
            2,
            "grouphug",
            Arc::new(GroupHug),
        ))?
        .formatter(Formatter::new("html", "text/html", FormatKind::Html))?
        .formatter(Formatter::new("text", "text/plain", FormatKind::Text))?
        .formatter(Formatter::new(
            "json",
            "application/json",
            FormatKind::Json,
        ))?
        .build()
}
