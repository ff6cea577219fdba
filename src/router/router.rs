use crate::registry::{Handler, Registry};
use std::sync::Arc;

/// A matched route: the handler plus the raw name segments extracted from the
/// path suffix.
#[derive(Clone)]
pub struct RouteMatch {
    pub handler: Handler,
    pub names: Vec<String>,
}

/// Router matching request paths against the registry's handler prefixes.
#[derive(Clone)]
pub struct Router {
    registry: Arc<Registry>,
}

impl Router {
    #[must_use]
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Resolve a path to its handler by exact prefix match and extract the
    /// name segments. `None` means no handler owns the path (a 404 outcome,
    /// distinct from segment validation).
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let handler = self
            .registry
            .handlers()
            .iter()
            .find(|h| path.starts_with(&h.path_prefix))?;
        Some(RouteMatch {
            handler: handler.clone(),
            names: extract_names(path, &handler.path_prefix),
        })
    }
}

/// Strip `prefix` from `path` and split the remainder on `/`.
///
/// An empty remainder yields one empty-string segment (count 1, not 0): a
/// caller hitting the bare prefix still produces a segment, and that segment
/// counts toward the handler's `min_segments`.
#[must_use]
pub fn extract_names(path: &str, prefix: &str) -> Vec<String> {
    let rest = path.strip_prefix(prefix).unwrap_or(path);
    rest.split('/').map(str::to_string).collect()
}
