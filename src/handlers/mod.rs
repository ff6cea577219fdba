//! Action behaviors.
//!
//! Each route handler carries an `Arc<dyn Behavior>` that may rewrite the
//! per-request context (names, template family) before the generic render
//! path runs. Behaviors are pure context transforms: negotiation and
//! rendering stay in the dispatcher.

mod direct;
mod group;

pub use direct::DirectHug;
pub use group::GroupHug;

use crate::dispatcher::RequestContext;

/// A route-specific context transform, invoked after validation and before
/// negotiation/rendering.
pub trait Behavior: Send + Sync {
    fn prepare(&self, ctx: &mut RequestContext);
}
