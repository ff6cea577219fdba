use super::Behavior;
use crate::dispatcher::RequestContext;

/// Pass-through behavior for the plain hug variants (hug, bearhug,
/// hugattack): names and template family are used exactly as routed.
pub struct DirectHug;

impl Behavior for DirectHug {
    fn prepare(&self, _ctx: &mut RequestContext) {}
}
