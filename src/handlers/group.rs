use super::Behavior;
use crate::dispatcher::RequestContext;
use crate::names::format_name_list;
use tracing::debug;

/// Group-hug behavior: both name segments are comma-lists and get formatted
/// as natural-language lists.
///
/// When the raw `from` segment names multiple senders, the template family is
/// forced back to the singular `hug` instead of `grouphug`. That asymmetry is
/// documented current behavior, pending product clarification — see the
/// pinning test in `tests/dispatcher_tests.rs` before changing it.
pub struct GroupHug;

impl Behavior for GroupHug {
    fn prepare(&self, ctx: &mut RequestContext) {
        if ctx.from.contains(',') {
            debug!(
                request_id = %ctx.request_id,
                "multiple senders, switching to the singular template family"
            );
            ctx.template_id = "hug".to_string();
        }
        ctx.to = format_name_list(&ctx.to);
        ctx.from = format_name_list(&ctx.from);
    }
}
