//! # Dispatcher Module
//!
//! The request pipeline: resolve a handler by path prefix, validate the
//! extracted name segments, build the per-request context, run the handler's
//! behavior, negotiate a formatter, and render.
//!
//! ## Request Flow
//!
//! 1. Method check — the surface is GET-only, anything else is a 405.
//! 2. Router resolves the path prefix to a handler; no match is a 404.
//! 3. Segment count below the handler's minimum is a 400 with a fixed body.
//! 4. The handler behavior may rewrite names and the template family.
//! 5. Negotiation picks a formatter, the template store renders, and the
//!    JSON formatter wraps the text render in a `{"message": …}` envelope.
//!
//! ## Error Handling
//!
//! `handle` is infallible at the boundary: every [`DispatchError`] is
//! converted to a fixed-body response. A render failure is a 500 for that
//! request only — the process keeps serving.
//!
//! [`DispatchError`]: crate::error::DispatchError

mod core;

pub use core::{Dispatcher, HeaderVec, HugResponse, HugView, JsonEnvelope, RequestContext};
