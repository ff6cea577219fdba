//! # Router Module
//!
//! Path-prefix route resolution and name extraction.
//!
//! Routes here are literal prefixes (`/hug/`, `/grouphug/`), not patterns:
//! the registry guarantees at construction time that no prefix is a string
//! prefix of another, so first-registered-match resolution is deterministic
//! and no regex machinery is needed. Everything after the matched prefix is
//! an ordered list of raw name segments; hitting the bare prefix yields a
//! single empty segment, which still counts toward the handler's minimum.

mod router;

pub use router::{extract_names, RouteMatch, Router};
