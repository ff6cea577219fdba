//! Content negotiation: select exactly one formatter for a request.
//!
//! The effective Accept signal is split on `,` into ordered candidate tokens
//! (earlier tokens win; no quality-value parsing). Each token is scanned
//! against the formatters in registration order and the first formatter whose
//! content type is a substring of the token is taken — substring containment
//! deliberately tolerates charset/quality suffixes like
//! `text/html; charset=utf-8` without a media-type parser. When nothing
//! matches, the registry's mandatory `html` fallback is returned.

use crate::registry::{Formatter, Registry};

/// Pick the formatter for the effective Accept signal. `None` (no header and
/// no override) goes straight to the fallback.
#[must_use]
pub fn negotiate<'a>(registry: &'a Registry, accept: Option<&str>) -> &'a Formatter {
    if let Some(signal) = accept {
        for token in signal.split(',') {
            for formatter in registry.formatters() {
                if token.contains(&formatter.content_type) {
                    return formatter;
                }
            }
        }
    }
    registry.fallback()
}

/// The effective Accept signal: an explicit `Accept` query-parameter override
/// beats the `accept` header. The override exists so clients that cannot set
/// headers can still force a format; it is equally authoritative, checked
/// first.
#[must_use]
pub fn effective_accept<'a>(
    query_override: Option<&'a str>,
    header: Option<&'a str>,
) -> Option<&'a str> {
    query_override.or(header)
}
