use http::Method;
use may_minihttp::Request;
use std::collections::HashMap;
use tracing::debug;

/// Parsed HTTP request data handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedRequest {
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// HTTP headers, keys lowercased.
    pub headers: HashMap<String, String>,
    /// Query string parameters, keys kept as sent (the `Accept` override is
    /// matched case-sensitively).
    pub query_params: HashMap<String, String>,
}

/// Parse query string parameters from a URL path.
///
/// Everything after `?` is percent-decoded via `url::form_urlencoded`.
#[must_use]
pub fn parse_query_params(path: &str) -> HashMap<String, String> {
    match path.find('?') {
        Some(pos) => url::form_urlencoded::parse(path[pos + 1..].as_bytes())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        None => HashMap::new(),
    }
}

/// Extract method, path, headers, and query parameters from a raw
/// `may_minihttp` request. The surface is GET-only, so the body is never
/// read.
#[must_use]
pub fn parse_request(req: &Request) -> ParsedRequest {
    let method = req.method().parse::<Method>().unwrap_or_default();
    let raw_path = req.path().to_string();
    let path = raw_path.split('?').next().unwrap_or("/").to_string();

    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .map(|h| {
            (
                h.name.to_ascii_lowercase(),
                String::from_utf8_lossy(h.value).to_string(),
            )
        })
        .collect();

    let query_params = parse_query_params(&raw_path);

    debug!(
        method = %method,
        path = %path,
        header_count = headers.len(),
        query_count = query_params.len(),
        "HTTP request parsed"
    );

    ParsedRequest {
        method,
        path,
        headers,
        query_params,
    }
}
