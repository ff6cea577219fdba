use crate::dispatcher::HugResponse;
use may_minihttp::Response;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// `may_minihttp` wants `'static` header lines; the negotiated content types
/// are a closed set, so map them to static strings and only fall back to a
/// leaked allocation for anything else (same trick the upstream response
/// writer relies on for dynamic headers).
fn header_line(name: &str, value: &str) -> &'static str {
    match (name, value) {
        ("Content-Type", "text/html") => "Content-Type: text/html",
        ("Content-Type", "text/plain") => "Content-Type: text/plain",
        ("Content-Type", "application/json") => "Content-Type: application/json",
        _ => Box::leak(format!("{name}: {value}").into_boxed_str()),
    }
}

/// Write a finished dispatcher response onto the wire. Headers and body are
/// written exactly once.
pub fn write_response(res: &mut Response, response: HugResponse) {
    res.status_code(response.status as usize, status_reason(response.status));
    for (name, value) in &response.headers {
        res.header(header_line(name, value));
    }
    res.body_vec(response.body);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(200), "OK");
        assert_eq!(status_reason(400), "Bad Request");
        assert_eq!(status_reason(404), "Not Found");
        assert_eq!(status_reason(405), "Method Not Allowed");
        assert_eq!(status_reason(500), "Internal Server Error");
    }

    #[test]
    fn test_static_header_lines() {
        assert_eq!(
            header_line("Content-Type", "application/json"),
            "Content-Type: application/json"
        );
        assert_eq!(header_line("X-Custom", "v"), "X-Custom: v");
    }
}
