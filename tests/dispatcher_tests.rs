mod common;

use common::{get, test_dispatcher};
use hugd::dispatcher::JsonEnvelope;
use hugd::ids::RequestId;

fn body(resp: &hugd::dispatcher::HugResponse) -> String {
    String::from_utf8(resp.body.clone()).unwrap()
}

#[test]
fn test_too_few_segments_is_400_with_fixed_body() {
    let d = test_dispatcher();
    for path in ["/hug/alice", "/hug/", "/bearhug/bob", "/grouphug/a"] {
        let resp = d.handle(&get(path, None), RequestId::new());
        assert_eq!(resp.status, 400, "path {path}");
        assert_eq!(body(&resp), "400 Bad Request", "path {path}");
    }
}

#[test]
fn test_unknown_prefix_is_404_distinct_from_400() {
    let d = test_dispatcher();
    let resp = d.handle(&get("/tickle/alice/bob", None), RequestId::new());
    assert_eq!(resp.status, 404);
    assert_eq!(body(&resp), "404 Not Found");
}

#[test]
fn test_non_get_is_405() {
    let d = test_dispatcher();
    let mut req = get("/hug/alice/bob", None);
    req.method = http::Method::POST;
    let resp = d.handle(&req, RequestId::new());
    assert_eq!(resp.status, 405);
    assert_eq!(body(&resp), "405 Method Not Allowed");
}

#[test]
fn test_direct_hug_text() {
    let d = test_dispatcher();
    let resp = d.handle(&get("/hug/alice/bob", Some("text/plain")), RequestId::new());
    assert_eq!(resp.status, 200);
    assert_eq!(resp.get_header("content-type"), Some("text/plain"));
    assert_eq!(body(&resp), "bob sends alice a warm hug.");
}

#[test]
fn test_default_format_is_html() {
    let d = test_dispatcher();
    let resp = d.handle(&get("/hug/alice/bob", None), RequestId::new());
    assert_eq!(resp.get_header("content-type"), Some("text/html"));
    assert_eq!(body(&resp), "<p>bob sends alice a warm hug.</p>");
}

#[test]
fn test_bare_hugattack_prefix_serves_empty_target() {
    // One empty segment still satisfies min_segments = 1.
    let d = test_dispatcher();
    let resp = d.handle(&get("/hugattack/", Some("text/plain")), RequestId::new());
    assert_eq!(resp.status, 200);
    assert_eq!(body(&resp), " is buried under a flurry of hugs!");
}

#[test]
fn test_json_envelope_wraps_text_render() {
    let d = test_dispatcher();
    let resp = d.handle(
        &get("/hug/alice/bob", Some("application/json")),
        RequestId::new(),
    );
    assert_eq!(resp.status, 200);
    assert_eq!(resp.get_header("content-type"), Some("application/json"));
    let envelope: JsonEnvelope = serde_json::from_slice(&resp.body).unwrap();

    let text = d.handle(&get("/hug/alice/bob", Some("text/plain")), RequestId::new());
    assert_eq!(envelope.message, body(&text));
}

#[test]
fn test_accept_query_override_beats_header() {
    let d = test_dispatcher();
    let resp = d.handle(
        &get("/hug/alice/bob?Accept=application%2Fjson", Some("text/html")),
        RequestId::new(),
    );
    assert_eq!(resp.get_header("content-type"), Some("application/json"));
}

#[test]
fn test_identical_requests_are_byte_identical() {
    let d = test_dispatcher();
    let a = d.handle(&get("/grouphug/a,b/c", Some("text/plain")), RequestId::new());
    let b = d.handle(&get("/grouphug/a,b/c", Some("text/plain")), RequestId::new());
    assert_eq!(a.body, b.body);
    assert_eq!(a.status, b.status);
}

#[test]
fn test_grouphug_formats_both_name_lists() {
    let d = test_dispatcher();
    let resp = d.handle(&get("/grouphug/a,b,c/d", Some("text/plain")), RequestId::new());
    assert_eq!(body(&resp), "d pull a, b and c into a group hug.");
}

/// Documented current behavior, pending product clarification: multiple
/// comma-separated senders collapse the group hug to the singular template
/// family. Revisit deliberately, not by accident.
#[test]
fn test_grouphug_multiple_senders_forces_singular_family() {
    let d = test_dispatcher();
    let resp = d.handle(&get("/grouphug/A,B/C,D", Some("text/plain")), RequestId::new());
    assert_eq!(resp.status, 200);
    // The singular hug template renders the formatted lists.
    assert_eq!(body(&resp), "C and D sends A and B a warm hug.");
}

#[test]
fn test_language_lookup_feeds_greeting() {
    let d = test_dispatcher();
    let resp = d.handle(
        &get("/hug/alice/bob?language=de", Some("text/plain")),
        RequestId::new(),
    );
    assert_eq!(body(&resp), "bob sends alice a warm Umarmung.");

    // Unknown language falls back to the plain greeting.
    let resp = d.handle(
        &get("/hug/alice/bob?language=tlh", Some("text/plain")),
        RequestId::new(),
    );
    assert_eq!(body(&resp), "bob sends alice a warm hug.");
}

#[test]
fn test_missing_template_is_500_and_process_survives() {
    use hugd::dispatcher::Dispatcher;
    use hugd::names::builtin_greetings;
    use hugd::registry::default_registry;
    use hugd::templates::TemplateStore;
    use std::sync::Arc;

    // Store only knows the text family; the html fallback render must fail.
    let templates = TemplateStore::from_sources([(
        "hug.text".to_string(),
        "{{ from }} hugs {{ to }}".to_string(),
    )])
    .unwrap();
    let d = Dispatcher::new(
        Arc::new(default_registry().unwrap()),
        Arc::new(templates),
        Arc::new(builtin_greetings()),
    );

    let resp = d.handle(&get("/hug/alice/bob", None), RequestId::new());
    assert_eq!(resp.status, 500);
    assert_eq!(body(&resp), "500 Internal Server Error");

    // The same dispatcher keeps serving afterwards.
    let ok = d.handle(&get("/hug/alice/bob", Some("text/plain")), RequestId::new());
    assert_eq!(ok.status, 200);
    assert_eq!(body(&ok), "bob hugs alice");
}
