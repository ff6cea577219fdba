#![allow(dead_code)]

use http::Method;
use hugd::dispatcher::Dispatcher;
use hugd::names::builtin_greetings;
use hugd::registry::default_registry;
use hugd::server::{parse_query_params, ParsedRequest};
use hugd::templates::TemplateStore;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;
use std::time::Duration;

/// Dispatcher over the repository's real `templates/` directory and the
/// built-in language dictionary.
pub fn test_dispatcher() -> Dispatcher {
    let registry = Arc::new(default_registry().unwrap());
    let templates = Arc::new(TemplateStore::load("templates").unwrap());
    Dispatcher::new(registry, templates, Arc::new(builtin_greetings()))
}

/// Build a GET request for `path` (query string allowed) with an optional
/// Accept header.
pub fn get(path: &str, accept: Option<&str>) -> ParsedRequest {
    let mut req = ParsedRequest {
        method: Method::GET,
        path: path.split('?').next().unwrap_or("/").to_string(),
        query_params: parse_query_params(path),
        ..Default::default()
    };
    if let Some(a) = accept {
        req.headers.insert("accept".to_string(), a.to_string());
    }
    req
}

/// Send a raw HTTP request and collect the full response text.
pub fn send_request(addr: &SocketAddr, req: &str) -> String {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(req.as_bytes()).unwrap();
    stream
        .set_read_timeout(Some(Duration::from_millis(200)))
        .unwrap();
    let mut buf = Vec::new();
    loop {
        let mut tmp = [0u8; 1024];
        match stream.read(&mut tmp) {
            Ok(0) => break,
            Ok(n) => buf.extend_from_slice(&tmp[..n]),
            Err(ref e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                break
            }
            Err(e) => panic!("read error: {e:?}"),
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Split a raw HTTP response into (status, lowercased headers, body).
pub fn parse_response(resp: &str) -> (u16, Vec<(String, String)>, String) {
    let mut parts = resp.splitn(2, "\r\n\r\n");
    let head = parts.next().unwrap_or("");
    let body = parts.next().unwrap_or("").to_string();
    let mut lines = head.lines();
    let status = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let headers = lines
        .filter_map(|l| {
            let (k, v) = l.split_once(':')?;
            Some((k.trim().to_ascii_lowercase(), v.trim().to_string()))
        })
        .collect();
    (status, headers, body)
}

pub fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k == &name.to_ascii_lowercase())
        .map(|(_, v)| v.as_str())
}
