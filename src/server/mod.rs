//! HTTP plumbing around `may_minihttp`: request parsing, response writing,
//! the [`HugService`] glue, and the server lifecycle wrapper.

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_query_params, parse_request, ParsedRequest};
pub use service::HugService;
