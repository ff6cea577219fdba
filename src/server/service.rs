use super::request::parse_request;
use super::response::write_response;
use crate::dispatcher::Dispatcher;
use crate::ids::RequestId;
use may_minihttp::{HttpService, Request, Response};
use std::io;
use std::sync::Arc;

/// `may_minihttp` service adapter: parse the raw request, adopt or mint a
/// request id, dispatch, write. One clone of this service serves each
/// connection coroutine; the dispatcher behind the `Arc` is read-only.
#[derive(Clone)]
pub struct HugService {
    dispatcher: Arc<Dispatcher>,
}

impl HugService {
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

impl HttpService for HugService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let parsed = parse_request(&req);
        let request_id =
            RequestId::from_header_or_new(parsed.headers.get("x-request-id").map(String::as_str));
        let response = self.dispatcher.handle(&parsed, request_id);
        write_response(res, response);
        Ok(())
    }
}
