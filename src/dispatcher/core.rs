use crate::error::{DispatchError, RenderError};
use crate::ids::RequestId;
use crate::names::NameSource;
use crate::negotiate::{effective_accept, negotiate};
use crate::registry::{FormatKind, Formatter, Registry};
use crate::router::{RouteMatch, Router};
use crate::server::ParsedRequest;
use crate::templates::{template_name, TemplateStore};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Stack-allocated response header storage; responses here carry one or two
/// headers, so the inline capacity is never exceeded in practice.
pub type HeaderVec = SmallVec<[(String, String); 8]>;

/// Per-request mutable bundle of recipient/sender names and routing metadata.
///
/// Created after validation, handed to the matched handler's behavior (which
/// may rewrite `to`, `from`, and `template_id`), then consumed by the render
/// path. Discarded once the response is produced.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    /// Action id of the matched handler.
    pub action_id: String,
    pub to: String,
    pub from: String,
    /// Raw segments beyond the first two, for multi-recipient variants.
    pub extra_names: Vec<String>,
    /// Starts as the handler's template family; behaviors may override it.
    pub template_id: String,
    /// Greeting words from the language dictionary for this request's
    /// `language` query parameter.
    pub greetings: Vec<String>,
}

impl RequestContext {
    fn new(request_id: RequestId, route: &RouteMatch, greetings: Vec<String>) -> Self {
        let mut names = route.names.iter();
        let to = names.next().cloned().unwrap_or_default();
        let from = names.next().cloned().unwrap_or_default();
        let extra_names: Vec<String> = names.cloned().collect();
        Self {
            request_id,
            action_id: route.handler.action_id.clone(),
            to,
            from,
            extra_names,
            template_id: route.handler.template_id.clone(),
            greetings,
        }
    }
}

/// The data templates render against.
#[derive(Debug, Serialize)]
pub struct HugView {
    pub to: String,
    pub from: String,
    pub others: Vec<String>,
    /// First dictionary hit, `"hug"` when the lookup came back empty.
    pub greeting: String,
    pub greetings: Vec<String>,
}

impl From<&RequestContext> for HugView {
    fn from(ctx: &RequestContext) -> Self {
        let greeting = ctx
            .greetings
            .first()
            .cloned()
            .unwrap_or_else(|| "hug".to_string());
        Self {
            to: ctx.to.clone(),
            from: ctx.from.clone(),
            others: ctx.extra_names.clone(),
            greeting,
            greetings: ctx.greetings.clone(),
        }
    }
}

/// Envelope for the JSON formatter: the message is the text-mode render of
/// the same request.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub message: String,
}

/// Finished response: status, headers, body bytes. Written exactly once.
#[derive(Debug, Clone)]
pub struct HugResponse {
    pub status: u16,
    pub headers: HeaderVec,
    pub body: Vec<u8>,
}

impl HugResponse {
    #[must_use]
    pub fn new(status: u16, headers: HeaderVec, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// 200 response with the negotiated content type.
    #[must_use]
    pub fn ok(content_type: &str, body: Vec<u8>) -> Self {
        let mut headers = HeaderVec::new();
        headers.push(("Content-Type".to_string(), content_type.to_string()));
        Self::new(200, headers, body)
    }

    /// Fixed-body error outcome for a dispatch failure.
    #[must_use]
    pub fn from_error(err: &DispatchError) -> Self {
        let mut headers = HeaderVec::new();
        headers.push(("Content-Type".to_string(), "text/plain".to_string()));
        Self::new(err.status(), headers, err.body().as_bytes().to_vec())
    }

    /// Get a header by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Dispatcher wiring the router, registry, template store, and language
/// dictionary together. All fields are read-only after construction, so one
/// dispatcher is shared across serving coroutines.
#[derive(Clone)]
pub struct Dispatcher {
    router: Router,
    registry: Arc<Registry>,
    templates: Arc<TemplateStore>,
    names: Arc<dyn NameSource>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(
        registry: Arc<Registry>,
        templates: Arc<TemplateStore>,
        names: Arc<dyn NameSource>,
    ) -> Self {
        Self {
            router: Router::new(Arc::clone(&registry)),
            registry,
            templates,
            names,
        }
    }

    /// Process one parsed request into a finished response. Infallible at
    /// this boundary: dispatch errors become fixed-body outcomes, and render
    /// failures are contained to the offending request.
    #[must_use]
    pub fn handle(&self, req: &ParsedRequest, request_id: RequestId) -> HugResponse {
        let start = Instant::now();
        let response = match self.dispatch(req, request_id) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    error!(
                        request_id = %request_id,
                        path = %req.path,
                        error = %err,
                        "request failed in the render path"
                    );
                } else {
                    debug!(
                        request_id = %request_id,
                        path = %req.path,
                        error = %err,
                        "request rejected"
                    );
                }
                HugResponse::from_error(&err)
            }
        };
        info!(
            request_id = %request_id,
            method = %req.method,
            path = %req.path,
            status = response.status,
            latency_ms = start.elapsed().as_millis() as u64,
            "request complete"
        );
        response
    }

    fn dispatch(
        &self,
        req: &ParsedRequest,
        request_id: RequestId,
    ) -> Result<HugResponse, DispatchError> {
        if req.method != http::Method::GET {
            return Err(DispatchError::MethodNotAllowed(req.method.to_string()));
        }

        let route = self
            .router
            .resolve(&req.path)
            .ok_or_else(|| DispatchError::NotFound(req.path.clone()))?;

        if route.names.len() < route.handler.min_segments {
            return Err(DispatchError::TooFewSegments {
                action: route.handler.action_id.clone(),
                required: route.handler.min_segments,
                got: route.names.len(),
            });
        }

        // Only consult the dictionary when a language was asked for; an
        // unknown key comes back empty and the view falls back to "hug".
        let greetings = match req.query_params.get("language") {
            Some(lang) => self.names.lookup(Some(lang)),
            None => Vec::new(),
        };
        let mut ctx = RequestContext::new(request_id, &route, greetings);
        route.handler.behavior.prepare(&mut ctx);

        let formatter = negotiate(
            &self.registry,
            effective_accept(
                req.query_params.get("Accept").map(String::as_str),
                req.headers.get("accept").map(String::as_str),
            ),
        );
        debug!(
            request_id = %request_id,
            action = %ctx.action_id,
            template = %ctx.template_id,
            format = %formatter.format_id,
            "handler prepared, rendering"
        );

        let body = self.render(&ctx, formatter)?;
        Ok(HugResponse::ok(&formatter.content_type, body))
    }

    fn render(&self, ctx: &RequestContext, formatter: &Formatter) -> Result<Vec<u8>, RenderError> {
        let view = HugView::from(ctx);
        match formatter.kind {
            FormatKind::Html | FormatKind::Text => {
                let name = template_name(&ctx.template_id, &formatter.format_id);
                Ok(self.templates.render(&name, &view)?.into_bytes())
            }
            FormatKind::Json => {
                // The envelope wraps the text-mode render of the same request.
                let name = template_name(&ctx.template_id, "text");
                let message = self.templates.render(&name, &view)?;
                Ok(serde_json::to_vec(&JsonEnvelope { message })?)
            }
        }
    }
}
