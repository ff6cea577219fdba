//! # hugd
//!
//! A tiny content-negotiating hug dispenser built on the `may` coroutine
//! runtime. Requests like `GET /hug/alice/bob` are resolved through a
//! declarative registry of route handlers and output formatters: the path
//! prefix picks the handler, the `Accept` signal (header, or an `Accept`
//! query-parameter override) picks the formatter, and a minijinja template
//! named `{template}.{format}` produces the body. The JSON formatter wraps
//! the text-mode render in a `{"message": …}` envelope.
//!
//! ## Architecture
//!
//! - **[`registry`]** — immutable handler/formatter tables, validated at
//!   startup ([`registry::default_registry`] wires the stock hug surface)
//! - **[`router`]** — path-prefix resolution and name-segment extraction
//! - **[`negotiate`]** — deterministic Accept-signal negotiation with an
//!   `html` fallback
//! - **[`handlers`]** — the per-action behaviors (comma-list formatting,
//!   template-family overrides)
//! - **[`dispatcher`]** — the request pipeline gluing the above together
//! - **[`templates`]** — cached minijinja template store
//! - **[`names`]** — name-list formatting and the language dictionary
//! - **[`server`]** — `may_minihttp` plumbing and server lifecycle
//! - **[`error`]** — config/render/dispatch error taxonomy
//! - **[`ids`]**, **[`telemetry`]** — request ids and logging setup
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use hugd::dispatcher::Dispatcher;
//! use hugd::names::builtin_greetings;
//! use hugd::registry::default_registry;
//! use hugd::server::{HttpServer, HugService};
//! use hugd::templates::TemplateStore;
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let registry = Arc::new(default_registry()?);
//! let templates = Arc::new(TemplateStore::load("templates")?);
//! let dispatcher = Arc::new(Dispatcher::new(
//!     registry,
//!     templates,
//!     Arc::new(builtin_greetings()),
//! ));
//! let handle = HttpServer(HugService::new(dispatcher)).start("0.0.0.0:8080")?;
//! handle.join().ok();
//! # Ok(())
//! # }
//! ```

pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod ids;
pub mod names;
pub mod negotiate;
pub mod registry;
pub mod router;
pub mod server;
pub mod telemetry;
pub mod templates;

pub use dispatcher::Dispatcher;
pub use error::{ConfigError, DispatchError, RenderError};
pub use registry::{default_registry, Registry};
