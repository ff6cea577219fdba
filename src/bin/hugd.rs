use anyhow::Context;
use clap::Parser;
use hugd::dispatcher::Dispatcher;
use hugd::names::{builtin_greetings, LanguageFile, NameSource};
use hugd::registry::default_registry;
use hugd::server::{HttpServer, HugService};
use hugd::telemetry::{init_logging, LogFormat};
use hugd::templates::TemplateStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Content-negotiating hug dispenser.
#[derive(Parser)]
#[command(name = "hugd", version, about, long_about = None)]
struct Args {
    /// Address to bind.
    #[arg(long, env = "HUGD_ADDR", default_value = "0.0.0.0:8080")]
    addr: String,

    /// Directory holding the `{template}.{format}` template files.
    #[arg(long, env = "HUGD_TEMPLATES", default_value = "templates")]
    templates: PathBuf,

    /// Optional JSON dictionary of language -> greeting word. The built-in
    /// dictionary is used when omitted.
    #[arg(long, env = "HUGD_LANGUAGES")]
    languages: Option<PathBuf>,

    /// Log output format.
    #[arg(long, env = "HUGD_LOG_FORMAT", value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Default log level (overridden by RUST_LOG when set).
    #[arg(long, env = "HUGD_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, args.log_format)?;

    // Configuration errors are fatal here, before the listener exists.
    let registry = Arc::new(default_registry().context("invalid handler/formatter registry")?);
    let templates = Arc::new(
        TemplateStore::load(&args.templates)
            .with_context(|| format!("failed to load templates from {:?}", args.templates))?,
    );
    let names: Arc<dyn NameSource> = match &args.languages {
        Some(path) => Arc::new(
            LanguageFile::load(path)
                .with_context(|| format!("failed to load language dictionary {path:?}"))?,
        ),
        None => Arc::new(builtin_greetings()),
    };

    let dispatcher = Arc::new(Dispatcher::new(registry, templates, names));
    let service = HugService::new(dispatcher);

    info!(addr = %args.addr, "hugd listening");
    let handle = HttpServer(service)
        .start(&args.addr)
        .with_context(|| format!("failed to bind {}", args.addr))?;
    handle
        .join()
        .map_err(|e| anyhow::anyhow!("server failed: {e:?}"))?;
    Ok(())
}
