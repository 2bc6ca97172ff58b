//! KCSC OpenAPI proxy.
//!
//! ```text
//!   Caller ──GET /codelist──────────────▶ ┌───────────────┐ ──GET /OpenApi/CodeList?key=…──▶ KCSC
//!          ──GET /codeviewer/{t}/{c}────▶ │  kcsc-proxy   │ ──GET /OpenApi/CodeViewer/…───▶
//!   Caller ◀──── status + JSON / {"raw"} ─└───────────────┘ ◀──────── status + body ────────
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use kcsc_proxy::config::load_config;
use kcsc_proxy::observability::init_logging;
use kcsc_proxy::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "kcsc-proxy")]
#[command(about = "Read-only proxy for the KCSC building-codes OpenAPI", long_about = None)]
struct Args {
    /// Optional TOML config file; environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen on 0.0.0.0:<PORT>, overriding config and the PORT variable.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.listener.bind_address = format!("0.0.0.0:{}", port);
    }

    init_logging(&config.observability.log_level);

    tracing::info!("kcsc-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout_secs,
        auth_enabled = config.auth.is_enabled(),
        "Configuration loaded"
    );
    if config.upstream.api_key.is_empty() {
        tracing::warn!("KCSC_OPENAPI_KEY is not set; /codelist and /codeviewer will answer 500");
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
