//! Interview relay entry point
//!
//! Resolves backend configuration, wires the real services into the router,
//! and serves until interrupted. `--test-backend` probes the model backend
//! and exits without serving.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;

use relay::config::BackendConfig;
use relay::services::problem_api::DEFAULT_PROBLEM_API_URL;
use relay::services::{LeetCodeApi, OllamaBackend};
use relay::state::SessionRegistry;
use relay::traits::ChatBackend;
use relay::web::{AppState, build_router};
use shared::logging;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "relay")]
#[command(about = "Backend relay for a mock coding-interview assistant")]
struct Args {
    /// Bind host for the HTTP server
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Bind port for the HTTP server
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Model backend endpoint (overrides OLLAMA_URL / OLLAMA_HOST)
    #[arg(long)]
    backend_url: Option<String>,

    /// Model name (overrides OLLAMA_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Problem-data API base URL
    #[arg(long, default_value = DEFAULT_PROBLEM_API_URL)]
    problem_api_url: String,

    /// Problem fetch timeout in seconds
    #[arg(long, default_value = "10")]
    fetch_timeout_secs: u64,

    /// Chat and summary round-trip timeout in seconds
    #[arg(long, default_value = "120")]
    chat_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Probe the model backend and exit without serving
    #[arg(long)]
    test_backend: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));

    let config = BackendConfig::global(args.backend_url.as_deref(), args.model.as_deref());
    logging::log_startup(&format!(
        "interview relay (backend: {}, model: {})",
        config.endpoint, config.model
    ));

    let backend = Arc::new(OllamaBackend::new(
        &config.endpoint,
        &config.model,
        Duration::from_secs(args.chat_timeout_secs),
    ));

    if args.test_backend {
        return match backend.probe().await {
            Ok(()) => {
                logging::log_success(&format!("Model backend reachable at {}", config.endpoint));
                Ok(())
            }
            Err(err) => {
                logging::log_error("Backend probe", &err);
                Err(err.into())
            }
        };
    }

    let state = AppState {
        registry: Arc::new(SessionRegistry::new()),
        backend,
        problem_api: Arc::new(LeetCodeApi::new(
            &args.problem_api_url,
            Duration::from_secs(args.fetch_timeout_secs),
        )),
    };
    let app = build_router(state);

    let bind_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address: {e}"))?;

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("🌐 Interview relay listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    logging::log_success("Interview relay stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown("Received Ctrl+C signal"),
        Err(err) => logging::log_error("Signal handling", &err),
    }
}
