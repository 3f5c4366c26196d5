//! bidrag-dokument - journal routing daemon
//!
//! Routes journal requests to bidrag-dokument-journalpost or
//! bidrag-dokument-arkiv depending on the source-system tag of the
//! identifier, and merges case journals from both.
//!
//! Usage:
//!   bidrag-dokument [config.toml]
//!
//! Without a config file the defaults apply (port 8080, backends on
//! localhost). `JOURNALPOST_URL`, `BIDRAG_ARKIV_URL` and `PORT` override
//! both.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dokument_api::{create_router, AppState};
use dokument_client::JournalClient;
use dokument_consumer::{ArkivConsumer, JournalpostConsumer, LoggingBackend};
use dokument_gateway::JournalpostService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{BackendConfig, Config, LogFormat};

const DEFAULT_FILTER: &str =
    "bidrag_dokument=info,dokument_api=info,dokument_consumer=info,dokument_gateway=info,tower_http=info";

/// Parsed command-line arguments
struct Args {
    /// Server config file (TOML)
    config_path: Option<String>,
}

fn parse_args() -> Args {
    let mut result = Args { config_path: None };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", arg);
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"bidrag-dokument - journal routing daemon

Usage: bidrag-dokument [OPTIONS] [config.toml]

Options:
  -h, --help    Print this help message

Environment:
  JOURNALPOST_URL    Base URL of bidrag-dokument-journalpost
  BIDRAG_ARKIV_URL   Base URL of bidrag-dokument-arkiv
  PORT               Port to listen on
  RUST_LOG           Log filter (default: {DEFAULT_FILTER})
"#
    );
}

fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn client_for(name: &str, backend: &BackendConfig) -> anyhow::Result<JournalClient> {
    JournalClient::with_config(&backend.url, backend.timeout(), backend.connect_timeout())
        .with_context(|| format!("Invalid {} url '{}'", name, backend.url))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args();

    let config = match args.config_path {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_env_overrides()?;

    init_logging(config.logging.format);

    tracing::info!("Starting bidrag-dokument");
    match args.config_path {
        Some(ref path) => tracing::info!("Loaded config from: {}", path),
        None => tracing::info!("No config file provided, using defaults"),
    }

    let journalpost = JournalpostConsumer::new(client_for("journalpost", &config.journalpost)?);
    let arkiv = ArkivConsumer::new(client_for("arkiv", &config.arkiv)?);
    tracing::info!(
        journalpost = %config.journalpost.url,
        arkiv = %config.arkiv.url,
        "Journal backends configured"
    );

    let service = JournalpostService::new(
        Arc::new(LoggingBackend::new(journalpost)),
        Arc::new(LoggingBackend::new(arkiv)),
    );

    // Create the router
    let app = create_router(AppState::new(service));

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on http://{}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
