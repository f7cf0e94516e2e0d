//! CEP lookup gateway.
//!
//! Accepts `GET /?cep=<code>`, asks the upstream postal-code service for the
//! address and relays it as JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────┐
//!                        │               CEP GATEWAY                │
//!     Client Request     │  ┌─────────┐    ┌──────────┐             │
//!     ───────────────────┼─▶│  http   │───▶│  lookup  │─────────────┼───▶ ViaCEP
//!                        │  │ handler │    │ resolver │             │     /ws/{cep}/json/
//!     Client Response    │  │         │◀───│          │◀────────────┼────
//!     ◀──────────────────┼──│         │    └──────────┘             │
//!                        │  └─────────┘                             │
//!                        │  config · observability · lifecycle      │
//!                        └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use cep_gateway::config::load_or_default;
use cep_gateway::lifecycle::{signals, startup, Shutdown};
use cep_gateway::observability::logging;

#[derive(Parser)]
#[command(name = "cep-gateway", version)]
#[command(about = "HTTP gateway for Brazilian postal-code lookups", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; built-in defaults apply without one.
    #[arg(short, long, env = "CEP_GATEWAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    logging::init(&config.observability);

    tracing::info!("cep-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        config_file = ?cli.config,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    startup::run(config, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
