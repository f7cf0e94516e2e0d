//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the upstream resolver and HTTP server from configuration
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, once the server is ready to answer

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::GatewayConfig;
use crate::http::HttpServer;
use crate::lookup::LookupError;

/// Errors that abort startup or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build upstream resolver: {0}")]
    Resolver(#[from] LookupError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the configured address.
pub async fn bind(config: &GatewayConfig) -> Result<TcpListener, StartupError> {
    let address = &config.listener.bind_address;
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    Ok(listener)
}

/// Serve on an already bound listener until `shutdown` fires.
pub async fn serve(
    config: GatewayConfig,
    listener: TcpListener,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    let server = HttpServer::from_config(config)?;
    server
        .run(listener, shutdown)
        .await
        .map_err(StartupError::Serve)
}

/// Full startup: bind the configured address, then serve.
pub async fn run(
    config: GatewayConfig,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    let listener = bind(&config).await?;
    let local_addr: Option<SocketAddr> = listener.local_addr().ok();

    tracing::info!(
        address = ?local_addr,
        upstream = %config.upstream.base_url,
        "Listening for connections"
    );

    serve(config, listener, shutdown).await
}
