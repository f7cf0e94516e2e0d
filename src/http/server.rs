//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the lookup handler and 404 fallback
//! - Wire up middleware (tracing, request ID)
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::lookup::{lookup_address, not_found};
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::lookup::{resolver_from_config, AddressResolver, LookupResult};

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a server answering lookups with `resolver`.
    pub fn new<R: AddressResolver>(config: GatewayConfig, resolver: R) -> Self {
        let router = build_router(Arc::new(resolver));
        Self { router, config }
    }

    /// Create a server backed by the upstream service named in `config`.
    pub fn from_config(config: GatewayConfig) -> LookupResult<Self> {
        let resolver = resolver_from_config(&config.upstream)?;

        tracing::info!(
            base_url = %resolver.base_url(),
            timeout_secs = ?config.upstream.timeout_secs,
            "Upstream resolver ready"
        );

        Ok(Self::new(config, resolver))
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
///
/// Only `/` is routed; every other path falls through to an empty 404.
pub fn build_router<R: AddressResolver>(resolver: Arc<R>) -> Router {
    Router::new()
        .route("/", any(lookup_address::<R>))
        .fallback(not_found)
        .with_state(resolver)
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
}
