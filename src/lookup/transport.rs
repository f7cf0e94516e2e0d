//! Outbound HTTP transport.
//!
//! # Responsibilities
//! - Send the single GET request to the upstream service
//! - Hand back an owned response body for the resolver to consume
//!
//! # Design Decisions
//! - The body is an owned value consumed by `read_all`, so it is released
//!   exactly once on every path (read, failed read, or early return)
//! - The upstream status code is logged but never acted on
//! - No timeout unless one is configured

use std::future::Future;
use std::time::Duration;

use url::Url;

use crate::config::UpstreamConfig;
use crate::lookup::error::{LookupError, LookupResult};

/// A way of issuing the upstream GET request.
pub trait Transport: Send + Sync + 'static {
    /// The response body handed back on a successful exchange of headers.
    type Body: UpstreamBody;

    /// Send a GET request to `url` and wait for the response headers.
    fn get(&self, url: Url) -> impl Future<Output = LookupResult<Self::Body>> + Send;
}

/// An upstream response body that has not been read yet.
pub trait UpstreamBody: Send {
    /// Read the remaining body to completion, consuming (and releasing) it.
    fn read_all(self) -> impl Future<Output = LookupResult<Vec<u8>>> + Send;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> LookupResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| LookupError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    type Body = HttpBody;

    async fn get(&self, url: Url) -> LookupResult<HttpBody> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Unreachable(e.to_string()))?;

        tracing::debug!(
            status = %response.status(),
            url = %response.url(),
            "Upstream responded"
        );

        Ok(HttpBody { response })
    }
}

/// Body of a `reqwest` response.
#[derive(Debug)]
pub struct HttpBody {
    response: reqwest::Response,
}

impl UpstreamBody for HttpBody {
    async fn read_all(self) -> LookupResult<Vec<u8>> {
        let bytes = self
            .response
            .bytes()
            .await
            .map_err(|e| LookupError::BodyRead(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
