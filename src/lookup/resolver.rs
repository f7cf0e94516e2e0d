//! Postal-code resolution against the upstream service.
//!
//! # Responsibilities
//! - Substitute the code into `<base_url>/<code>/json/`
//! - Issue one GET through the transport and read the whole body
//! - Decode the body into an [`AddressRecord`]
//!
//! # Design Decisions
//! - The code is not validated here; the handler only guarantees it is non-empty
//! - No retries and no interpretation of upstream "not found" payloads

use std::future::Future;

use url::Url;

use crate::lookup::error::{LookupError, LookupResult};
use crate::lookup::transport::{HttpTransport, Transport, UpstreamBody};
use crate::lookup::types::AddressRecord;

/// Something that turns a postal code into an address record.
pub trait AddressResolver: Send + Sync + 'static {
    fn resolve(&self, code: &str) -> impl Future<Output = LookupResult<AddressRecord>> + Send;
}

/// Resolver that asks the upstream HTTP service.
#[derive(Debug, Clone)]
pub struct UpstreamResolver<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl<T: Transport> UpstreamResolver<T> {
    /// Create a resolver for the given base URL (e.g. `https://viacep.com.br/ws`).
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { transport, base_url }
    }

    /// The upstream URL for `code`, substituted verbatim.
    pub fn lookup_url(&self, code: &str) -> LookupResult<Url> {
        let raw = format!("{}/{}/json/", self.base_url, code);
        Url::parse(&raw).map_err(|source| LookupError::InvalidUrl {
            code: code.to_string(),
            source,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl<T: Transport> AddressResolver for UpstreamResolver<T> {
    async fn resolve(&self, code: &str) -> LookupResult<AddressRecord> {
        let url = self.lookup_url(code)?;
        tracing::debug!(code = %code, url = %url, "Resolving postal code");

        let body = self.transport.get(url).await?;
        let bytes = body.read_all().await?;

        Ok(AddressRecord::from_upstream_slice(&bytes)?)
    }
}
