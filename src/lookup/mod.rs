//! Postal-code lookup subsystem.
//!
//! # Data Flow
//! ```text
//! code from the handler
//!     → resolver.rs (build <base_url>/<code>/json/)
//!     → transport.rs (GET, owned response body)
//!     → types.rs (decode into AddressRecord)
//!     → AddressRecord or LookupError
//! ```
//!
//! # Design Decisions
//! - One request per lookup: no retries, no cache
//! - Failure kinds are distinct here and collapsed at the HTTP boundary
//! - The transport is a trait so the body lifetime can be observed in tests

pub mod error;
pub mod resolver;
pub mod transport;
pub mod types;

pub use error::{LookupError, LookupResult};
pub use resolver::{AddressResolver, UpstreamResolver};
pub use transport::{HttpBody, HttpTransport, Transport, UpstreamBody};
pub use types::AddressRecord;

use crate::config::UpstreamConfig;

/// Build the production resolver from configuration.
pub fn resolver_from_config(config: &UpstreamConfig) -> LookupResult<UpstreamResolver> {
    let transport = HttpTransport::new(config)?;
    Ok(UpstreamResolver::new(transport, config.base_url.clone()))
}
