//! Postal-code (CEP) lookup gateway library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod lookup;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use lookup::{AddressRecord, AddressResolver, LookupError, UpstreamResolver};
