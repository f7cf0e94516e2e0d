//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file (--config / CEP_GATEWAY_CONFIG)
//!     → loader.rs (read & deserialize, defaults for missing keys)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - No file means the built-in defaults: port 8080, ViaCEP upstream
//! - Config is read once at startup; there is no reload
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{GatewayConfig, ListenerConfig, ObservabilityConfig, UpstreamConfig};
pub use validation::ValidationError;
