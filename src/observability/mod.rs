//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, resolver, transport
//!     → tracing events (request ID in the TraceLayer span)
//!     → logging.rs subscriber (EnvFilter + fmt)
//!     → stdout
//! ```

pub mod logging;
