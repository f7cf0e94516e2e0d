//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID + trace layers)
//!     → request.rs (request ID, extract `cep`)
//!     → lookup.rs (resolve via the lookup subsystem)
//!     → response.rs (failures → status code, empty body)
//!     → Send to client
//! ```

pub mod lookup;
pub mod request;
pub mod response;
pub mod server;

pub use request::{postal_code, UuidRequestId, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{build_router, HttpServer};
