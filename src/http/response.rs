//! Response mapping for lookup failures.
//!
//! # Responsibilities
//! - Map handler outcomes to HTTP status codes
//! - Keep error detail out of response bodies
//!
//! # Design Decisions
//! - Every lookup failure is a 500, whatever went wrong upstream
//! - Error bodies are always empty; the reason only goes to the log

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::lookup::LookupError;

/// Failure of a lookup request, as seen by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable `cep` query parameter.
    #[error("missing or empty `cep` query parameter")]
    MissingCode,

    /// The resolver failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingCode => StatusCode::BAD_REQUEST,
            ApiError::Lookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MissingCode => tracing::debug!("Rejected lookup without postal code"),
            ApiError::Lookup(e) => tracing::warn!(kind = e.kind(), error = %e, "Lookup failed"),
        }
        self.status_code().into_response()
    }
}
