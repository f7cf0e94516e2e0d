use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{StatusCode, Uri},
    Json,
};

use crate::http::request::postal_code;
use crate::http::response::ApiError;
use crate::lookup::{AddressRecord, AddressResolver};

/// `/?cep=<code>`: resolve the code and relay the record as JSON.
pub async fn lookup_address<R: AddressResolver>(
    State(resolver): State<Arc<R>>,
    RawQuery(query): RawQuery,
) -> Result<Json<AddressRecord>, ApiError> {
    let code = postal_code(query.as_deref()).ok_or(ApiError::MissingCode)?;

    let record = resolver.resolve(&code).await?;
    tracing::debug!(code = %code, "Lookup succeeded");

    Ok(Json(record))
}

/// Anything but the root path.
pub async fn not_found(uri: Uri) -> StatusCode {
    tracing::debug!(path = %uri.path(), "No route matched");
    StatusCode::NOT_FOUND
}
