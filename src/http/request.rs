//! Request handling helpers.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every inbound request
//! - Extract the postal code from the query string
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Only the first `cep` value counts; an empty first value is a missing one

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID in both directions.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Query parameter holding the postal code.
pub const POSTAL_CODE_PARAM: &str = "cep";

/// Generates UUID v4 request IDs for requests that arrive without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// The postal code in `query`, if present and non-empty.
pub fn postal_code(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == POSTAL_CODE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_code_present() {
        assert_eq!(postal_code(Some("cep=01001000")).as_deref(), Some("01001000"));
        assert_eq!(
            postal_code(Some("format=json&cep=01001-000")).as_deref(),
            Some("01001-000")
        );
    }

    #[test]
    fn test_postal_code_missing_or_empty() {
        assert_eq!(postal_code(None), None);
        assert_eq!(postal_code(Some("")), None);
        assert_eq!(postal_code(Some("zip=01001000")), None);
        assert_eq!(postal_code(Some("cep=")), None);
        assert_eq!(postal_code(Some("cep")), None);
    }

    #[test]
    fn test_first_value_wins() {
        assert_eq!(postal_code(Some("cep=111&cep=222")).as_deref(), Some("111"));
        assert_eq!(postal_code(Some("cep=&cep=222")), None);
    }

    #[test]
    fn test_postal_code_is_percent_decoded() {
        assert_eq!(postal_code(Some("cep=01001%2D000")).as_deref(), Some("01001-000"));
        assert_eq!(postal_code(Some("cep=a+b")).as_deref(), Some("a b"));
    }

    #[test]
    fn test_request_ids_are_unique() {
        let request = Request::new(());
        let mut maker = UuidRequestId;
        let a = maker.make_request_id(&request).unwrap();
        let b = maker.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());
        assert_eq!(a.header_value().len(), 36);
    }
}
