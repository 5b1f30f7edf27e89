//! Request ID propagation.
//!
//! Reuses a non-empty `x-request-id` sent by the client, otherwise generates
//! a UUIDv4. The ID is written back onto the request (so handlers and the
//! trace layer see it), stored as a [`RequestId`] extension, attached to a
//! tracing span around the rest of the stack, and echoed on the response.
//!
//! ```bash
//! curl -i -H "x-request-id: my-correlation-id" http://localhost:3000/api/products
//! ```

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Instrument, info_span};
use uuid::Uuid;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID as seen by handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Middleware function; install with `axum::middleware::from_fn(request_id)`.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = extract_or_generate(&req);
    let header = HeaderValue::from_str(&id).unwrap_or_else(|_| HeaderValue::from_static("unknown"));

    req.headers_mut().insert(REQUEST_ID_HEADER, header.clone());
    req.extensions_mut().insert(RequestId(id.clone()));

    let span = info_span!("request", request_id = %id);
    let mut response = next.run(req).instrument(span).await;

    response.headers_mut().insert(REQUEST_ID_HEADER, header);
    response
}

fn extract_or_generate<B>(req: &axum::http::Request<B>) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use axum::body::Body;

    use super::*;

    #[test]
    fn test_existing_request_id_is_kept() {
        let req = axum::http::Request::builder()
            .header(REQUEST_ID_HEADER, "existing-id-123")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_or_generate(&req), "existing-id-123");
    }

    #[test]
    fn test_empty_request_id_is_replaced() {
        let req = axum::http::Request::builder()
            .header(REQUEST_ID_HEADER, "")
            .body(Body::empty())
            .unwrap();

        assert!(Uuid::parse_str(&extract_or_generate(&req)).is_ok());
    }

    #[test]
    fn test_missing_request_id_is_generated() {
        let req = axum::http::Request::builder().body(Body::empty()).unwrap();
        assert!(Uuid::parse_str(&extract_or_generate(&req)).is_ok());
    }
}
