//! Catch-all responses: unknown routes and handler panics.

use std::any::Any;

use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Fallback for requests that match no route.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Turn a handler panic into a 500 carrying the panic message.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown internal failure".to_string()
    };

    AppError::Internal(message).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_panic_with_str() {
        let response = panic_response(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_panic_with_unknown_payload() {
        let response = panic_response(Box::new(17_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_route_not_found() {
        let err = route_not_found(Method::PATCH, Uri::from_static("/nowhere")).await;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_body().message.contains("PATCH /nowhere"));
    }
}
