//! API key guard for the mutating product endpoints.
//!
//! The guard reads the `x-api-key` header and compares it against the
//! configured shared secret in constant time:
//!
//! | Header                  | Outcome                      |
//! |-------------------------|------------------------------|
//! | absent                  | 401 `Authentication required` |
//! | present, not matching   | 403 `Invalid API key`        |
//! | present, matching       | request passes through       |
//!
//! The guard is attached with `Router::route_layer` to `POST`, `PUT` and
//! `DELETE` only, so reads and unmatched routes never see it.
//!
//! ```bash
//! curl -X DELETE -H "x-api-key: your-secret-api-key" http://localhost:3000/api/products/3
//! ```

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use subtle::ConstantTimeEq;
use tower::{Layer, Service};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::metrics;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// API key authentication layer.
#[derive(Clone)]
pub struct ApiKeyAuth {
    expected_key: Arc<str>,
}

impl ApiKeyAuth {
    /// Guard requests with the given shared secret.
    pub fn new(api_key: impl Into<Arc<str>>) -> Self {
        Self {
            expected_key: api_key.into(),
        }
    }

    /// Decide whether a request carrying `provided` may proceed.
    pub fn check(&self, provided: Option<&[u8]>) -> Result<(), AppError> {
        match provided {
            None => Err(AppError::AuthenticationMissing),
            Some(key) if constant_time_eq(key, self.expected_key.as_bytes()) => Ok(()),
            Some(_) => Err(AppError::AuthenticationInvalid),
        }
    }
}

impl<S> Layer<S> for ApiKeyAuth {
    type Service = ApiKeyAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ApiKeyAuthService {
            inner,
            auth: self.clone(),
        }
    }
}

/// API key authentication service wrapper.
#[derive(Clone)]
pub struct ApiKeyAuthService<S> {
    inner: S,
    auth: ApiKeyAuth,
}

impl<S> Service<Request<Body>> for ApiKeyAuthService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let verdict = self.auth.check(
            req.headers()
                .get(API_KEY_HEADER)
                .map(|value| value.as_bytes()),
        );

        // Swap in the clone so the instance that saw poll_ready serves this call.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            match verdict {
                Ok(()) => {
                    debug!(path = %req.uri().path(), "API key accepted");
                    inner.call(req).await
                }
                Err(err) => {
                    warn!(
                        method = %req.method(),
                        path = %req.uri().path(),
                        reason = %err,
                        "Rejected unauthenticated request"
                    );
                    metrics::record_auth_failure(err.title());
                    Ok(err.into_response())
                }
            }
        })
    }
}

/// Compare two byte strings without short-circuiting on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
