//! HTTP middleware for authentication and request correlation.
//!
//! ```text
//! Request → Request ID → Trace → ... → Auth (mutating routes only) → Handler
//!               ↓                          ↓
//!        X-Request-Id header        401 missing / 403 invalid
//! ```

pub mod auth;
pub mod request_id;

pub use auth::{API_KEY_HEADER, ApiKeyAuth};
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id};
