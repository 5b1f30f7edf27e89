use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Application-wide error types with appropriate HTTP status codes.
///
/// Every variant renders as a JSON body with at least `error` and `message`
/// fields. Validation failures additionally carry a `details` array listing
/// every rule the payload violated.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("API key missing from x-api-key header")]
    AuthenticationMissing,

    #[error("API key does not match the configured key")]
    AuthenticationInvalid,

    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("Malformed product identifier: {0}")]
    MalformedIdentifier(String),

    #[error("Product {0} not found")]
    NotFound(u64),

    #[error("Route {method} {path} not found")]
    RouteNotFound { method: String, path: String },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthenticationMissing => StatusCode::UNAUTHORIZED,
            AppError::AuthenticationInvalid => StatusCode::FORBIDDEN,
            AppError::ValidationFailed(_)
            | AppError::MalformedIdentifier(_)
            | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal(_) | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short title placed in the `error` field of the response body.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::AuthenticationMissing => "Authentication required",
            AppError::AuthenticationInvalid => "Invalid API key",
            AppError::ValidationFailed(_) => "Validation failed",
            AppError::MalformedIdentifier(_) => "Invalid product ID",
            AppError::NotFound(_) => "Product not found",
            AppError::RouteNotFound { .. } => "Not found",
            AppError::InvalidBody(_) => "Invalid request body",
            AppError::Internal(_) | AppError::ConfigError(_) => "Internal server error",
        }
    }

    /// Build the client-facing error body.
    pub fn to_body(&self) -> ErrorResponse {
        let message = match self {
            AppError::AuthenticationMissing => {
                "Provide an API key in the x-api-key header".to_string()
            }
            AppError::AuthenticationInvalid => "The provided API key is not valid".to_string(),
            AppError::ValidationFailed(_) => {
                "The product payload failed one or more validation rules".to_string()
            }
            AppError::MalformedIdentifier(raw) => {
                format!("Product ID must be a positive integer, got '{raw}'")
            }
            AppError::NotFound(id) => format!("No product exists with ID {id}"),
            AppError::RouteNotFound { method, path } => {
                format!("Route {method} {path} does not exist")
            }
            AppError::InvalidBody(reason) => reason.clone(),
            AppError::Internal(reason) => reason.clone(),
            AppError::ConfigError(_) => "Service configuration error".to_string(),
        };

        let details = match self {
            AppError::ValidationFailed(errors) => Some(errors.clone()),
            _ => None,
        };

        ErrorResponse {
            error: self.title().to_string(),
            message,
            details,
        }
    }
}

/// Error response body for API endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, axum::Json(self.to_body())).into_response()
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
