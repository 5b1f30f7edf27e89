//! Service directory and health endpoints.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use tracing::instrument;

use crate::models::{ApiIndex, EndpointInfo, HealthResponse};
use crate::state::AppState;

/// Routes served by this application, in the order they are listed at `GET /`.
pub const ENDPOINTS: [EndpointInfo; 7] = [
    EndpointInfo {
        method: "GET",
        path: "/",
        auth_required: false,
        description: "This endpoint directory",
    },
    EndpointInfo {
        method: "GET",
        path: "/health",
        auth_required: false,
        description: "Service health and product count",
    },
    EndpointInfo {
        method: "GET",
        path: "/api/products",
        auth_required: false,
        description: "List products (search, category, minPrice, maxPrice, sortBy, order, page, limit)",
    },
    EndpointInfo {
        method: "GET",
        path: "/api/products/{id}",
        auth_required: false,
        description: "Get a product by ID",
    },
    EndpointInfo {
        method: "POST",
        path: "/api/products",
        auth_required: true,
        description: "Create a product",
    },
    EndpointInfo {
        method: "PUT",
        path: "/api/products/{id}",
        auth_required: true,
        description: "Replace a product",
    },
    EndpointInfo {
        method: "DELETE",
        path: "/api/products/{id}",
        auth_required: true,
        description: "Delete a product",
    },
];

/// Endpoint directory.
#[instrument]
pub async fn api_index() -> Json<ApiIndex> {
    Json(ApiIndex {
        success: true,
        message: "Product Catalog API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.to_vec(),
    })
}

/// Health check endpoint.
///
/// # Response Body
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "products": 5,
///   "uptime_seconds": 42,
///   "timestamp": "2024-01-15T10:30:00Z"
/// }
/// ```
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        products: state.store.len().await,
        uptime_seconds: state.uptime_seconds(),
        timestamp: Utc::now(),
    })
}
