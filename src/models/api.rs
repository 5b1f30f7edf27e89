use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Product;

/// Single-product response envelope.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Product,
}

impl ProductResponse {
    /// Plain lookup result.
    pub fn found(product: Product) -> Self {
        Self {
            success: true,
            message: None,
            data: product,
        }
    }

    /// Result of a mutation, with a human-readable confirmation.
    pub fn with_message(product: Product, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: product,
        }
    }
}

/// One page of a filtered, sorted listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Records on this page
    pub data: Vec<Product>,
    /// Number of records on this page
    pub count: usize,
    /// Number of records matching the filters across all pages
    pub total: usize,
    /// 1-based page number that was requested
    pub page: usize,
    /// `ceil(total / limit)`, zero when nothing matched
    pub total_pages: usize,
}

/// Listing response envelope (`GET /api/products`).
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub success: bool,
    #[serde(flatten)]
    pub page: ProductPage,
}

impl From<ProductPage> for ProductListResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            success: true,
            page,
        }
    }
}

/// Endpoint entry in the API directory.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub auth_required: bool,
    pub description: &'static str,
}

/// Response of `GET /`.
#[derive(Debug, Serialize)]
pub struct ApiIndex {
    pub success: bool,
    pub message: String,
    pub version: String,
    pub endpoints: Vec<EndpointInfo>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service health status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of products currently stored
    pub products: usize,
    /// Seconds since the state was created
    pub uptime_seconds: u64,
    /// Current timestamp
    pub timestamp: DateTime<Utc>,
}
