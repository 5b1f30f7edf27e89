//! Product CRUD endpoints.
//!
//! - `GET    /api/products`      - filtered, sorted, paginated listing
//! - `GET    /api/products/{id}` - single product
//! - `POST   /api/products`      - create (API key)
//! - `PUT    /api/products/{id}` - full replacement (API key)
//! - `DELETE /api/products/{id}` - delete (API key)

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::{info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::metrics;
use crate::models::{ListParams, ProductListResponse, ProductPayload, ProductResponse};
use crate::state::AppState;
use crate::validation::{parse_product_id, validate_product};

/// List products.
///
/// Query parameters: `search`, `category`, `minPrice`, `maxPrice`, `sortBy`,
/// `order`, `page`, `limit`. Unusable values are ignored, so this endpoint
/// always answers 200. When a key repeats, its first value is used.
#[instrument(skip(state, pairs))]
pub async fn list_products(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<ProductListResponse> {
    let params = match pairs {
        Ok(Query(pairs)) => ListParams::from_pairs(pairs),
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable query string, listing with defaults");
            ListParams::default()
        }
    };

    let query = params.into_query();
    let page = state.store.list(&query).await;

    Json(page.into())
}

/// Get a product by ID.
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ProductResponse>> {
    let id = read_id(raw_id)?;
    let product = state.store.get(id).await?;

    Ok(Json(ProductResponse::found(product)))
}

/// Create a product.
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let payload = read_payload(payload)?;
    let fields = validate_product(&payload).map_err(AppError::ValidationFailed)?;

    let product = state.store.create(fields).await?;
    info!(id = product.id, name = %product.name, "Product created");
    record_mutation(&state, "create").await;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse::with_message(
            product,
            "Product created successfully",
        )),
    ))
}

/// Replace every field of an existing product.
///
/// An omitted `description` keeps the current one.
#[instrument(skip(state, payload))]
pub async fn replace_product(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> AppResult<Json<ProductResponse>> {
    let id = read_id(raw_id)?;
    let payload = read_payload(payload)?;
    let fields = validate_product(&payload).map_err(AppError::ValidationFailed)?;

    let product = state.store.replace(id, fields).await?;
    info!(id, "Product replaced");
    record_mutation(&state, "replace").await;

    Ok(Json(ProductResponse::with_message(
        product,
        "Product updated successfully",
    )))
}

/// Delete a product, returning the removed record.
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ProductResponse>> {
    let id = read_id(raw_id)?;

    let product = state.store.delete(id).await?;
    info!(id, "Product deleted");
    record_mutation(&state, "delete").await;

    Ok(Json(ProductResponse::with_message(
        product,
        "Product deleted successfully",
    )))
}

fn read_id(raw_id: Result<Path<String>, PathRejection>) -> AppResult<u64> {
    match raw_id {
        Ok(Path(raw_id)) => parse_product_id(&raw_id),
        Err(rejection) => Err(AppError::MalformedIdentifier(rejection.body_text())),
    }
}

fn read_payload(payload: Result<Json<ProductPayload>, JsonRejection>) -> AppResult<ProductPayload> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| AppError::InvalidBody(rejection.body_text()))
}

async fn record_mutation(state: &AppState, operation: &'static str) {
    metrics::record_product_mutation(operation);
    metrics::set_products_stored(state.store.len().await);
}
