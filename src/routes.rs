//! Application routing configuration with middleware stack.
//!
//! # Middleware Stack (outermost first)
//!
//! ```text
//! Request
//!    │
//!    ▼
//! ┌──────────────────┐
//! │     Metrics      │ ← request duration per route template
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │   Request ID     │ ← Adds X-Request-Id header
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │     Tracing      │ ← HTTP request/response logging
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │      CORS        │ ← Cross-origin headers
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │   Catch Panic    │ ← 500 with the panic message
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │   Body Limit     │ ← MAX_REQUEST_BODY_SIZE
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │  API Key Guard   │ ← POST/PUT/DELETE only: 401 missing, 403 invalid
//! └────────┬─────────┘
//!          ▼
//!      Handler
//! ```
//!
//! Requests matching no route, or a known path with an unsupported method,
//! get a JSON 404 from the fallback handler.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post, put};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::handlers;
use crate::metrics::track_metrics;
use crate::middleware::{ApiKeyAuth, request_id};
use crate::state::AppState;

/// Build the application router with all routes and middleware configured.
pub fn build_router(state: AppState) -> Router {
    let config = &state.config;

    // Reads are open; mutations sit behind the API key guard.
    let public = Router::new()
        .route("/", get(handlers::api_index))
        .route("/health", get(handlers::health_check))
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/{id}", get(handlers::get_product));

    let protected = Router::new()
        .route("/api/products", post(handlers::create_product))
        .route(
            "/api/products/{id}",
            put(handlers::replace_product).delete(handlers::delete_product),
        )
        .route_layer(ApiKeyAuth::new(config.api_key.as_str()));

    let app = public
        .merge(protected)
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::route_not_found);

    apply_middleware(app, config).with_state(state)
}

/// Wrap a router in the shared middleware stack.
fn apply_middleware(router: Router<AppState>, config: &Config) -> Router<AppState> {
    info!(
        max_body_kb = config.max_request_body_size / 1024,
        "Request body size limit configured"
    );

    router
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(build_cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(track_metrics))
}

/// Build CORS layer from configuration.
///
/// `*` anywhere in the list allows any origin.
fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_any = allowed_origins.iter().any(|o| o == "*");

    if allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
