//! Prometheus metrics for application observability.
//!
//! Metrics are exposed by a dedicated HTTP listener started from `main`
//! (default `0.0.0.0:9090`). Recording functions are no-ops until the
//! exporter is installed, so tests and library users can call them freely.
//!
//! # Available Metrics
//!
//! - `catalog_http_request_duration_seconds` (histogram; route, method, status)
//! - `catalog_product_mutations_total` (counter; operation)
//! - `catalog_auth_failures_total` (counter; reason)
//! - `catalog_products_stored` (gauge)

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{error, info};

/// Metric names as constants for consistency.
pub mod names {
    pub const REQUEST_DURATION_SECONDS: &str = "catalog_http_request_duration_seconds";
    pub const PRODUCT_MUTATIONS_TOTAL: &str = "catalog_product_mutations_total";
    pub const AUTH_FAILURES_TOTAL: &str = "catalog_auth_failures_total";
    pub const PRODUCTS_STORED: &str = "catalog_products_stored";
}

/// Install the Prometheus exporter and describe all metrics.
pub fn init_metrics(metrics_addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(metrics_addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {e}"))?;

    describe_histogram!(
        names::REQUEST_DURATION_SECONDS,
        "HTTP request duration in seconds"
    );
    describe_counter!(
        names::PRODUCT_MUTATIONS_TOTAL,
        "Successful product creations, replacements and deletions"
    );
    describe_counter!(
        names::AUTH_FAILURES_TOTAL,
        "Requests rejected by the API key guard"
    );
    describe_gauge!(names::PRODUCTS_STORED, "Products currently in the catalog");

    info!(addr = %metrics_addr, "Prometheus metrics endpoint started");
    Ok(())
}

/// Try to initialize metrics, logging any errors but not failing.
pub fn try_init_metrics(metrics_addr: SocketAddr) {
    if let Err(e) = init_metrics(metrics_addr) {
        error!(error = %e, "Failed to initialize metrics, continuing without metrics");
    }
}

/// Record HTTP request duration.
pub fn record_request_duration(route: &str, method: &str, status: u16, duration_secs: f64) {
    histogram!(names::REQUEST_DURATION_SECONDS, "route" => route.to_string(), "method" => method.to_string(), "status" => status.to_string())
        .record(duration_secs);
}

/// Record a successful mutation (`create`, `replace` or `delete`).
pub fn record_product_mutation(operation: &'static str) {
    counter!(names::PRODUCT_MUTATIONS_TOTAL, "operation" => operation).increment(1);
}

/// Record a request rejected by the API key guard.
pub fn record_auth_failure(reason: &'static str) {
    counter!(names::AUTH_FAILURES_TOTAL, "reason" => reason).increment(1);
}

/// Update the stored product gauge.
pub fn set_products_stored(count: usize) {
    gauge!(names::PRODUCTS_STORED).set(count as f64);
}

/// Middleware timing every request, labelled by matched route template.
///
/// Unmatched requests are grouped under `unmatched` to keep label
/// cardinality bounded.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let method = req.method().to_string();

    let response = next.run(req).await;

    record_request_duration(
        &route,
        &method,
        response.status().as_u16(),
        started.elapsed().as_secs_f64(),
    );
    response
}
