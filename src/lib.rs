//! # Product Catalog
//!
//! A small REST service over an in-memory product catalog, built with Axum:
//!
//! - **CRUD**: create, read, full replacement and deletion of products
//! - **Listing**: search, category and price filters, sorting, pagination
//! - **Validation**: every violated rule reported at once
//! - **Security**: shared-secret API key on mutating endpoints
//! - **Observability**: request IDs, structured logging, Prometheus metrics
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Axum HTTP Server                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Middleware (Metrics → Request ID → Trace → CORS → Panic)   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  API Key Guard (POST / PUT / DELETE)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Handlers (index, health, products)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Validation          │  Query engine                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ProductStore (Arc<RwLock<Vec<Product>>>)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use product_catalog::{AppState, Config, build_router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let addr = config.server_addr();
//!     let app = build_router(AppState::seeded(config));
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Security Configuration
//!
//! ```bash
//! API_KEY=your-secret-key cargo run
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod query;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;
pub mod validation;

// Re-exports for convenience
pub use config::Config;
pub use error::{AppError, AppResult};
pub use routes::build_router;
pub use state::AppState;
pub use store::ProductStore;
