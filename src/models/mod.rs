mod api;
mod product;
mod query;

pub use api::{
    ApiIndex, EndpointInfo, HealthResponse, ProductListResponse, ProductPage, ProductResponse,
};
pub use product::{NewProduct, Product, ProductPayload};
pub use query::{DEFAULT_LIMIT, DEFAULT_PAGE, ListParams, ProductQuery, SortField, SortOrder};
