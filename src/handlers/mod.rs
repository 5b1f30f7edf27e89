mod fallback;
mod index;
mod products;

pub use fallback::{panic_response, route_not_found};
pub use index::{ENDPOINTS, api_index, health_check};
pub use products::{
    create_product, delete_product, get_product, list_products, replace_product,
};
