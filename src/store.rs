//! In-memory product store.
//!
//! The store is an ordered `Vec<Product>` plus an identifier counter, shared
//! through an `Arc<RwLock<_>>` handle. Listings and lookups take the read
//! lock; each mutation runs to completion under the write lock, so at most
//! one writer touches the catalog at a time and every mutation is
//! all-or-nothing.
//!
//! Identifiers come from a monotonic counter that starts one past the highest
//! seeded identifier. Deleting a record never makes its identifier available
//! again.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product, ProductPage, ProductQuery};
use crate::query::run_query;

#[derive(Debug)]
struct Catalog {
    products: Vec<Product>,
    /// `None` once the identifier space is used up
    next_id: Option<u64>,
}

impl Catalog {
    fn new(products: Vec<Product>) -> Self {
        let next_id = match products.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { products, next_id }
    }

    fn position(&self, id: u64) -> AppResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(AppError::NotFound(id))
    }
}

/// Clonable handle to the shared catalog.
#[derive(Debug, Clone)]
pub struct ProductStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl ProductStore {
    /// Store holding the given records in the given order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Catalog::new(products))),
        }
    }

    /// Store with no records; the first identifier handed out is 1.
    pub fn empty() -> Self {
        Self::with_products(Vec::new())
    }

    /// Store holding the five demonstration records.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.catalog.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Run a listing query against the current records.
    pub async fn list(&self, query: &ProductQuery) -> ProductPage {
        let catalog = self.catalog.read().await;
        run_query(&catalog.products, query)
    }

    /// Look up a record by identifier.
    pub async fn get(&self, id: u64) -> AppResult<Product> {
        let catalog = self.catalog.read().await;
        let index = catalog.position(id)?;
        catalog
            .products
            .get(index)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    /// Append a new record under the next identifier.
    pub async fn create(&self, fields: NewProduct) -> AppResult<Product> {
        let mut catalog = self.catalog.write().await;

        let id = catalog.next_id.ok_or_else(|| {
            AppError::Internal("Product identifier space exhausted".to_string())
        })?;
        catalog.next_id = id.checked_add(1);

        let product = Product::from_new(id, fields);
        catalog.products.push(product.clone());
        debug!(id, total = catalog.products.len(), "Product appended");

        Ok(product)
    }

    /// Replace every field of an existing record.
    ///
    /// The description is kept when `fields` omits it.
    pub async fn replace(&self, id: u64, fields: NewProduct) -> AppResult<Product> {
        let mut catalog = self.catalog.write().await;
        let index = catalog.position(id)?;
        let product = catalog
            .products
            .get_mut(index)
            .ok_or(AppError::NotFound(id))?;

        product.replace_with(fields);
        Ok(product.clone())
    }

    /// Remove a record and return it.
    pub async fn delete(&self, id: u64) -> AppResult<Product> {
        let mut catalog = self.catalog.write().await;
        let index = catalog.position(id)?;
        let removed = catalog.products.remove(index);
        debug!(id, total = catalog.products.len(), "Product removed");
        Ok(removed)
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// The records present at process start.
pub fn seed_products() -> Vec<Product> {
    [
        (
            1,
            "Laptop",
            "999.99",
            "Electronics",
            50,
            "High-performance laptop with 16GB RAM and 512GB SSD",
        ),
        (
            2,
            "Smartphone",
            "699.99",
            "Electronics",
            100,
            "Latest model smartphone with 128GB storage",
        ),
        (
            3,
            "Coffee Maker",
            "89.99",
            "Appliances",
            30,
            "Programmable drip coffee maker with thermal carafe",
        ),
        (
            4,
            "Wireless Mouse",
            "29.99",
            "Electronics",
            200,
            "Ergonomic wireless mouse with USB receiver",
        ),
        (
            5,
            "Mechanical Keyboard",
            "79.99",
            "Electronics",
            75,
            "RGB backlit mechanical keyboard with blue switches",
        ),
    ]
    .into_iter()
    .map(|(id, name, price, category, stock, description)| Product {
        id,
        name: name.to_string(),
        price: Decimal::from_str(price).unwrap_or_default(),
        category: category.to_string(),
        stock,
        description: description.to_string(),
    })
    .collect()
}
