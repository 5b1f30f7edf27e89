//! Listing pipeline: search, category filter, price range, sort, paginate.
//!
//! Each stage narrows or reorders the output of the previous one, so the
//! order of the stages is part of the contract. All functions are pure and
//! operate on a borrowed snapshot of the catalog.

use std::cmp::Ordering;

use crate::models::{Product, ProductPage, ProductQuery, SortField, SortOrder};

/// Run `query` against `products` and return the requested page.
pub fn run_query(products: &[Product], query: &ProductQuery) -> ProductPage {
    let search = query.search.as_deref().map(str::to_lowercase);
    let category = query.category.as_deref().map(str::to_lowercase);

    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|p| search.as_deref().is_none_or(|term| matches_search(p, term)))
        .filter(|p| {
            category
                .as_deref()
                .is_none_or(|c| p.category.to_lowercase() == c)
        })
        .filter(|p| query.min_price.is_none_or(|min| p.price >= min))
        .filter(|p| query.max_price.is_none_or(|max| p.price <= max))
        .collect();

    if let Some(field) = query.sort_by {
        // Vec::sort_by is stable, so ties keep catalog order.
        matched.sort_by(|a, b| {
            let ordering = compare_by(field, a, b);
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    paginate(matched, query.page, query.limit)
}

/// Case-insensitive substring match on name or description.
///
/// `term` must already be lowercase.
fn matches_search(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
}

fn compare_by(field: SortField, a: &Product, b: &Product) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Price => a.price.cmp(&b.price),
        SortField::Category => a.category.cmp(&b.category),
        SortField::Stock => a.stock.cmp(&b.stock),
        SortField::Description => a.description.cmp(&b.description),
    }
}

/// Slice the matched records into one page.
///
/// Out-of-range pages come back empty rather than failing.
fn paginate(matched: Vec<&Product>, page: usize, limit: usize) -> ProductPage {
    let limit = limit.max(1);
    let total = matched.len();
    let start = page.saturating_sub(1).saturating_mul(limit);

    let data: Vec<Product> = matched
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    ProductPage {
        count: data.len(),
        data,
        total,
        page,
        total_pages: total.div_ceil(limit),
    }
}
