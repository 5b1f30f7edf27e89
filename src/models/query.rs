use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

/// Page number used when `page` is absent or not a positive integer.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when `limit` is absent or not a positive integer.
pub const DEFAULT_LIMIT: usize = 10;

/// Raw query string of `GET /api/products`.
///
/// Every value arrives as text; [`ListParams::into_query`] turns it into a
/// typed [`ProductQuery`], dropping anything that does not parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Collect parameters from decoded `key=value` pairs.
    ///
    /// The first occurrence of a key wins; unknown keys are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "search" => &mut params.search,
                "category" => &mut params.category,
                "minPrice" => &mut params.min_price,
                "maxPrice" => &mut params.max_price,
                "sortBy" => &mut params.sort_by,
                "order" => &mut params.order,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                other => {
                    debug!(param = other, "Ignoring unknown query parameter");
                    continue;
                }
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Convert raw parameters into a typed query.
    ///
    /// - empty `search`/`category` are ignored
    /// - non-numeric price bounds are ignored
    /// - unknown `sortBy` fields leave the order untouched
    /// - `page`/`limit` fall back to 1 and 10 unless they are positive integers
    pub fn into_query(self) -> ProductQuery {
        let sort_by = self.sort_by.as_deref().and_then(|raw| {
            let field = SortField::from_str(raw).ok();
            if field.is_none() {
                debug!(sort_by = raw, "Ignoring unknown sort field");
            }
            field
        });

        ProductQuery {
            search: non_empty(self.search),
            category: non_empty(self.category),
            min_price: self.min_price.as_deref().and_then(parse_decimal),
            max_price: self.max_price.as_deref().and_then(parse_decimal),
            sort_by,
            order: self
                .order
                .as_deref()
                .map(SortOrder::from_param)
                .unwrap_or_default(),
            page: parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// Product fields that listings can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Price,
    Category,
    Stock,
    Description,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "category" => Ok(Self::Category),
            "stock" => Ok(Self::Stock),
            "description" => Ok(Self::Description),
            other => Err(format!("unknown sort field '{other}'")),
        }
    }
}

/// Sort direction. Only the literal `desc` selects descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_param(raw: &str) -> Self {
        if raw == "desc" { Self::Desc } else { Self::Asc }
    }
}

/// Typed listing query consumed by the query engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort_by: Option<SortField>,
    pub order: SortOrder,
    /// 1-based page number
    pub page: usize,
    /// Page size, always at least 1
    pub limit: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            min_price: None,
            max_price: None,
            sort_by: None,
            order: SortOrder::Asc,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}
