use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A product record held in the catalog.
///
/// # Monetary Values
///
/// `price` uses `rust_decimal::Decimal` so filtering and sorting compare exact
/// decimal amounts. On the wire it is a plain JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the store and never reused
    pub id: u64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub stock: u32,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Build a record from validated fields under the given identifier.
    ///
    /// An omitted description becomes empty.
    pub fn from_new(id: u64, fields: NewProduct) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            category: fields.category,
            stock: fields.stock,
            description: fields.description.unwrap_or_default(),
        }
    }

    /// Overwrite every field with `fields`, keeping the identifier.
    ///
    /// The current description survives when the replacement omits it.
    pub fn replace_with(&mut self, fields: NewProduct) {
        self.name = fields.name;
        self.price = fields.price;
        self.category = fields.category;
        self.stock = fields.stock;
        if let Some(description) = fields.description {
            self.description = description;
        }
    }
}

/// Validated, trimmed product fields ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub stock: u32,
    /// `None` when the payload omitted the description
    pub description: Option<String>,
}

/// Raw request body for create and replace operations.
///
/// Fields stay untyped so that validation can report every violated rule
/// at once instead of failing on the first type mismatch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub stock: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn fields(description: Option<&str>) -> NewProduct {
        NewProduct {
            name: "Desk Lamp".to_string(),
            price: Decimal::from_str("24.50").unwrap(),
            category: "Home".to_string(),
            stock: 12,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_price_serializes_as_number() {
        let product = Product::from_new(7, fields(None));
        let json = serde_json::to_value(&product).unwrap();

        assert!(json["price"].is_number());
        assert_eq!(json["price"].as_f64().unwrap(), 24.5);
        assert_eq!(json["description"], "");
    }

    #[test]
    fn test_replace_keeps_description_when_omitted() {
        let mut product = Product::from_new(1, fields(Some("Warm light")));
        product.replace_with(NewProduct {
            name: "Floor Lamp".to_string(),
            ..fields(None)
        });

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Floor Lamp");
        assert_eq!(product.description, "Warm light");
    }

    #[test]
    fn test_replace_overwrites_description_when_given() {
        let mut product = Product::from_new(1, fields(Some("Warm light")));
        product.replace_with(fields(Some("")));

        assert_eq!(product.description, "");
    }

    #[test]
    fn test_payload_null_fields_are_absent() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"name": null, "price": 3, "extra": true}"#).unwrap();

        assert!(payload.name.is_none());
        assert!(payload.price.is_some());
        assert!(payload.description.is_none());
    }
}
