use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, ProductPayload};

/// Validate a create/replace payload.
///
/// Rules:
/// - `name`: required string, non-empty after trimming
/// - `price`: required number, `>= 0`, representable as a decimal
/// - `category`: required string, non-empty after trimming
/// - `stock`: required integer, `>= 0`, at most `u32::MAX`
/// - `description`: optional; only string values are taken
///
/// On success the text fields come back trimmed. On failure every violated
/// rule is reported, in field order.
pub fn validate_product(payload: &ProductPayload) -> Result<NewProduct, Vec<String>> {
    let mut errors = Vec::new();

    let name = collect(required_text(payload.name.as_ref(), "Name"), &mut errors);
    let price = collect(price(payload.price.as_ref()), &mut errors);
    let category = collect(
        required_text(payload.category.as_ref(), "Category"),
        &mut errors,
    );
    let stock = collect(stock(payload.stock.as_ref()), &mut errors);

    let description = match &payload.description {
        Some(Value::String(text)) => Some(text.trim().to_string()),
        _ => None,
    };

    match (name, price, category, stock) {
        (Some(name), Some(price), Some(category), Some(stock)) if errors.is_empty() => {
            Ok(NewProduct {
                name,
                price,
                category,
                stock,
                description,
            })
        }
        _ => Err(errors),
    }
}

/// Parse a product identifier taken from the request path.
pub fn parse_product_id(raw: &str) -> AppResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| AppError::MalformedIdentifier(raw.to_string()))
}

fn collect<T>(result: Result<T, String>, errors: &mut Vec<String>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}

fn required_text(value: Option<&Value>, field: &str) -> Result<String, String> {
    match value {
        None => Err(format!("{field} is required")),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Err(format!("{field} cannot be empty"))
            } else {
                Ok(trimmed.to_string())
            }
        }
        Some(_) => Err(format!("{field} must be a string")),
    }
}

fn price(value: Option<&Value>) -> Result<Decimal, String> {
    let number = match value {
        None => return Err("Price is required".to_string()),
        Some(Value::Number(n)) => n,
        Some(_) => return Err("Price must be a number".to_string()),
    };

    let price = if let Some(i) = number.as_i64() {
        Decimal::from(i)
    } else if let Some(u) = number.as_u64() {
        Decimal::from(u)
    } else {
        number
            .as_f64()
            .and_then(Decimal::from_f64)
            .ok_or_else(|| "Price is outside the supported range".to_string())?
    };

    if price < Decimal::ZERO {
        return Err("Price must be a non-negative number".to_string());
    }

    Ok(price.normalize())
}

fn stock(value: Option<&Value>) -> Result<u32, String> {
    let number = match value {
        None => return Err("Stock is required".to_string()),
        Some(Value::Number(n)) => n,
        Some(_) => return Err("Stock must be an integer".to_string()),
    };

    if let Some(u) = number.as_u64() {
        return u32::try_from(u).map_err(|_| format!("Stock cannot exceed {}", u32::MAX));
    }
    if number.as_i64().is_some() {
        return Err("Stock must be a non-negative integer".to_string());
    }

    match number.as_f64() {
        Some(f) if f.fract() != 0.0 => Err("Stock must be an integer".to_string()),
        Some(f) if f < 0.0 => Err("Stock must be a non-negative integer".to_string()),
        Some(f) if f <= f64::from(u32::MAX) => Ok(f as u32),
        _ => Err(format!("Stock cannot exceed {}", u32::MAX)),
    }
}
