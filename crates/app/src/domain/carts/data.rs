//! Request payload parsing and validation.
//!
//! Payloads arrive as loosely-typed JSON and are validated field by field so
//! that each failure maps to a specific [`ValidationError`] kind with a
//! client-readable message. `quantity` and `price` are coerced the way the
//! service has always accepted them: a JSON integer, or a string holding one.

use serde_json::{Map, Value};

use crate::domain::carts::{errors::ValidationError, models::Item};

/// Data for creating a cart, or replacing one wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
    pub name: String,
    pub items: Vec<NewItem>,
}

/// Data for appending an item to a cart.
///
/// `cart_id` is taken from the request path, never from the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub item_id: String,
    pub description: String,
    pub quantity: i32,
    pub price: i64,
}

/// Partial update of an item. `quantity` must always be supplied and must be
/// strictly positive; the remaining fields keep their stored values when
/// absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdate {
    pub item_id: Option<String>,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: Option<i64>,
}

/// Exact-match item predicates, AND-combined.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemFilter {
    pub item_id: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<i64>,
}

impl ItemFilter {
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.item_id.as_ref().is_none_or(|v| *v == item.item_id)
            && self.quantity.is_none_or(|v| v == item.quantity)
            && self.price.is_none_or(|v| v == item.price)
    }
}

impl NewCart {
    /// Parse a cart payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the body is not a JSON object, when
    /// `name` is missing, empty or not a string, or when any entry of the
    /// optional `items` list fails [`NewItem::from_json`].
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let map = as_object(body)?;

        let name = require_string(map, "name")?;

        if name.is_empty() {
            return Err(ValidationError::InvalidAttribute(
                "name must not be empty".to_string(),
            ));
        }

        let items = match map.get("items") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .map(NewItem::from_json)
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(ValidationError::InvalidType(format!(
                    "items must be a list, got {}",
                    json_type(other)
                )));
            }
        };

        Ok(Self { name, items })
    }
}

impl NewItem {
    /// Parse an item payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a required field is missing or when
    /// `quantity` or `price` cannot be coerced to an integer.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let map = as_object(body)?;

        Ok(Self {
            item_id: require_string(map, "item_id")?,
            description: require_string(map, "description")?,
            quantity: require_quantity(map)?,
            price: require_int(map, "price")?,
        })
    }
}

impl ItemUpdate {
    /// Parse an item update payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `quantity` is missing, not
    /// integer-coercible or not strictly positive, or when an optional field
    /// is present with an unusable value.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let map = as_object(body)?;

        let quantity = require_quantity(map)?;

        if quantity <= 0 {
            return Err(ValidationError::InvalidAttribute(format!(
                "quantity must be greater than zero, got {quantity}"
            )));
        }

        Ok(Self {
            item_id: optional_string(map, "item_id")?,
            description: optional_string(map, "description")?,
            quantity,
            price: optional_int(map, "price")?,
        })
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or_else(|| {
        ValidationError::MalformedBody(format!("expected a JSON object, got {}", json_type(body)))
    })
}

fn require_string(map: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field.to_string())),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(ValidationError::InvalidType(format!(
            "{field} must be a string, got {}",
            json_type(other)
        ))),
    }
}

fn optional_string(map: &Map<String, Value>, field: &str) -> Result<Option<String>, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => require_string(map, field).map(Some),
    }
}

fn require_int(map: &Map<String, Value>, field: &str) -> Result<i64, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field.to_string())),
        Some(value) => coerce_int(value, field),
    }
}

fn optional_int(map: &Map<String, Value>, field: &str) -> Result<Option<i64>, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_int(value, field).map(Some),
    }
}

fn require_quantity(map: &Map<String, Value>) -> Result<i32, ValidationError> {
    let quantity = require_int(map, "quantity")?;

    i32::try_from(quantity).map_err(|_| {
        ValidationError::InvalidType(format!("quantity is out of range: {quantity}"))
    })
}

fn coerce_int(value: &Value, field: &str) -> Result<i64, ValidationError> {
    match value {
        Value::Number(number) => number.as_i64().ok_or_else(|| {
            ValidationError::InvalidType(format!("{field} must be a whole number, got {number}"))
        }),
        Value::String(text) => text.trim().parse().map_err(|_| {
            ValidationError::InvalidType(format!("{field} must be an integer, got '{text}'"))
        }),
        other => Err(ValidationError::InvalidType(format!(
            "{field} must be an integer, got {}",
            json_type(other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
