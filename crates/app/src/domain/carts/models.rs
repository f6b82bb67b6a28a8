//! Cart Models

use serde::{Deserialize, Serialize};

/// A named collection of purchasable line items.
///
/// The cart owns its items: deleting a cart removes every item whose
/// `cart_id` references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// System-assigned identity, immutable once assigned.
    pub id: i32,

    /// Display name, required and non-empty.
    pub name: String,

    /// Owned items in creation order.
    pub items: Vec<Item>,
}

/// A line entry within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// System-assigned identity.
    pub id: i32,

    /// The owning cart.
    pub cart_id: i32,

    /// Client-supplied external identifier.
    pub item_id: String,

    pub description: String,

    pub quantity: i32,

    /// Unit price in minor currency units.
    pub price: i64,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cart_serialization_round_trips() -> TestResult {
        let cart = Cart {
            id: 7,
            name: "groceries".to_string(),
            items: vec![Item {
                id: 1,
                cart_id: 7,
                item_id: "sku-123".to_string(),
                description: "a dozen eggs".to_string(),
                quantity: 2,
                price: 499,
            }],
        };

        let round_tripped: Cart = serde_json::from_value(serde_json::to_value(&cart)?)?;

        assert_eq!(round_tripped, cart);

        Ok(())
    }

    #[test]
    fn item_serialization_round_trips() -> TestResult {
        let item = Item {
            id: 42,
            cart_id: 7,
            item_id: "sku-9".to_string(),
            description: "plain flour".to_string(),
            quantity: 1,
            price: 250,
        };

        let round_tripped: Item = serde_json::from_value(serde_json::to_value(&item)?)?;

        assert_eq!(round_tripped, item);

        Ok(())
    }

    #[test]
    fn cart_serializes_all_declared_fields() -> TestResult {
        let cart = Cart {
            id: 3,
            name: "empty".to_string(),
            items: vec![],
        };

        let value = serde_json::to_value(&cart)?;

        assert_eq!(value["id"], 3);
        assert_eq!(value["name"], "empty");
        assert!(
            value["items"].as_array().is_some_and(Vec::is_empty),
            "items should serialize as an empty array"
        );

        Ok(())
    }
}
