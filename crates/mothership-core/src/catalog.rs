//! # Catalog Module
//!
//! The cart never decides prices. It asks a [`Catalog`] for the unit price
//! of an item id at the moment the item is first added.
//!
//! ```text
//!   Storefront tap "Add"  ──►  Catalog::unit_price("salmon")  ──►  $14.50
//!                                                                   │
//!                                       Cart::add_item("salmon", $14.50, 1)
//! ```
//!
//! [`Menu`] is the in-memory catalog used by the session host. Anything that
//! can answer "what does this id cost" can implement the trait instead.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::UnitPrice;
use crate::validation::{
    validate_item_id, validate_item_name, validate_price_cents, ValidationResult,
};

/// Item id → unit price lookup.
pub trait Catalog {
    /// Returns the current unit price, or `None` if the id is not offered.
    fn unit_price(&self, item_id: &str) -> Option<UnitPrice>;
}

/// One dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
}

impl MenuItem {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_item_id(&self.id)?;
        validate_item_name(&self.name)?;
        validate_price_cents(self.price_cents)
    }
}

/// An in-memory menu. Keeps declaration order for display.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
    index: HashMap<String, usize>,
}

impl Menu {
    /// Builds a menu, validating every item and rejecting duplicate ids.
    pub fn from_items(items: Vec<MenuItem>) -> ValidationResult<Self> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            item.validate()?;
            if index.insert(item.id.clone(), position).is_some() {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: item.id.clone(),
                });
            }
        }

        Ok(Menu { items, index })
    }

    pub fn get(&self, item_id: &str) -> Option<&MenuItem> {
        self.index.get(item_id).map(|&i| &self.items[i])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Catalog for Menu {
    fn unit_price(&self, item_id: &str) -> Option<UnitPrice> {
        // from_items already rejected negative prices
        self.get(item_id)
            .and_then(|item| UnitPrice::from_cents(item.price_cents).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price_cents: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Meal {}", id),
            price_cents,
        }
    }

    #[test]
    fn test_menu_lookup() {
        let menu = Menu::from_items(vec![item("chicken-bowl", 1200), item("salmon", 1450)])
            .unwrap();

        assert_eq!(menu.len(), 2);
        assert_eq!(menu.unit_price("salmon").map(|p| p.cents()), Some(1450));
        assert_eq!(menu.unit_price("tofu"), None);
        assert_eq!(menu.items()[0].id, "chicken-bowl");
    }

    #[test]
    fn test_menu_rejects_duplicates() {
        let err = Menu::from_items(vec![item("salmon", 1450), item("salmon", 1500)]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Duplicate {
                field: "id".to_string(),
                value: "salmon".to_string()
            }
        );
    }

    #[test]
    fn test_menu_rejects_padded_id() {
        // A padded id would be indexed as-is and never match a lookup.
        let err = Menu::from_items(vec![item("chicken-bowl", 1200), item(" salmon ", 1450)])
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFormat { ref field, .. } if field == "item_id"
        ));
    }

    #[test]
    fn test_menu_rejects_negative_price() {
        assert!(Menu::from_items(vec![item("salmon", -1)]).is_err());
    }

    #[test]
    fn test_menu_item_json_shape() {
        let json = r#"{"id":"salmon","name":"Salmon","priceCents":1450}"#;
        let parsed: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.price_cents, 1450);
    }
}
