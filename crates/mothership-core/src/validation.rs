//! # Validation Module
//!
//! Input validation for menu data and host configuration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront (TypeScript)                                      │
//! │  └── Steppers never go below 1, ids come from the menu                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Host (mothership-cart)                                       │
//! │  ├── Request deserialization                                           │
//! │  └── THIS MODULE: menu and config checks                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart (mothership-core::cart)                                 │
//! │  └── InvalidQuantity / UnknownItem preconditions                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mothership_core::validation::{validate_item_id, validate_minimum_meals};
//!
//! assert!(validate_item_id("chicken-bowl").is_ok());
//! assert!(validate_minimum_meals(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_ID_LEN;

const MAX_ITEM_NAME_LEN: usize = 200;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item identifier.
///
/// Ids are keys into the menu index and are matched exactly, so they are
/// checked as given, never trimmed.
///
/// ## Rules
/// - Must not be empty or blank
/// - Only ASCII letters, digits, hyphens and underscores (no padding)
/// - At most 64 characters
pub fn validate_item_id(item_id: &str) -> ValidationResult<()> {
    if item_id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item_id".to_string(),
        });
    }

    if !item_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "item_id".to_string(),
            reason: "must contain only ASCII letters, numbers, hyphens, and underscores"
                .to_string(),
        });
    }

    // ASCII only from here, so bytes == characters.
    if item_id.len() > MAX_ITEM_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "item_id".to_string(),
            max: MAX_ITEM_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a menu item display name (non-empty, at most 200 characters).
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents. Zero is allowed (free sides, promos).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price_cents".to_string(),
        });
    }
    Ok(())
}

/// Validates the free-shipping threshold. Must be at least one meal.
pub fn validate_minimum_meals(minimum: i64) -> ValidationResult<()> {
    if minimum <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "minimum_meals".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("chicken-bowl").is_ok());
        assert!(validate_item_id("salmon_teriyaki_2").is_ok());

        assert!(matches!(
            validate_item_id("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_item_id(&"a".repeat(65)),
            Err(ValidationError::TooLong { max: 64, .. })
        ));
        assert!(matches!(
            validate_item_id("chicken bowl"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_item_id_rejects_padding() {
        for padded in [" salmon ", "salmon ", "\tsalmon", "salmon\n"] {
            assert!(
                matches!(
                    validate_item_id(padded),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "accepted {:?}",
                padded
            );
        }
    }

    #[test]
    fn test_validate_item_id_is_ascii_only() {
        // 40 characters, 80 bytes: a format error, not a length error
        assert!(matches!(
            validate_item_id(&"é".repeat(40)),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_item_id("café-bowl"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_item_id(&"a".repeat(64)).is_ok());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Chicken Burrito Bowl").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_item_name_counts_characters() {
        assert!(validate_item_name(&"é".repeat(200)).is_ok());
        assert!(matches!(
            validate_item_name(&"é".repeat(201)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
        assert!(validate_item_name("Crème Brûlée").is_ok());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1450).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_minimum_meals() {
        assert!(validate_minimum_meals(1).is_ok());
        assert!(validate_minimum_meals(5).is_ok());
        assert!(validate_minimum_meals(0).is_err());
        assert!(validate_minimum_meals(-3).is_err());
    }
}
