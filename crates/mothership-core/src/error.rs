//! # Error Types
//!
//! Domain-specific error types for mothership-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mothership-core errors (this file)                                    │
//! │  ├── CartError        - Cart precondition violations                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  mothership-cart errors (app)                                          │
//! │  ├── ConfigError      - Bad environment / menu file                    │
//! │  └── ApiError         - What the storefront sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → ApiError → Storefront             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations report exactly two conditions of their own
//! (`InvalidQuantity`, `UnknownItem`). Neither is retried: there is no I/O
//! in this crate, so nothing could succeed on a second attempt.

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Errors raised by [`Cart`](crate::Cart) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Quantity passed to `add_item` was zero or negative.
    ///
    /// ## When This Occurs
    /// - A stepper sent `-1` instead of calling `set_quantity`
    /// - A form submitted an empty quantity that parsed as `0`
    #[error("Invalid quantity {quantity} for {item_id}: must be at least 1")]
    InvalidQuantity { item_id: String, quantity: i64 },

    /// `set_quantity` targeted a line that is not in the cart.
    ///
    /// ## When This Occurs
    /// The displayed cart and the real cart have drifted apart: the UI is
    /// showing an item that was never added (or was already removed).
    /// There is no price to attach, so the caller must use `add_item`.
    #[error("Item not in cart: {0}")]
    UnknownItem(String),

    /// The catalog has no entry for the requested item.
    #[error("Item not on the menu: {0}")]
    NotInCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two menu items with one id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CoreResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_messages() {
        let err = CartError::InvalidQuantity {
            item_id: "x".to_string(),
            quantity: -1,
        };
        assert_eq!(
            err.to_string(),
            "Invalid quantity -1 for x: must be at least 1"
        );

        let err = CartError::UnknownItem("unknown-id".to_string());
        assert_eq!(err.to_string(), "Item not in cart: unknown-id");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "item_id".to_string(),
        };
        assert_eq!(err.to_string(), "item_id is required");

        let err = ValidationError::MustNotBeNegative {
            field: "unit_price".to_string(),
        };
        assert_eq!(err.to_string(), "unit_price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_cart_error() {
        let validation_err = ValidationError::Required {
            field: "item_id".to_string(),
        };
        let cart_err: CartError = validation_err.into();
        assert!(matches!(cart_err, CartError::Validation(_)));
    }
}
