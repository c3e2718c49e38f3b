//! # API Error Type
//!
//! Unified error type for cart commands.
//!
//! ## Error Handling Strategy
//! ```text
//!  {"command":"update_cart_item", ...}
//!          │
//!          ▼
//!  command fn ── Result<T, ApiError>
//!          │
//!          ├── session never opened ──► ApiError::no_active_cart
//!          ├── CartError::UnknownItem ─► From<CartError> ──► UNKNOWN_ITEM
//!          └── Ok(CartResponse)
//!
//!  {"error":{"code":"UNKNOWN_ITEM","message":"Item not in cart: salmon"}}
//! ```

use mothership_core::CartError;
use serde::Serialize;

/// API error returned from cart commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NO_ACTIVE_CART",
///   "message": "No active cart for session: web-42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// `add_to_cart` / `update_cart_item` with a bad quantity
    InvalidQuantity,

    /// Quantity change for an item that is not in the cart
    UnknownItem,

    /// Item id is not on the menu
    NotInCatalog,

    /// Input validation failed
    ValidationError,

    /// Cart accessed for a session that was never opened (or was closed)
    NoActiveCart,

    /// Request line could not be parsed
    BadRequest,

    /// Internal error (e.g. poisoned lock)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// The cart was used without an open session.
    pub fn no_active_cart(session_id: &str) -> Self {
        ApiError::new(
            ErrorCode::NoActiveCart,
            format!("No active cart for session: {}", session_id),
        )
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts cart errors to API errors.
impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        let code = match &err {
            CartError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            CartError::UnknownItem(_) => ErrorCode::UnknownItem,
            CartError::NotInCatalog(_) => ErrorCode::NotInCatalog,
            CartError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
