//! # Cart Commands
//!
//! Commands for cart manipulation. Each one returns the whole cart so the
//! storefront can re-render the line list and the free-shipping progress
//! bar from a single response.
//!
//! ## Cart Lifecycle
//! ```text
//!  ┌──────────┐      ┌───────────┐      ┌───────────────┐
//!  │  Empty   │─────►│  Below    │─────►│ Free shipping │────► checkout
//!  │  cart    │      │  minimum  │      │ unlocked      │      (external)
//!  └──────────┘      └───────────┘      └───────────────┘
//!       ▲                  │                    │
//!       │             add_to_cart        update_cart_item
//!       │             remove_from_cart   (0 removes)
//!       │                  │                    │
//!       └──── clear_cart ──┴────────────────────┘
//! ```

use mothership_core::{Cart, CartLine, CartTotals};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, MenuState};

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub session_id: String,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub fn from_cart(session_id: &str, cart: &Cart) -> Self {
        CartResponse {
            session_id: session_id.to_string(),
            lines: cart.lines().to_vec(),
            totals: cart.totals(),
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  YOUR MEALS                                          3 meals            │
/// │  ───────────────────────────────────────────────────────────            │
/// │  Chicken Burrito Bowl      x2                  $24.00                   │
/// │  Miso Glazed Salmon        x1                  $14.50                   │
/// │  ───────────────────────────────────────────────────────────            │
/// │  [██████████░░░░░░]  Add 2 more meals for free shipping                 │
/// │                                                                         │
/// │  get_cart → { lines: [...], totals: { itemsNeeded: 2, ... } }           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState, session_id: &str) -> Result<CartResponse, ApiError> {
    debug!(session_id = %session_id, "get_cart command");
    cart.with_cart(session_id, |c| CartResponse::from_cart(session_id, c))
}

/// Adds a meal to the cart, priced from the menu.
///
/// ## Behavior
/// - Already in cart: quantity increases, original price kept
/// - Not in cart: added with the current menu price
/// - Quantity defaults to 1
pub fn add_to_cart(
    cart: &CartState,
    menu: &MenuState,
    session_id: &str,
    item_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(session_id = %session_id, item_id = %item_id, quantity, "add_to_cart command");

    cart.with_cart_mut(session_id, |c| {
        c.add_from_catalog(menu, item_id, quantity)?;
        Ok::<_, ApiError>(CartResponse::from_cart(session_id, c))
    })?
}

/// Sets the quantity of a meal already in the cart.
///
/// ## Behavior
/// - Quantity 0: removes the meal
/// - Meal not in cart: `UNKNOWN_ITEM` (the storefront must `add_to_cart`)
pub fn update_cart_item(
    cart: &CartState,
    session_id: &str,
    item_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(session_id = %session_id, item_id = %item_id, quantity, "update_cart_item command");

    cart.with_cart_mut(session_id, |c| {
        c.set_quantity(item_id, quantity)?;
        Ok::<_, ApiError>(CartResponse::from_cart(session_id, c))
    })?
}

/// Removes a meal from the cart. Removing an absent meal is not an error.
pub fn remove_from_cart(
    cart: &CartState,
    session_id: &str,
    item_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(session_id = %session_id, item_id = %item_id, "remove_from_cart command");

    cart.with_cart_mut(session_id, |c| {
        if !c.remove_item(item_id) {
            debug!(item_id = %item_id, "remove_from_cart: item was not in cart");
        }
        CartResponse::from_cart(session_id, c)
    })
}

/// Clears all meals from the cart.
pub fn clear_cart(cart: &CartState, session_id: &str) -> Result<CartResponse, ApiError> {
    debug!(session_id = %session_id, "clear_cart command");

    cart.with_cart_mut(session_id, |c| {
        c.clear();
        CartResponse::from_cart(session_id, c)
    })
}
