//! # Cart Aggregator
//!
//! Maintains the meals a customer has picked and derives the numbers the
//! storefront shows under the cart: item count, price, and how many more
//! meals unlock free shipping.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Storefront Action        Operation              Cart Change            │
//! │  ─────────────────        ─────────              ───────────            │
//! │                                                                         │
//! │  Tap "Add" ──────────────► add_item() ─────────► qty += n / new line   │
//! │                                                                         │
//! │  Stepper / input ────────► set_quantity() ─────► qty = n (0 removes)   │
//! │                                                                         │
//! │  Swipe to remove ────────► remove_item() ──────► line dropped          │
//! │                                                                         │
//! │  "Start over" ───────────► clear() ────────────► no lines              │
//! │                                                                         │
//! │  Progress bar ───────────► totals() ───────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per item id
//! - Every line has quantity >= 1 (zero means the line is gone)
//! - A line keeps the price it was first added with
//! - Totals are derived on every call and never stored
//!
//! The cart is a plain value. It has no interior locking; a host that lets
//! several callers touch one cart must serialize them itself.

use serde::Serialize;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CartError, CoreResult, ValidationError};
use crate::money::{Money, UnitPrice};
use crate::validation::validate_minimum_meals;
use crate::DEFAULT_MINIMUM_MEALS;

// =============================================================================
// Threshold Policy
// =============================================================================

/// Minimum number of meals for free shipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicy {
    minimum_meals: i64,
}

impl ThresholdPolicy {
    /// Creates a policy. `minimum_meals` must be at least 1.
    pub fn new(minimum_meals: i64) -> Result<Self, ValidationError> {
        validate_minimum_meals(minimum_meals)?;
        Ok(ThresholdPolicy { minimum_meals })
    }

    #[inline]
    pub const fn minimum_meals(&self) -> i64 {
        self.minimum_meals
    }

    /// Meals still missing for `total_items`, floored at zero.
    #[inline]
    pub fn items_needed(&self, total_items: i64) -> i64 {
        (self.minimum_meals - total_items).max(0)
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        ThresholdPolicy {
            minimum_meals: DEFAULT_MINIMUM_MEALS,
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One item's entry in the cart.
///
/// Fields are read-only outside this module so that a line can never be
/// observed with a zero quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    item_id: String,
    unit_price: UnitPrice,
    quantity: i64,
}

impl CartLine {
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn unit_price(&self) -> UnitPrice {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived numbers for display and checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub total_items: i64,
    pub total_price: Money,
    pub items_needed: i64,
    pub meets_minimum: bool,
}

// =============================================================================
// Cart
// =============================================================================

/// The cart for one shopping session.
///
/// Lines are kept in insertion order. Totals are summed over that order,
/// so two `totals()` calls on an unchanged cart always agree.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    policy: ThresholdPolicy,
}

impl Cart {
    /// Creates an empty cart using `policy` for the free-shipping threshold.
    pub fn new(policy: ThresholdPolicy) -> Self {
        Cart {
            lines: Vec::new(),
            policy,
        }
    }

    /// Adds `quantity` of an item, or increases the quantity if it is
    /// already in the cart.
    ///
    /// ## Price Freezing
    /// The first price recorded for an item wins. Re-adding the same item
    /// with a different price only bumps the quantity; a menu price change
    /// mid-session must not silently reprice what the customer already saw.
    ///
    /// ## Errors
    /// - [`CartError::InvalidQuantity`] if `quantity <= 0`. The cart is left
    ///   untouched.
    pub fn add_item(
        &mut self,
        item_id: &str,
        unit_price: UnitPrice,
        quantity: i64,
    ) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity {
                item_id: item_id.to_string(),
                quantity,
            });
        }

        if let Some(line) = self.line_mut(item_id) {
            line.quantity += quantity;
            return Ok(());
        }

        self.lines.push(CartLine {
            item_id: item_id.to_string(),
            unit_price,
            quantity,
        });
        Ok(())
    }

    /// Looks up the price in `catalog` and adds the item.
    ///
    /// Only consults the catalog price when the line is new; an existing
    /// line keeps its frozen price as with [`Cart::add_item`]. A bad
    /// quantity is reported before the catalog is consulted.
    pub fn add_from_catalog<C>(
        &mut self,
        catalog: &C,
        item_id: &str,
        quantity: i64,
    ) -> CoreResult<()>
    where
        C: Catalog + ?Sized,
    {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity {
                item_id: item_id.to_string(),
                quantity,
            });
        }

        let unit_price = match self.line(item_id) {
            Some(line) => line.unit_price,
            None => catalog
                .unit_price(item_id)
                .ok_or_else(|| CartError::NotInCatalog(item_id.to_string()))?,
        };
        self.add_item(item_id, unit_price, quantity)
    }

    /// Replaces an item's quantity.
    ///
    /// ## Behavior
    /// - `0`: same as [`Cart::remove_item`]
    /// - `> 0` and in cart: quantity replaced, price kept
    /// - `> 0` and not in cart: [`CartError::UnknownItem`]
    /// - `< 0`: [`CartError::InvalidQuantity`]
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            self.remove_item(item_id);
            return Ok(());
        }

        if quantity < 0 {
            return Err(CartError::InvalidQuantity {
                item_id: item_id.to_string(),
                quantity,
            });
        }

        match self.line_mut(item_id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(CartError::UnknownItem(item_id.to_string())),
        }
    }

    /// Removes an item. Removing something that is not there is a no-op.
    ///
    /// Returns whether a line was removed.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.item_id != item_id);
        self.lines.len() != initial_len
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Derives item count, price and threshold progress.
    pub fn totals(&self) -> CartTotals {
        let total_items: i64 = self.lines.iter().map(|l| l.quantity).sum();
        let total_price: Money = self.lines.iter().map(CartLine::line_total).sum();
        let items_needed = self.policy.items_needed(total_items);

        CartTotals {
            total_items,
            total_price,
            items_needed,
            meets_minimum: items_needed == 0,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id == item_id)
    }

    pub fn policy(&self) -> ThresholdPolicy {
        self.policy
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, item_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.item_id == item_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
