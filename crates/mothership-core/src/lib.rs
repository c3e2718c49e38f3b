//! # mothership-core: Cart Logic for Mothership
//!
//! This crate holds the one piece of business logic shared by the web and
//! mobile storefronts: cart aggregation and the minimum-meal (free shipping)
//! threshold. Everything here is a pure, in-memory data transformation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Mothership Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Storefronts (Next.js web, React Native)              │   │
//! │  │      Menu grid ──► Cart progress bar ──► Checkout               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON / ts-rs bindings                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 mothership-cart (session host)                  │   │
//! │  │    open_session, add_to_cart, update_cart_item, clear_cart     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ mothership-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │  catalog  │  │ validation│  │   │
//! │  │   │   Money   │  │   Cart    │  │   Menu    │  │   rules   │  │   │
//! │  │   │ UnitPrice │  │ CartTotals│  │  Catalog  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart aggregator and its derived totals
//! - [`catalog`] - Item id → price lookup (the menu)
//! - [`money`] - Integer money and non-negative unit prices
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use mothership_core::{Cart, Money, ThresholdPolicy, UnitPrice};
//!
//! let mut cart = Cart::new(ThresholdPolicy::new(5).unwrap());
//! let price = UnitPrice::new(Money::from_cents(1200)).unwrap();
//!
//! cart.add_item("chicken-bowl", price, 2).unwrap();
//!
//! let totals = cart.totals();
//! assert_eq!(totals.total_items, 2);
//! assert_eq!(totals.total_price, Money::from_cents(2400));
//! assert_eq!(totals.items_needed, 3);
//! assert!(!totals.meets_minimum);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals, ThresholdPolicy};
pub use catalog::{Catalog, Menu, MenuItem};
pub use error::{CartError, CoreResult, ValidationError};
pub use money::{Money, UnitPrice};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default minimum number of meals for free shipping.
///
/// Hosts override this through configuration; the storefront copy
/// ("add 3 more meals for free shipping") is driven by whatever value the
/// host passes into [`ThresholdPolicy`].
pub const DEFAULT_MINIMUM_MEALS: i64 = 5;

/// Maximum length of an item identifier.
pub const MAX_ITEM_ID_LEN: usize = 64;
