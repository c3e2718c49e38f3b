//! # State Module
//!
//! Separate state types, each with a single responsibility:
//!
//! ```text
//! ┌──────────────────────┐  ┌──────────────┐  ┌──────────────────┐
//! │  CartState           │  │  MenuState   │  │  AppConfig       │
//! │  Mutex<session→Cart> │  │  Menu        │  │  threshold, menu │
//! │                      │  │  (read only) │  │  path, log level │
//! └──────────────────────┘  └──────────────┘  └──────────────────┘
//! ```
//!
//! Commands take only the state they need.

mod cart;
mod config;
mod menu;

pub use cart::CartState;
pub use config::{AppConfig, ConfigError, LOG_VAR, MENU_PATH_VAR, MINIMUM_MEALS_VAR};
pub use menu::MenuState;
