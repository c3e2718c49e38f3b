//! # Menu State
//!
//! The catalog every `add_to_cart` prices against. Loaded once at startup
//! from a JSON array of menu items, or the sample menu when no file is
//! configured. Read-only afterwards, so no lock.
//!
//! ```json
//! [
//!   { "id": "chicken-bowl", "name": "Chicken Burrito Bowl", "priceCents": 1200 },
//!   { "id": "salmon", "name": "Miso Glazed Salmon", "priceCents": 1450 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use mothership_core::{Catalog, Menu, MenuItem, UnitPrice};
use tracing::{info, warn};

use super::config::ConfigError;

const SAMPLE_MENU: &str = include_str!("../../menu.sample.json");

#[derive(Debug, Clone)]
pub struct MenuState {
    menu: Menu,
}

impl MenuState {
    pub fn new(menu: Menu) -> Self {
        MenuState { menu }
    }

    /// Loads the menu from `path`, or the sample menu when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            info!("No menu file configured, using sample menu");
            return Ok(Self::sample());
        };

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::MenuUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let state = Self::parse(&raw).map_err(|reason| ConfigError::MenuInvalid {
            path: path.to_path_buf(),
            reason,
        })?;

        info!(path = %path.display(), items = state.menu.len(), "Menu loaded");
        Ok(state)
    }

    /// Parses a JSON menu document.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let items: Vec<MenuItem> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        let menu = Menu::from_items(items).map_err(|e| e.to_string())?;
        Ok(MenuState::new(menu))
    }

    /// The built-in menu used for local runs: `menu.sample.json`, compiled in.
    pub fn sample() -> Self {
        Self::parse(SAMPLE_MENU).unwrap_or_else(|reason| {
            warn!(%reason, "Bundled sample menu is invalid, starting with an empty menu");
            MenuState::new(Menu::default())
        })
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }
}

impl Catalog for MenuState {
    fn unit_price(&self, item_id: &str) -> Option<UnitPrice> {
        self.menu.unit_price(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_menu() {
        let state = MenuState::sample();
        assert_eq!(state.menu().len(), 6);
        assert_eq!(state.unit_price("salmon").map(|p| p.cents()), Some(1450));
    }

    #[test]
    fn test_sample_menu_matches_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("menu.sample.json");
        let from_file = MenuState::load(Some(path.as_path())).unwrap();
        assert_eq!(MenuState::sample().menu().items(), from_file.menu().items());
    }

    #[test]
    fn test_parse() {
        let state = MenuState::parse(
            r#"[{"id":"poke","name":"Ahi Poke Bowl","priceCents":1525}]"#,
        )
        .unwrap();
        assert_eq!(state.unit_price("poke").map(|p| p.cents()), Some(1525));
    }

    #[test]
    fn test_parse_rejects_bad_menu() {
        assert!(MenuState::parse("not json").is_err());
        assert!(MenuState::parse(
            r#"[{"id":"a","name":"A","priceCents":1},{"id":"a","name":"B","priceCents":2}]"#
        )
        .is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = MenuState::load(Some(Path::new("/nonexistent/mothership/menu.json")));
        assert!(matches!(result, Err(ConfigError::MenuUnreadable { .. })));
    }

    #[test]
    fn test_load_sample_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("menu.sample.json");
        let state = MenuState::load(Some(path.as_path())).unwrap();
        assert_eq!(state.menu().len(), 6);
        assert_eq!(state.unit_price("cookie").map(|p| p.cents()), Some(0));
    }

    #[test]
    fn test_load_without_path_uses_sample() {
        let state = MenuState::load(None).unwrap();
        assert!(state.unit_price("chicken-bowl").is_some());
    }
}
