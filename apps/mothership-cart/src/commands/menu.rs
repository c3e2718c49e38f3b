//! # Menu Commands

use mothership_core::MenuItem;
use tracing::debug;

use crate::state::MenuState;

/// Lists the menu in declaration order.
pub fn get_menu(menu: &MenuState) -> Vec<MenuItem> {
    debug!("get_menu command");
    menu.menu().items().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_menu_keeps_order() {
        let items = get_menu(&MenuState::sample());
        assert_eq!(items.first().map(|i| i.id.as_str()), Some("chicken-bowl"));
        assert_eq!(items.len(), 6);
    }
}
