//! # Commands Module
//!
//! The request vocabulary of the cart host and its dispatcher.
//!
//! ## Wire Format
//! One JSON object per line, tagged by `command`:
//! ```text
//! {"command":"open_session","sessionId":"web-42"}
//! {"command":"add_to_cart","sessionId":"web-42","itemId":"salmon","quantity":2}
//! {"command":"update_cart_item","sessionId":"web-42","itemId":"salmon","quantity":0}
//! {"command":"remove_from_cart","sessionId":"web-42","itemId":"salmon"}
//! {"command":"clear_cart","sessionId":"web-42"}
//! {"command":"get_cart","sessionId":"web-42"}
//! {"command":"get_menu"}
//! {"command":"close_session","sessionId":"web-42"}
//! ```

pub mod cart;
pub mod menu;
pub mod session;

use mothership_core::MenuItem;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::{CartState, MenuState};
use cart::CartResponse;
use session::SessionClosed;

/// A parsed request line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Request {
    OpenSession {
        session_id: String,
    },
    CloseSession {
        session_id: String,
    },
    GetCart {
        session_id: String,
    },
    AddToCart {
        session_id: String,
        item_id: String,
        #[serde(default)]
        quantity: Option<i64>,
    },
    UpdateCartItem {
        session_id: String,
        item_id: String,
        quantity: i64,
    },
    RemoveFromCart {
        session_id: String,
        item_id: String,
    },
    ClearCart {
        session_id: String,
    },
    GetMenu,
}

impl Request {
    /// Command name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Request::OpenSession { .. } => "open_session",
            Request::CloseSession { .. } => "close_session",
            Request::GetCart { .. } => "get_cart",
            Request::AddToCart { .. } => "add_to_cart",
            Request::UpdateCartItem { .. } => "update_cart_item",
            Request::RemoveFromCart { .. } => "remove_from_cart",
            Request::ClearCart { .. } => "clear_cart",
            Request::GetMenu => "get_menu",
        }
    }
}

/// Successful command payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Cart(CartResponse),
    SessionClosed(SessionClosed),
    Menu(Vec<MenuItem>),
}

/// Routes a request to its command.
pub fn dispatch(
    cart_state: &CartState,
    menu_state: &MenuState,
    request: Request,
) -> Result<Response, ApiError> {
    match request {
        Request::OpenSession { session_id } => {
            session::open_session(cart_state, &session_id).map(Response::Cart)
        }
        Request::CloseSession { session_id } => {
            session::close_session(cart_state, &session_id).map(Response::SessionClosed)
        }
        Request::GetCart { session_id } => {
            cart::get_cart(cart_state, &session_id).map(Response::Cart)
        }
        Request::AddToCart {
            session_id,
            item_id,
            quantity,
        } => cart::add_to_cart(cart_state, menu_state, &session_id, &item_id, quantity)
            .map(Response::Cart),
        Request::UpdateCartItem {
            session_id,
            item_id,
            quantity,
        } => cart::update_cart_item(cart_state, &session_id, &item_id, quantity)
            .map(Response::Cart),
        Request::RemoveFromCart {
            session_id,
            item_id,
        } => cart::remove_from_cart(cart_state, &session_id, &item_id).map(Response::Cart),
        Request::ClearCart { session_id } => {
            cart::clear_cart(cart_state, &session_id).map(Response::Cart)
        }
        Request::GetMenu => Ok(Response::Menu(menu::get_menu(menu_state))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requests() {
        let req: Request = serde_json::from_str(
            r#"{"command":"add_to_cart","sessionId":"web-42","itemId":"salmon"}"#,
        )
        .unwrap();
        assert_eq!(
            req,
            Request::AddToCart {
                session_id: "web-42".to_string(),
                item_id: "salmon".to_string(),
                quantity: None,
            }
        );

        let req: Request = serde_json::from_str(r#"{"command":"get_menu"}"#).unwrap();
        assert_eq!(req, Request::GetMenu);
        assert_eq!(req.name(), "get_menu");
    }

    #[test]
    fn test_update_requires_quantity() {
        let parsed = serde_json::from_str::<Request>(
            r#"{"command":"update_cart_item","sessionId":"s","itemId":"salmon"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_dispatch_round() {
        let cart = CartState::default();
        let menu = MenuState::sample();

        dispatch(
            &cart,
            &menu,
            Request::OpenSession {
                session_id: "s".to_string(),
            },
        )
        .unwrap();
        let resp = dispatch(
            &cart,
            &menu,
            Request::AddToCart {
                session_id: "s".to_string(),
                item_id: "salmon".to_string(),
                quantity: Some(2),
            },
        )
        .unwrap();

        match resp {
            Response::Cart(c) => assert_eq!(c.totals.total_items, 2),
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
