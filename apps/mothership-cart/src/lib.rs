//! # Mothership Cart Host
//!
//! Hosts one cart per shopping session and exposes the cart commands over a
//! line-oriented JSON protocol (one request per input line, one reply per
//! output line).
//!
//! ## Module Organization
//! ```text
//! mothership_cart/
//! ├── lib.rs          ◄─── You are here (App wiring & protocol loop)
//! ├── state/
//! │   ├── cart.rs     ◄─── Per-session carts behind a Mutex
//! │   ├── menu.rs     ◄─── Menu (catalog) loading
//! │   └── config.rs   ◄─── Environment configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Request enum & dispatch
//! │   ├── session.rs  ◄─── open / close session
//! │   ├── cart.rs     ◄─── cart manipulation
//! │   └── menu.rs     ◄─── menu listing
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Reply Envelope
//! ```text
//! {"ok":{"sessionId":"web-42","lines":[...],"totals":{...}}}
//! {"error":{"code":"UNKNOWN_ITEM","message":"Item not in cart: salmon"}}
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, warn};

use commands::{dispatch, Request, Response};
use error::ApiError;
use state::{AppConfig, CartState, ConfigError, MenuState};

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reply {
    Ok(Response),
    Error(ApiError),
}

impl From<Result<Response, ApiError>> for Reply {
    fn from(result: Result<Response, ApiError>) -> Self {
        match result {
            Ok(resp) => Reply::Ok(resp),
            Err(err) => Reply::Error(err),
        }
    }
}

/// The composition root: all state the commands need.
#[derive(Debug)]
pub struct App {
    pub cart: CartState,
    pub menu: MenuState,
}

impl App {
    pub fn new(cart: CartState, menu: MenuState) -> Self {
        App { cart, menu }
    }

    /// Builds the app from loaded configuration (reads the menu file).
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let menu = MenuState::load(config.menu_path.as_deref())?;
        Ok(App::new(CartState::new(config.policy), menu))
    }

    /// Handles one request line. Blank lines yield `None`.
    pub fn handle_line(&self, line: &str) -> Option<Reply> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Malformed request");
                return Some(Reply::Error(ApiError::bad_request(format!(
                    "Malformed request: {}",
                    e
                ))));
            }
        };

        let name = request.name();
        let result = dispatch(&self.cart, &self.menu, request);
        match &result {
            Ok(_) => debug!(command = name, "Command succeeded"),
            Err(err) => warn!(command = name, code = ?err.code, message = %err.message, "Command rejected"),
        }
        Some(result.into())
    }

    /// Reads requests from `input` until EOF, writing one reply per line.
    pub fn run<R, W>(&self, input: R, mut output: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        for line in input.lines() {
            let line = line?;
            if let Some(reply) = self.handle_line(&line) {
                serde_json::to_writer(&mut output, &reply)?;
                output.write_all(b"\n")?;
                output.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mothership_core::ThresholdPolicy;
    use serde_json::{json, Value};

    fn app() -> App {
        App::new(
            CartState::new(ThresholdPolicy::new(5).unwrap()),
            MenuState::sample(),
        )
    }

    fn run_script(app: &App, script: &str) -> Vec<Value> {
        let mut out = Vec::new();
        app.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_meal_plan_session() {
        let script = r#"
{"command":"open_session","sessionId":"web-42"}
{"command":"add_to_cart","sessionId":"web-42","itemId":"chicken-bowl","quantity":2}
{"command":"add_to_cart","sessionId":"web-42","itemId":"chicken-bowl","quantity":3}
{"command":"add_to_cart","sessionId":"web-42","itemId":"salmon"}
{"command":"update_cart_item","sessionId":"web-42","itemId":"chicken-bowl","quantity":0}
"#;
        let replies = run_script(&app(), script);
        assert_eq!(replies.len(), 5);

        let totals: Vec<&Value> = replies.iter().map(|r| &r["ok"]["totals"]).collect();
        assert_eq!(
            totals[1],
            &json!({"totalItems": 2, "totalPrice": 2400, "itemsNeeded": 3, "meetsMinimum": false})
        );
        assert_eq!(
            totals[2],
            &json!({"totalItems": 5, "totalPrice": 6000, "itemsNeeded": 0, "meetsMinimum": true})
        );
        assert_eq!(
            totals[3],
            &json!({"totalItems": 6, "totalPrice": 7450, "itemsNeeded": 0, "meetsMinimum": true})
        );
        assert_eq!(
            totals[4],
            &json!({"totalItems": 1, "totalPrice": 1450, "itemsNeeded": 4, "meetsMinimum": false})
        );
        assert_eq!(
            replies[4]["ok"]["lines"],
            json!([{"itemId": "salmon", "unitPrice": 1450, "quantity": 1}])
        );
    }

    #[test]
    fn test_errors_do_not_stop_the_run() {
        let script = r#"
not json
{"command":"get_cart","sessionId":"nobody"}
{"command":"open_session","sessionId":"s"}
{"command":"update_cart_item","sessionId":"s","itemId":"unknown-id","quantity":2}
{"command":"add_to_cart","sessionId":"s","itemId":"salmon","quantity":-1}

{"command":"close_session","sessionId":"s"}
"#;
        let replies = run_script(&app(), script);
        let codes: Vec<&Value> = replies.iter().map(|r| &r["error"]["code"]).collect();

        assert_eq!(replies.len(), 6);
        assert_eq!(codes[0], "BAD_REQUEST");
        assert_eq!(codes[1], "NO_ACTIVE_CART");
        assert!(replies[2]["ok"].is_object());
        assert_eq!(codes[3], "UNKNOWN_ITEM");
        assert_eq!(codes[4], "INVALID_QUANTITY");
        assert_eq!(
            replies[5]["ok"],
            json!({"sessionId": "s", "existed": true})
        );
    }

    #[test]
    fn test_get_menu() {
        let replies = run_script(&app(), r#"{"command":"get_menu"}"#);
        assert_eq!(replies[0]["ok"][1]["id"], "salmon");
        assert_eq!(replies[0]["ok"][1]["priceCents"], 1450);
    }

    #[test]
    fn test_from_config_defaults() {
        let app = App::from_config(&AppConfig::default()).unwrap();
        assert_eq!(app.cart.policy().minimum_meals(), 5);
        assert!(!app.menu.menu().is_empty());
    }
}
