//! # Session Commands
//!
//! A cart exists only between `open_session` and `close_session`.

use serde::Serialize;
use tracing::info;

use super::cart::CartResponse;
use crate::error::ApiError;
use crate::state::CartState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClosed {
    pub session_id: String,
    /// Whether a cart was actually discarded
    pub existed: bool,
}

/// Opens a session and returns its (possibly pre-existing) cart.
pub fn open_session(cart: &CartState, session_id: &str) -> Result<CartResponse, ApiError> {
    if session_id.trim().is_empty() {
        return Err(ApiError::validation("sessionId is required"));
    }

    if cart.open_session(session_id)? {
        info!(
            session_id = %session_id,
            minimum_meals = cart.policy().minimum_meals(),
            "Cart session opened"
        );
    }
    cart.with_cart(session_id, |c| CartResponse::from_cart(session_id, c))
}

/// Ends a session, discarding its cart.
pub fn close_session(cart: &CartState, session_id: &str) -> Result<SessionClosed, ApiError> {
    let existed = cart.close_session(session_id)?;
    if existed {
        info!(session_id = %session_id, "Cart session closed");
    }
    Ok(SessionClosed {
        session_id: session_id.to_string(),
        existed,
    })
}
