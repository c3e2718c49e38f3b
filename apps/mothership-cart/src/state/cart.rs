//! # Cart State
//!
//! Owns one cart per shopping session.
//!
//! ## Thread Safety
//! The core `Cart` makes no concurrency guarantees, so every access goes
//! through one `Mutex`. Two storefront events racing on the same session
//! are applied one after the other, never interleaved.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  open_session("web-42") ──► empty Cart (configured threshold)          │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  with_cart / with_cart_mut("web-42", ...)  ◄── add / update / remove   │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  close_session("web-42") ──► cart discarded                            │
//! │                                                                         │
//! │  with_cart("web-99", ...) without open_session ──► NO_ACTIVE_CART      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use mothership_core::{Cart, ThresholdPolicy};

use crate::error::ApiError;

#[derive(Debug)]
pub struct CartState {
    sessions: Mutex<HashMap<String, Cart>>,
    policy: ThresholdPolicy,
}

impl CartState {
    /// Creates a state with no sessions. New carts use `policy`.
    pub fn new(policy: ThresholdPolicy) -> Self {
        CartState {
            sessions: Mutex::new(HashMap::new()),
            policy,
        }
    }

    pub fn policy(&self) -> ThresholdPolicy {
        self.policy
    }

    /// Opens a session with an empty cart.
    ///
    /// Re-opening an open session keeps its cart. Returns `true` if a new
    /// cart was created.
    pub fn open_session(&self, session_id: &str) -> Result<bool, ApiError> {
        let mut sessions = self.lock()?;
        if sessions.contains_key(session_id) {
            return Ok(false);
        }
        sessions.insert(session_id.to_string(), Cart::new(self.policy));
        Ok(true)
    }

    /// Discards the session's cart. Returns `true` if one existed.
    pub fn close_session(&self, session_id: &str) -> Result<bool, ApiError> {
        Ok(self.lock()?.remove(session_id).is_some())
    }

    pub fn session_count(&self) -> Result<usize, ApiError> {
        Ok(self.lock()?.len())
    }

    /// Executes a function with read access to the session's cart.
    ///
    /// ## Errors
    /// `NO_ACTIVE_CART` if the session was never opened.
    pub fn with_cart<F, R>(&self, session_id: &str, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&Cart) -> R,
    {
        let sessions = self.lock()?;
        let cart = sessions
            .get(session_id)
            .ok_or_else(|| ApiError::no_active_cart(session_id))?;
        Ok(f(cart))
    }

    /// Executes a function with write access to the session's cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut("web-42", |cart| cart.set_quantity("salmon", 2))??;
    /// ```
    pub fn with_cart_mut<F, R>(&self, session_id: &str, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut sessions = self.lock()?;
        let cart = sessions
            .get_mut(session_id)
            .ok_or_else(|| ApiError::no_active_cart(session_id))?;
        Ok(f(cart))
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Cart>>, ApiError> {
        self.sessions
            .lock()
            .map_err(|_| ApiError::internal("Cart state lock poisoned"))
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new(ThresholdPolicy::default())
    }
}
