use std::sync::Arc;

use crate::session::SessionStore;
use crate::trading::status::TradingStatusStore;

pub mod commands;
pub mod keyboards;

/// Shared state injected into every handler invocation. The stores carry
/// their own synchronization, so handlers only need a shared reference.
#[derive(Clone)]
pub struct BotState {
    pub trading_status: Arc<TradingStatusStore>,
    pub sessions: Arc<SessionStore>,
}

impl BotState {
    pub fn new() -> Self {
        Self {
            trading_status: Arc::new(TradingStatusStore::new()),
            sessions: Arc::new(SessionStore::new()),
        }
    }
}

impl Default for BotState {
    fn default() -> Self {
        Self::new()
    }
}
