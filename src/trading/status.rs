//! Per-user auto-trading flag.

use std::collections::HashMap;

use tokio::sync::Mutex;

/// Process-wide mapping from Telegram user id to the auto-trading flag.
///
/// Dispatcher handlers can run concurrently for different users, so the map
/// sits behind a mutex rather than being an ambient global. Entries live for
/// the process lifetime; there is no persistence.
#[derive(Default)]
pub struct TradingStatusStore {
    flags: Mutex<HashMap<u64, bool>>,
}

impl TradingStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users never seen before are paused.
    pub async fn get_status(&self, user_id: u64) -> bool {
        self.flags
            .lock()
            .await
            .get(&user_id)
            .copied()
            .unwrap_or(false)
    }

    /// Flips the flag and returns the new value, creating the entry on the
    /// first toggle for a given user.
    pub async fn toggle(&self, user_id: u64) -> bool {
        let mut flags = self.flags.lock().await;
        let flag = flags.entry(user_id).or_insert(false);
        *flag = !*flag;
        *flag
    }
}
