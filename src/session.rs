//! Per-chat conversation state for the withdrawal flow.

use std::collections::HashMap;

use teloxide::types::ChatId;
use tokio::sync::Mutex;

/// The withdrawal flow is a two-state machine per chat:
/// `Idle --withdraw--> AwaitingAddress --valid address--> Idle`.
/// An invalid address keeps the chat in `AwaitingAddress`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingAddress,
}

/// Transient conversation state keyed by chat id. Nothing here survives a
/// restart, and nothing is shared across chats.
#[derive(Default)]
pub struct SessionStore {
    states: Mutex<HashMap<ChatId, ConversationState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chats never seen before are `Idle`.
    pub async fn get(&self, chat_id: ChatId) -> ConversationState {
        self.states
            .lock()
            .await
            .get(&chat_id)
            .copied()
            .unwrap_or_default()
    }

    pub async fn set(&self, chat_id: ChatId, state: ConversationState) {
        self.states.lock().await.insert(chat_id, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unseen_chat_is_idle() {
        let store = SessionStore::new();
        assert_eq!(store.get(ChatId(1)).await, ConversationState::Idle);
    }

    #[tokio::test]
    async fn state_is_scoped_per_chat() {
        let store = SessionStore::new();
        store.set(ChatId(1), ConversationState::AwaitingAddress).await;

        assert_eq!(
            store.get(ChatId(1)).await,
            ConversationState::AwaitingAddress
        );
        assert_eq!(store.get(ChatId(2)).await, ConversationState::Idle);
    }
}
