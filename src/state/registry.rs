//! Chat registry
//!
//! Process-lifetime record of every private chat and group chat the bot has
//! seen a message from. Populated opportunistically by the handlers and read
//! as snapshots by the broadcast fan-out.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use teloxide::types::{Chat, ChatId};
use tracing::debug;

/// Classification of a chat for registry purposes
///
/// Derived once from the inbound update's chat type and never re-evaluated.
/// Channels and other chat types are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatScope {
    Private,
    Group,
}

impl ChatScope {
    /// Derive the scope from a Telegram chat, `None` for untracked kinds
    pub fn of(chat: &Chat) -> Option<Self> {
        if chat.is_private() {
            Some(ChatScope::Private)
        } else if chat.is_group() || chat.is_supergroup() {
            Some(ChatScope::Group)
        } else {
            None
        }
    }
}

/// Concurrency-safe registry of known chats
///
/// Cloning is cheap and all clones share the same underlying sets. The
/// registry only grows; delivery failures are counted by the broadcast
/// engine, never used to evict a chat.
#[derive(Debug, Clone, Default)]
pub struct ChatRegistry {
    inner: Arc<RegistryInner>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    users: RwLock<HashSet<ChatId>>,
    groups: RwLock<HashSet<ChatId>>,
}

impl ChatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the chat an update arrived from, ignoring untracked kinds
    pub fn record_chat(&self, chat: &Chat) {
        if let Some(scope) = ChatScope::of(chat) {
            self.record(chat.id, scope);
        }
    }

    /// Idempotently add a chat id under the given scope
    ///
    /// An id already tracked under the other scope is left where it is;
    /// classification happens once.
    pub fn record(&self, chat_id: ChatId, scope: ChatScope) {
        match scope {
            ChatScope::Private => {
                if self.contains_group(chat_id) {
                    return;
                }
                let inserted = self
                    .inner
                    .users
                    .write()
                    .expect("registry lock poisoned")
                    .insert(chat_id);
                if inserted {
                    debug!(chat_id = ?chat_id, "Tracking new private chat");
                }
            }
            ChatScope::Group => {
                if self.contains_user(chat_id) {
                    return;
                }
                let inserted = self
                    .inner
                    .groups
                    .write()
                    .expect("registry lock poisoned")
                    .insert(chat_id);
                if inserted {
                    debug!(chat_id = ?chat_id, "Tracking new group chat");
                }
            }
        }
    }

    /// Point-in-time copy of the tracked private chats
    pub fn users_snapshot(&self) -> Vec<ChatId> {
        self.inner
            .users
            .read()
            .expect("registry lock poisoned")
            .iter()
            .copied()
            .collect()
    }

    /// Point-in-time copy of the tracked group chats
    pub fn groups_snapshot(&self) -> Vec<ChatId> {
        self.inner
            .groups
            .read()
            .expect("registry lock poisoned")
            .iter()
            .copied()
            .collect()
    }

    /// Union of both sets, private chats first
    pub fn all_snapshot(&self) -> Vec<ChatId> {
        let mut all = self.users_snapshot();
        all.extend(self.groups_snapshot());
        all
    }

    /// Tracked chat counts as (users, groups)
    pub fn counts(&self) -> (usize, usize) {
        let users = self.inner.users.read().expect("registry lock poisoned").len();
        let groups = self
            .inner
            .groups
            .read()
            .expect("registry lock poisoned")
            .len();
        (users, groups)
    }

    fn contains_user(&self, chat_id: ChatId) -> bool {
        self.inner
            .users
            .read()
            .expect("registry lock poisoned")
            .contains(&chat_id)
    }

    fn contains_group(&self, chat_id: ChatId) -> bool {
        self.inner
            .groups
            .read()
            .expect("registry lock poisoned")
            .contains(&chat_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_idempotent() {
        let registry = ChatRegistry::new();
        registry.record(ChatId(1), ChatScope::Private);
        registry.record(ChatId(1), ChatScope::Private);

        assert_eq!(registry.users_snapshot(), vec![ChatId(1)]);
        assert_eq!(registry.counts(), (1, 0));
    }

    #[test]
    fn test_id_lives_in_exactly_one_set() {
        let registry = ChatRegistry::new();
        registry.record(ChatId(7), ChatScope::Private);
        // A conflicting classification later does not move the id
        registry.record(ChatId(7), ChatScope::Group);

        assert!(registry.users_snapshot().contains(&ChatId(7)));
        assert!(registry.groups_snapshot().is_empty());
    }

    #[test]
    fn test_group_classification_sticks_too() {
        let registry = ChatRegistry::new();
        registry.record(ChatId(-100), ChatScope::Group);
        registry.record(ChatId(-100), ChatScope::Private);

        assert!(registry.groups_snapshot().contains(&ChatId(-100)));
        assert!(registry.users_snapshot().is_empty());
    }

    #[test]
    fn test_all_snapshot_is_the_union() {
        let registry = ChatRegistry::new();
        registry.record(ChatId(1), ChatScope::Private);
        registry.record(ChatId(2), ChatScope::Private);
        registry.record(ChatId(-100), ChatScope::Group);

        let all = registry.all_snapshot();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&ChatId(1)));
        assert!(all.contains(&ChatId(2)));
        assert!(all.contains(&ChatId(-100)));
    }

    #[test]
    fn test_snapshots_are_copies() {
        let registry = ChatRegistry::new();
        registry.record(ChatId(1), ChatScope::Private);

        let snapshot = registry.users_snapshot();
        registry.record(ChatId(2), ChatScope::Private);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.users_snapshot().len(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let registry = ChatRegistry::new();
        let clone = registry.clone();
        clone.record(ChatId(5), ChatScope::Private);

        assert!(registry.users_snapshot().contains(&ChatId(5)));
    }
}
