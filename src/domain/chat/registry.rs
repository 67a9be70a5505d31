//! Session registry - owned map from session ids to conversation handles.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use super::conversation::Conversation;
use crate::domain::foundation::{SessionId, Timestamp};

/// Shared, lockable conversation.
///
/// Holding the lock serialises sends on one session without blocking others.
pub type ConversationHandle = Arc<Mutex<Conversation>>;

/// In-memory registry of live conversations.
///
/// Holds at most one handle per session id. The map lock is only held for
/// lookups and structural changes, never across a remote call.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    handles: RwLock<HashMap<SessionId, ConversationHandle>>,
}

impl SessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for `session_id`, if present.
    pub async fn get(&self, session_id: &SessionId) -> Option<ConversationHandle> {
        self.handles.read().await.get(session_id).cloned()
    }

    /// Returns the existing handle or inserts the one built by `create`.
    ///
    /// `create` runs at most once and only when no handle exists under the
    /// write lock, so concurrent callers for a new key share one handle.
    /// The flag is true when a handle was created.
    pub async fn get_or_insert_with<F>(
        &self,
        session_id: &SessionId,
        create: F,
    ) -> (ConversationHandle, bool)
    where
        F: FnOnce() -> Conversation,
    {
        if let Some(handle) = self.get(session_id).await {
            return (handle, false);
        }

        let mut handles = self.handles.write().await;
        if let Some(handle) = handles.get(session_id) {
            return (handle.clone(), false);
        }

        let handle = Arc::new(Mutex::new(create()));
        handles.insert(session_id.clone(), handle.clone());
        (handle, true)
    }

    /// Removes and returns the handle for `session_id`.
    pub async fn remove(&self, session_id: &SessionId) -> Option<ConversationHandle> {
        self.handles.write().await.remove(session_id)
    }

    /// Checks whether a handle exists for `session_id`.
    pub async fn contains(&self, session_id: &SessionId) -> bool {
        self.handles.read().await.contains_key(session_id)
    }

    /// Get the number of live sessions
    pub async fn len(&self) -> usize {
        self.handles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.handles.read().await.is_empty()
    }

    /// Removes conversations last active before `cutoff`.
    ///
    /// Handles held outside the registry (a forward has fetched or locked
    /// them) are kept regardless of age. No new clones can be taken while
    /// the write lock is held. Returns the evicted session ids.
    pub async fn evict_idle(&self, cutoff: Timestamp) -> Vec<SessionId> {
        let mut evicted = Vec::new();
        let mut handles = self.handles.write().await;

        handles.retain(|session_id, handle| {
            if Arc::strong_count(handle) > 1 {
                return true;
            }
            let idle = match handle.try_lock() {
                Ok(conversation) => conversation.last_active_at().is_before(&cutoff),
                Err(_) => false,
            };
            if idle {
                evicted.push(session_id.clone());
            }
            !idle
        });

        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::domain::chat::ConversationOptions;

    fn conversation(id: &str) -> Conversation {
        Conversation::start(
            SessionId::new(id),
            Arc::new(MockAIProvider::new()),
            Vec::new(),
            ConversationOptions::default(),
        )
    }

    #[tokio::test]
    async fn get_or_insert_creates_once() {
        let registry = SessionRegistry::new();
        let id = SessionId::new("a");

        let (first, created_first) = registry.get_or_insert_with(&id, || conversation("a")).await;
        let (second, created_second) = registry
            .get_or_insert_with(&id, || panic!("must not create twice"))
            .await;

        assert!(created_first);
        assert!(!created_second);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn concurrent_creators_share_one_handle() {
        let registry = Arc::new(SessionRegistry::new());
        let id = SessionId::new("shared");

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let registry = registry.clone();
                let id = id.clone();
                tokio::spawn(async move {
                    registry
                        .get_or_insert_with(&id, || conversation("shared"))
                        .await
                })
            })
            .collect();

        let mut handles = Vec::new();
        let mut created = 0;
        for task in tasks {
            let (handle, was_created) = task.await.unwrap();
            if was_created {
                created += 1;
            }
            handles.push(handle);
        }

        assert_eq!(created, 1);
        assert!(handles.iter().all(|h| Arc::ptr_eq(h, &handles[0])));
    }

    #[tokio::test]
    async fn remove_returns_handle_once() {
        let registry = SessionRegistry::new();
        let id = SessionId::new("a");
        registry.get_or_insert_with(&id, || conversation("a")).await;

        assert!(registry.remove(&id).await.is_some());
        assert!(registry.remove(&id).await.is_none());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn evict_idle_removes_only_old_sessions() {
        let registry = SessionRegistry::new();
        registry
            .get_or_insert_with(&SessionId::new("old"), || conversation("old"))
            .await;

        let evicted = registry.evict_idle(Timestamp::now().minus_secs(60)).await;
        assert!(evicted.is_empty());
        assert_eq!(registry.len().await, 1);

        let evicted = registry.evict_idle(Timestamp::now().plus_secs(60)).await;
        assert_eq!(evicted, vec![SessionId::new("old")]);
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn evict_idle_keeps_busy_sessions() {
        let registry = SessionRegistry::new();
        let id = SessionId::new("busy");
        let (handle, _) = registry.get_or_insert_with(&id, || conversation("busy")).await;

        let _in_flight = handle.lock().await;
        let evicted = registry.evict_idle(Timestamp::now().plus_secs(60)).await;

        assert!(evicted.is_empty());
        assert!(registry.contains(&id).await);
    }
    #[tokio::test]
    async fn evict_idle_keeps_fetched_but_unlocked_sessions() {
        let registry = SessionRegistry::new();
        let id = SessionId::new("pending");
        let (handle, _) = registry.get_or_insert_with(&id, || conversation("pending")).await;

        let evicted = registry.evict_idle(Timestamp::now().plus_secs(60)).await;
        assert!(evicted.is_empty());
        assert!(registry.contains(&id).await);

        drop(handle);
        let evicted = registry.evict_idle(Timestamp::now().plus_secs(60)).await;
        assert_eq!(evicted, vec![id]);
    }
}
