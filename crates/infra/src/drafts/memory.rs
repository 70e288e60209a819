//! Process-local draft store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use talentdesk_core::DraftStore;
use talentdesk_domain::Result;

/// [`DraftStore`] backed by a shared map; clones see the same entries
#[derive(Debug, Clone, Default)]
pub struct InMemoryDraftStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl DraftStore for InMemoryDraftStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn save(&self, key: &str, value: String) -> Result<()> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.write().remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = InMemoryDraftStore::new();
        let other = store.clone();

        store.save("feedback-draft:a", "{}".to_string()).await.unwrap();
        assert_eq!(other.load("feedback-draft:a").await.unwrap(), Some("{}".to_string()));
        assert_eq!(other.keys(), vec!["feedback-draft:a".to_string()]);

        assert!(other.remove("feedback-draft:a").await.unwrap());
        assert!(!store.remove("feedback-draft:a").await.unwrap());
    }
}
