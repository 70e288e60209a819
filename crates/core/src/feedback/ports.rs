//! Port interfaces for draft persistence

use async_trait::async_trait;
use talentdesk_domain::Result;

/// String key-value store for drafts
///
/// Backed by whatever the host offers: browser storage, a file per key, an
/// in-memory map in tests.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Stored value for `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace the value for `key`.
    async fn save(&self, key: &str, value: String) -> Result<()>;

    /// Delete `key`; returns whether it existed.
    async fn remove(&self, key: &str) -> Result<bool>;
}
