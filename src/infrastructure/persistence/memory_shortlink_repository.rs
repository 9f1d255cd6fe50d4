//! In-memory implementation of the shortlink repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::entities::{ShortlinkEntry, ValidatedUrl};
use crate::domain::repositories::ShortlinkRepository;

/// Entries plus a URL index, always mutated together under one lock.
///
/// `entries[i]` carries `short_url == i + 1`, so lookup by identifier is an
/// index operation and the next identifier is `entries.len() + 1`.
#[derive(Debug, Default)]
struct ShortlinkTable {
    entries: Vec<ShortlinkEntry>,
    by_url: HashMap<String, u64>,
}

impl ShortlinkTable {
    fn get(&self, short_url: u64) -> Option<&ShortlinkEntry> {
        let index = usize::try_from(short_url.checked_sub(1)?).ok()?;
        self.entries.get(index)
    }

    fn find_by_url(&self, url: &str) -> Option<&ShortlinkEntry> {
        self.by_url.get(url).and_then(|&id| self.get(id))
    }
}

/// Process-lifetime shortlink store guarded by a read-write lock.
///
/// Lookups share the read lock. [`insert_or_get`](ShortlinkRepository::insert_or_get)
/// holds the write lock across the duplicate check and the append, which is
/// what keeps identifiers unique and URLs deduplicated under concurrent
/// requests. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryShortlinkRepository {
    table: RwLock<ShortlinkTable>,
}

impl InMemoryShortlinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortlinkRepository for InMemoryShortlinkRepository {
    async fn insert_or_get(&self, url: ValidatedUrl) -> ShortlinkEntry {
        // Fast path: already-known URLs only need the shared lock.
        if let Some(existing) = self.table.read().await.find_by_url(url.as_str()) {
            debug!(short_url = existing.short_url, "URL already shortened");
            return existing.clone();
        }

        let mut table = self.table.write().await;

        // Re-check: another request may have inserted it between the locks.
        if let Some(existing) = table.find_by_url(url.as_str()) {
            debug!(short_url = existing.short_url, "URL shortened concurrently");
            return existing.clone();
        }

        let short_url = table.entries.len() as u64 + 1;
        let entry = ShortlinkEntry::new(url.into_inner(), short_url);

        table.by_url.insert(entry.original_url.clone(), short_url);
        table.entries.push(entry.clone());

        info!(short_url, original_url = %entry.original_url, "Short URL created");
        entry
    }

    async fn find_by_id(&self, short_url: u64) -> Option<ShortlinkEntry> {
        self.table.read().await.get(short_url).cloned()
    }

    async fn count(&self) -> usize {
        self.table.read().await.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn url(s: &str) -> ValidatedUrl {
        ValidatedUrl::new(s.to_string())
    }

    #[tokio::test]
    async fn test_first_entry_gets_identifier_one() {
        let repo = InMemoryShortlinkRepository::new();

        let entry = repo.insert_or_get(url("https://example.com")).await;

        assert_eq!(entry.short_url, 1);
        assert_eq!(entry.original_url, "https://example.com");
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_insert_is_idempotent() {
        let repo = InMemoryShortlinkRepository::new();

        let first = repo.insert_or_get(url("https://example.com")).await;
        let second = repo.insert_or_get(url("https://example.com")).await;

        assert_eq!(first, second);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_identifiers_are_dense_in_creation_order() {
        let repo = InMemoryShortlinkRepository::new();

        let a = repo.insert_or_get(url("https://a.example")).await;
        let a_again = repo.insert_or_get(url("https://a.example")).await;
        let b = repo.insert_or_get(url("https://b.example")).await;
        let c = repo.insert_or_get(url("https://c.example")).await;

        assert_eq!(a.short_url, 1);
        assert_eq!(a_again.short_url, 1);
        assert_eq!(b.short_url, 2);
        assert_eq!(c.short_url, 3);
    }

    #[tokio::test]
    async fn test_urls_are_compared_exactly() {
        let repo = InMemoryShortlinkRepository::new();

        let plain = repo.insert_or_get(url("https://example.com")).await;
        let slash = repo.insert_or_get(url("https://example.com/")).await;
        let upper = repo.insert_or_get(url("https://EXAMPLE.com")).await;

        assert_eq!(plain.short_url, 1);
        assert_eq!(slash.short_url, 2);
        assert_eq!(upper.short_url, 3);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryShortlinkRepository::new();
        repo.insert_or_get(url("https://a.example")).await;
        repo.insert_or_get(url("https://b.example/path?q=1")).await;

        let found = repo.find_by_id(2).await.unwrap();

        assert_eq!(found.original_url, "https://b.example/path?q=1");
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let repo = InMemoryShortlinkRepository::new();
        repo.insert_or_get(url("https://a.example")).await;

        assert!(repo.find_by_id(0).await.is_none());
        assert!(repo.find_by_id(2).await.is_none());
        assert!(repo.find_by_id(999_999).await.is_none());
        assert!(repo.find_by_id(u64::MAX).await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_inserts_create_one_entry() {
        let repo = Arc::new(InMemoryShortlinkRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.insert_or_get(url("https://same.example")).await })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().short_url, 1);
        }
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_distinct_inserts_get_unique_identifiers() {
        let repo = Arc::new(InMemoryShortlinkRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert_or_get(url(&format!("https://example.com/{i}")))
                        .await
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().short_url);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=50).collect::<Vec<u64>>());
        assert_eq!(repo.count().await, 50);
    }
}
