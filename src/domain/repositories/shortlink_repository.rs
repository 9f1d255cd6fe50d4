//! Repository trait for the shortlink store.

use crate::domain::entities::{ShortlinkEntry, ValidatedUrl};
use async_trait::async_trait;

/// Store of URL-to-identifier mappings.
///
/// Implementations own their collection exclusively and must make
/// [`insert_or_get`](Self::insert_or_get) atomic: two concurrent calls for the
/// same new URL produce one entry, and two concurrent calls for different new
/// URLs never share an identifier.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryShortlinkRepository`] - process-lifetime store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortlinkRepository: Send + Sync {
    /// Returns the entry for `url`, creating it with the next identifier if
    /// no entry with an identical URL string exists.
    ///
    /// Identifiers start at 1 and are dense in creation order.
    async fn insert_or_get(&self, url: ValidatedUrl) -> ShortlinkEntry;

    /// Finds the entry carrying `short_url`.
    ///
    /// # Returns
    ///
    /// - `Some(entry)` if found
    /// - `None` if no entry carries that identifier
    async fn find_by_id(&self, short_url: u64) -> Option<ShortlinkEntry>;

    /// Number of stored entries.
    async fn count(&self) -> usize;
}
