//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{ShortlinkService, UrlValidator};
use crate::domain::host_resolver::HostResolver;
use crate::infrastructure::persistence::InMemoryShortlinkRepository;

/// State shared by all request handlers.
///
/// Cloning is cheap; the store behind the service is shared, so every clone
/// sees the same entries.
#[derive(Clone)]
pub struct AppState {
    pub shortlink_service: Arc<ShortlinkService<InMemoryShortlinkRepository>>,
}

impl AppState {
    /// Builds state around an empty store, validating URLs through `resolver`.
    pub fn new(resolver: Arc<dyn HostResolver>, dns_timeout: Duration) -> Self {
        Self::with_repository(
            Arc::new(InMemoryShortlinkRepository::new()),
            resolver,
            dns_timeout,
        )
    }

    /// Builds state around an existing store.
    pub fn with_repository(
        repository: Arc<InMemoryShortlinkRepository>,
        resolver: Arc<dyn HostResolver>,
        dns_timeout: Duration,
    ) -> Self {
        let validator = UrlValidator::new(resolver, dns_timeout);

        Self {
            shortlink_service: Arc::new(ShortlinkService::new(repository, validator)),
        }
    }
}
