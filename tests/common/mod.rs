#![allow(dead_code)]

use async_trait::async_trait;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use url_shortener_microservice::domain::host_resolver::{HostResolver, ResolveError};
use url_shortener_microservice::infrastructure::persistence::InMemoryShortlinkRepository;
use url_shortener_microservice::state::AppState;

/// Resolver that needs no network: every host resolves except those under the
/// reserved `.invalid` TLD, which never exist.
pub struct StubResolver;

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        // Suspend like a real lookup so concurrent requests interleave.
        tokio::task::yield_now().await;

        if host.ends_with(".invalid") {
            return Err(ResolveError::NoAddresses);
        }

        Ok(vec![IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))])
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryShortlinkRepository>) {
    let repository = Arc::new(InMemoryShortlinkRepository::new());
    let state = AppState::with_repository(
        repository.clone(),
        Arc::new(StubResolver),
        Duration::from_secs(1),
    );

    (state, repository)
}
