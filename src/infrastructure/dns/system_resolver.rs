//! [`HostResolver`] implementation over `tokio::net::lookup_host`.

use async_trait::async_trait;
use std::net::IpAddr;

use crate::domain::host_resolver::{HostResolver, ResolveError};

/// Resolves hostnames with the system resolver (`getaddrinfo`).
///
/// The blocking lookup runs on tokio's blocking pool, so a slow resolver only
/// delays the request that asked for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        // Port is irrelevant for name resolution but required by the API.
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await?
            .map(|addr| addr.ip())
            .collect();

        if addrs.is_empty() {
            return Err(ResolveError::NoAddresses);
        }

        Ok(addrs)
    }
}
