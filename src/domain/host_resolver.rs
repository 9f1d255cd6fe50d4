//! DNS resolution seam used by URL validation.

use async_trait::async_trait;
use std::net::IpAddr;

/// Errors returned by a [`HostResolver`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("lookup failed: {0}")]
    Lookup(#[from] std::io::Error),

    #[error("host resolved to no addresses")]
    NoAddresses,
}

/// Forward resolution of a hostname to network addresses.
///
/// Either address family is acceptable. Callers bound the lookup with their
/// own timeout, so implementations do not need one.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - the operating system resolver
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` to at least one address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the name does not exist, the lookup fails, or
    /// it yields an empty address list.
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;
}
