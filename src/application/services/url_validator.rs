//! Validation of submitted URLs: syntax, scheme, then host resolution.

use std::sync::Arc;
use std::time::Duration;

use url::{Host, Url};

use crate::domain::entities::ValidatedUrl;
use crate::domain::host_resolver::{HostResolver, ResolveError};

/// Reasons a candidate URL is rejected.
///
/// Every variant surfaces to clients as the same `invalid url` message; the
/// distinction only reaches the logs.
#[derive(Debug, thiserror::Error)]
pub enum InvalidUrl {
    #[error("no URL was submitted")]
    Missing,

    #[error("not an absolute URL: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("scheme {0:?} is not http or https")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("host {host:?} did not resolve: {source}")]
    Unresolvable {
        host: String,
        #[source]
        source: ResolveError,
    },

    #[error("resolving host {host:?} timed out after {timeout:?}")]
    ResolutionTimeout { host: String, timeout: Duration },

    #[error("URL cannot be sent as a redirect location")]
    NotRedirectable,
}

/// Decides whether a submitted string may be shortened.
///
/// Checks run cheapest first so malformed input never costs a DNS query:
///
/// 1. **Syntax**: must parse as an absolute URL
/// 2. **Scheme**: `http` or `https` only (the parser lowercases schemes)
/// 3. **Host**: domain names must resolve within `dns_timeout`; IP literals
///    are accepted as they are
///
/// On success the submitted string is returned untouched. The parser's
/// normalized form is only used for the checks.
#[derive(Clone)]
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
    dns_timeout: Duration,
}

impl UrlValidator {
    pub const DEFAULT_DNS_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a validator resolving hosts through `resolver`.
    pub fn new(resolver: Arc<dyn HostResolver>, dns_timeout: Duration) -> Self {
        Self {
            resolver,
            dns_timeout,
        }
    }

    /// Validates `candidate`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUrl`] naming the first check that failed. A DNS
    /// timeout and a nonexistent domain are both rejections; nothing is retried.
    pub async fn validate(&self, candidate: Option<&str>) -> Result<ValidatedUrl, InvalidUrl> {
        let candidate = match candidate {
            Some(s) if !s.is_empty() => s,
            _ => return Err(InvalidUrl::Missing),
        };

        let parsed = Url::parse(candidate)?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(InvalidUrl::UnsupportedScheme(other.to_string())),
        }

        match parsed.host() {
            Some(Host::Domain(domain)) => self.ensure_resolvable(domain).await?,
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
            None => return Err(InvalidUrl::MissingHost),
        }

        Ok(ValidatedUrl::new(candidate.to_string()))
    }

    async fn ensure_resolvable(&self, host: &str) -> Result<(), InvalidUrl> {
        match tokio::time::timeout(self.dns_timeout, self.resolver.resolve(host)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(source)) => Err(InvalidUrl::Unresolvable {
                host: host.to_string(),
                source,
            }),
            Err(_) => Err(InvalidUrl::ResolutionTimeout {
                host: host.to_string(),
                timeout: self.dns_timeout,
            }),
        }
    }
}
