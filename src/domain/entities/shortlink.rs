//! Shortlink entity: the mapping between an original URL and its short identifier.

use serde::Serialize;

/// A stored mapping from a short numeric identifier to the URL it redirects to.
///
/// Serializes directly into the public API shape:
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortlinkEntry {
    pub original_url: String,
    pub short_url: u64,
}

impl ShortlinkEntry {
    /// Creates a new entry.
    pub fn new(original_url: String, short_url: u64) -> Self {
        Self {
            original_url,
            short_url,
        }
    }
}

/// A URL string that has passed syntax, scheme and host resolution checks.
///
/// Only [`crate::application::services::UrlValidator`] constructs these in
/// production code, so holding one is proof the checks ran. The wrapped string
/// is exactly what the client submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedUrl(String);

impl ValidatedUrl {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ValidatedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
