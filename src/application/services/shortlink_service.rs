//! Shortlink creation and lookup service.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::url_validator::UrlValidator;
use crate::domain::entities::ShortlinkEntry;
use crate::domain::repositories::ShortlinkRepository;
use crate::error::AppError;
use crate::utils::short_id::parse_short_id;

/// Service for creating and resolving short links.
///
/// Creation is validate-then-store: only URLs that pass [`UrlValidator`]
/// reach the repository, which trusts its input.
pub struct ShortlinkService<R: ShortlinkRepository> {
    repository: Arc<R>,
    validator: UrlValidator,
}

impl<R: ShortlinkRepository> ShortlinkService<R> {
    /// Creates a new shortlink service.
    pub fn new(repository: Arc<R>, validator: UrlValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Validates `url` and returns its entry, creating one if the exact string
    /// has not been shortened before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL is missing, malformed, not
    /// http(s), or its host does not resolve.
    pub async fn shorten(&self, url: Option<&str>) -> Result<ShortlinkEntry, AppError> {
        let validated = self.validator.validate(url).await?;
        Ok(self.repository.insert_or_get(validated).await)
    }

    /// Resolves a raw path segment to its entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] if `raw_id` is not an integer
    /// and [`AppError::NotFound`] if no entry carries it.
    pub async fn resolve(&self, raw_id: &str) -> Result<ShortlinkEntry, AppError> {
        let not_found = || AppError::NotFound(raw_id.to_string());

        let Some(short_url) = parse_short_id(raw_id)? else {
            debug!(raw_id, "Identifier cannot name an entry");
            return Err(not_found());
        };

        self.repository
            .find_by_id(short_url)
            .await
            .ok_or_else(not_found)
    }
}
