//! Business logic services for the application layer.

pub mod shortlink_service;
pub mod url_validator;

pub use shortlink_service::ShortlinkService;
pub use url_validator::{InvalidUrl, UrlValidator};
