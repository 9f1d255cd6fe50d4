//! Application layer services implementing business logic.
//!
//! Services coordinate validation and repository calls and give HTTP
//! handlers a small API.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - Syntax, scheme and host resolution checks
//! - [`services::shortlink_service::ShortlinkService`] - Short URL creation and lookup

pub mod services;
