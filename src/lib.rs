//! # URL Shortener Microservice
//!
//! A small URL shortening service built with Axum. Submitted URLs are
//! validated (syntax, http/https scheme, resolvable host), given a sequential
//! numeric identifier, and redirected to on lookup.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the store/resolver traits
//! - **Application Layer** ([`application`]) - URL validation and shortlink orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and system DNS resolver
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Landing page
//!
//! ## Behaviour
//!
//! - Identifiers start at 1 and increase by one per distinct URL
//! - Shortening an identical URL string again returns the existing identifier
//! - Entries live in memory for the lifetime of the process
//! - Failures answer HTTP 200 with `{"error": ...}`
//!
//! ## Quick Start
//!
//! ```bash
//! PORT=3000 cargo run
//! curl -d 'url=https://www.rust-lang.org' http://localhost:3000/api/shorturl
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{InvalidUrl, ShortlinkService, UrlValidator};
    pub use crate::domain::entities::{ShortlinkEntry, ValidatedUrl};
    pub use crate::domain::host_resolver::{HostResolver, ResolveError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
