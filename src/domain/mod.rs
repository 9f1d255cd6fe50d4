//! Domain layer containing business entities and seam traits.
//!
//! Independent of HTTP and of how entries are stored or hosts resolved.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Shortlink store trait
//! - [`host_resolver`] - DNS resolution trait used by URL validation
//!
//! Implementations live in [`crate::infrastructure`]; orchestration in
//! [`crate::application::services`].

pub mod entities;
pub mod host_resolver;
pub mod repositories;
