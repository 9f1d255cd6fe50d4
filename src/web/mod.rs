//! Web layer for the browser-facing landing page.
//!
//! Uses Askama templates for server-side rendering. Static assets referenced
//! by the page are served from `/public` (see [`crate::routes`]).
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
