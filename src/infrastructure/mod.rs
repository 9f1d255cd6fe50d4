//! Infrastructure layer for storage and external lookups.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Host resolution through the system resolver
//! - [`persistence`] - In-memory shortlink store

pub mod dns;
pub mod persistence;
