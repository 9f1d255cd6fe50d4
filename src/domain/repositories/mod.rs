//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod shortlink_repository;

pub use shortlink_repository::ShortlinkRepository;

#[cfg(test)]
pub use shortlink_repository::MockShortlinkRepository;
