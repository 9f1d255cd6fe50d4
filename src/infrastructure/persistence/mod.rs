//! Shortlink store implementations.
//!
//! - [`InMemoryShortlinkRepository`] - Entries held in process memory behind a lock

pub mod memory_shortlink_repository;

pub use memory_shortlink_repository::InMemoryShortlinkRepository;
