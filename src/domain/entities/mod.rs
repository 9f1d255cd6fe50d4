//! Core domain entities.
//!
//! - [`ShortlinkEntry`] - A stored URL and its short identifier
//! - [`ValidatedUrl`] - A submitted URL that passed validation

pub mod shortlink;

pub use shortlink::{ShortlinkEntry, ValidatedUrl};
