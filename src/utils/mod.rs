//! Utility functions for request handling.
//!
//! - [`short_id`] - Parsing of short URL identifiers from path segments

pub mod short_id;
