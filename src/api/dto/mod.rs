//! Data Transfer Objects for API requests and responses.
//!
//! Successful shorten responses serialize
//! [`crate::domain::entities::ShortlinkEntry`] directly; error bodies live in
//! [`crate::error`].

pub mod hello;
pub mod shorturl;
