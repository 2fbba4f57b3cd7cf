//! Request validation helpers used by controllers.
//!
//! Keyword validation against the raw request URL and pagination query parameter resolution
//! for the search endpoint.

pub mod keyword;
pub mod pagination;
