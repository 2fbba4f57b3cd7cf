//! Test fixtures for upstream data and mock HTTP endpoints.
//!
//! - `search` - Upstream repository search responses and `/search/repositories` endpoints

pub mod search;
