//! Service layer.
//!
//! Services perform the work behind controllers: talking to the upstream search API and
//! reshaping its responses.

pub mod search;
