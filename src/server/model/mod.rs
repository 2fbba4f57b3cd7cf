//! Server application models.
//!
//! Application state shared by handlers, typed session accessors and the shape of the
//! upstream search API response.

pub mod app;
pub mod session;
pub mod upstream;
