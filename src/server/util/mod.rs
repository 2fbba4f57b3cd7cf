//! Utility functions shared by server services.

pub mod http;
