//! Server application core modules.
//!
//! This module contains all server-side functionality for reposearch: configuration, HTTP
//! routing, the authentication and search controllers, session state, the upstream search
//! service and the JSON error handling shared by all of them.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
