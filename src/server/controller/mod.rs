//! HTTP controller endpoints.
//!
//! Axum handlers for authentication and repository search. Controllers extract and validate
//! request input, read and write the session, call services and map results to responses.
//! Endpoints are documented for OpenAPI with utoipa.

pub mod auth;
pub mod search;
pub mod util;
