//! Error types for the reposearch server.
//!
//! Domain errors (authentication, search input, configuration) are kept in their own enums and
//! aggregated into [`Error`], which handlers return. Every error implements `IntoResponse` so a
//! handler's `Err` is converted to a JSON response exactly once, at the handler boundary.

pub mod auth;
pub mod config;
pub mod http;
pub mod input;
pub mod search;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{
    auth::AuthError, config::ConfigError, http::HttpError, input::InputError, search::SearchError,
};

/// Main error type for the reposearch server.
///
/// Uses `thiserror`'s `#[from]` so domain and library errors convert with `?`.
///
/// # Error Categories
/// - User input errors (authentication state, search keyword & pagination)
/// - Generic HTTP errors (extractor rejections, unknown routes)
/// - Internal errors (configuration, upstream search API, session store, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (already logged in, login information missing).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Search request error (reserved characters in keyword, invalid pagination).
    #[error(transparent)]
    SearchError(#[from] SearchError),
    /// Invalid user input not covered by a domain specific error.
    #[error(transparent)]
    InputError(#[from] InputError),
    /// Generic HTTP error raised by the routing layer or an extractor.
    #[error(transparent)]
    HttpError(#[from] HttpError),
    /// Upstream search API error (network failure, non-2xx status, malformed body).
    #[error(transparent)]
    UpstreamError(#[from] reqwest::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid search keyword or pagination argument
/// - 403 Forbidden - Login while logged in, or login information missing
/// - 4xx - Rejections from the routing layer and extractors
/// - 500 Internal Server Error - All other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::SearchError(err) => err.into_response(),
            Self::InputError(err) => err.into_response(),
            Self::HttpError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::new(rejection.status(), rejection.body_text()).into()
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        HttpError::new(rejection.status(), rejection.body_text()).into()
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::new(rejection.status(), rejection.body_text()).into()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error message is logged; the client only receives the generic HTTP error body so no
/// upstream or session details leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        HttpError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            http::INTERNAL_SERVER_ERROR_DESCRIPTION,
        )
        .into_response()
    }
}
