//! Generic HTTP errors.
//!
//! Covers everything the routing layer rejects on its own: unknown routes, wrong methods,
//! extractor rejections and the opaque internal server error. The body mirrors the status line:
//! `{status_code, name, description}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::HttpErrorDto;

pub const NOT_FOUND_DESCRIPTION: &str = "The requested URL was not found on the server. \
    If you entered the URL manually please check your spelling and try again.";
pub const METHOD_NOT_ALLOWED_DESCRIPTION: &str =
    "The method is not allowed for the requested URL.";
pub const INTERNAL_SERVER_ERROR_DESCRIPTION: &str = "The server encountered an internal error \
    and was unable to complete your request. Either the server is overloaded or there is an \
    error in the application.";

#[derive(Error, Debug, Clone)]
#[error("{status}: {description}")]
pub struct HttpError {
    pub status: StatusCode,
    pub description: String,
}

impl HttpError {
    pub fn new(status: StatusCode, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND_DESCRIPTION)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_DESCRIPTION)
    }

    pub fn to_dto(&self) -> HttpErrorDto {
        HttpErrorDto {
            status_code: self.status.as_u16(),
            name: self.status.canonical_reason().unwrap_or("Unknown").to_string(),
            description: self.description.clone(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if !self.status.is_server_error() {
            tracing::debug!("{}", self);
        }

        (self.status, Json(self.to_dto())).into_response()
    }
}

/// Fallback handler for requests that match no route
pub async fn not_found() -> HttpError {
    HttpError::not_found()
}

/// Fallback handler for requests to a known route with an unsupported method
pub async fn method_not_allowed() -> HttpError {
    HttpError::method_not_allowed()
}
