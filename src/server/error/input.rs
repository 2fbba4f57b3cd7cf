//! Invalid user input error.
//!
//! [`InputError`] is the single user-facing error shape for input the server refuses to act on.
//! Its body carries the status code, a fixed name for that status and a message. An optional
//! payload is merged into the body for callers that need to point at a specific field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::api::InputErrorDto;

#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct InputError {
    status_code: StatusCode,
    message: String,
    payload: Option<Map<String, Value>>,
}

impl InputError {
    /// Input error answered with `400 Bad Request`
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            message: message.into(),
            payload: None,
        }
    }

    /// Input error answered with `403 Forbidden`
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::FORBIDDEN,
            message: message.into(),
            payload: None,
        }
    }

    /// Adds a field to the payload merged into the response body.
    ///
    /// The `status_code`, `name` and `message` keys always take precedence over payload entries
    /// of the same name.
    pub fn with_payload(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Fixed name reported for the status code.
    pub fn name(&self) -> &'static str {
        match self.status_code {
            StatusCode::BAD_REQUEST => "Bad request",
            StatusCode::FORBIDDEN => "Forbidden",
            other => other.canonical_reason().unwrap_or("Unknown"),
        }
    }

    /// Builds the JSON body: payload first, then the fixed keys on top.
    pub fn to_body(&self) -> Map<String, Value> {
        let mut body = self.payload.clone().unwrap_or_default();

        let dto = InputErrorDto {
            status_code: self.status_code.as_u16(),
            name: self.name().to_string(),
            message: self.message.clone(),
        };
        if let Ok(Value::Object(fields)) = serde_json::to_value(dto) {
            body.extend(fields);
        }

        body
    }
}

impl IntoResponse for InputError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status_code, "Rejected user input: {}", self.message);

        (self.status_code, Json(Value::Object(self.to_body()))).into_response()
    }
}
