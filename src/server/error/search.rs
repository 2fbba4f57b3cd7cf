use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::input::InputError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("Keyword contains unencoded URI reserved character(s)")]
    InvalidKeyword,
    /// Query parameter present but not an integer
    #[error("Invalid \"{0}\" argument value.")]
    InvalidArgument(&'static str),
}

impl From<SearchError> for InputError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidKeyword => InputError::bad_request(err.to_string()),
            SearchError::InvalidArgument(parameter) => {
                InputError::bad_request(err.to_string()).with_payload("parameter", parameter)
            }
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        InputError::from(self).into_response()
    }
}
