use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::input::InputError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User already logged in")]
    AlreadyLoggedIn,
    #[error("Information missing")]
    InformationMissing,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        InputError::forbidden(self.to_string()).into_response()
    }
}
