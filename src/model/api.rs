use serde::{Deserialize, Serialize};

/// The response when a request is rejected by the router or an extractor
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HttpErrorDto {
    /// HTTP status code, echoed from the status line
    pub status_code: u16,
    /// Canonical reason phrase of the status code
    pub name: String,
    /// Human readable explanation of the error
    pub description: String,
}

/// The response when user input is rejected
///
/// Additional payload fields may be present alongside the ones listed here.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct InputErrorDto {
    /// HTTP status code, echoed from the status line
    pub status_code: u16,
    /// Fixed name of the status code ("Bad request" or "Forbidden")
    pub name: String,
    /// The error message
    pub message: String,
}
