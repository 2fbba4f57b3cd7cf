use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    /// Username of the logged in user, `null` when nobody is logged in
    pub username: Option<String>,
}

/// Login request body
///
/// Both fields are optional at the deserialization level so that a missing field
/// produces a `403 Forbidden` rather than an extractor rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: Option<String>,
    /// GitHub personal access token used for searches made while logged in
    pub token: Option<String>,
}
