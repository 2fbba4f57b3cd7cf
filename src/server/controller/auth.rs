use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::{HttpErrorDto, InputErrorDto},
        user::{LoginDto, UserDto},
    },
    server::{
        error::{auth::AuthError, Error},
        model::session::{token::SessionToken, user::SessionUsername},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in with a username and GitHub personal access token
///
/// Stores both values in the session. Searches made while logged in are authorized with the
/// token.
///
/// # Responses
/// - 200 (OK): Logged in, body echoes the username, `Location` points to `/auth/user`
/// - 403 (Forbidden): A user is already logged in, or username or token is missing
/// - 4xx: Request body is not JSON
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto,
            headers(("Location" = String, description = "Always /auth/user"))),
        (status = 403, description = "Already logged in or information missing", body = InputErrorDto),
        (status = 415, description = "Request body is not JSON", body = HttpErrorDto)
    ),
)]
pub async fn login(
    session: Session,
    body: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    if SessionUsername::get(&session).await?.is_some() {
        return Err(AuthError::AlreadyLoggedIn.into());
    }

    let Json(login) = body?;

    let (Some(username), Some(token)) = (login.username, login.token) else {
        return Err(AuthError::InformationMissing.into());
    };

    SessionUsername::insert(&session, &username).await?;
    SessionToken::insert(&session, &token).await?;

    tracing::info!(username = %username, "User logged in");

    Ok((
        StatusCode::OK,
        [(header::LOCATION, "/auth/user")],
        Json(UserDto {
            username: Some(username),
        }),
    ))
}

/// Get the username of the logged in user
///
/// # Responses
/// - 200 (OK): `{"username": <name>}`, or `{"username": null}` when nobody is logged in
#[utoipa::path(
    get,
    path = "/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Username of the logged in user or null", body = UserDto)
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, Error> {
    let username = SessionUsername::get(&session).await?;

    Ok(Json(UserDto { username }))
}

/// Log out by removing the username and token from the session
///
/// Succeeds whether or not a user is logged in.
///
/// # Responses
/// - 200 (OK): Logged out, empty body
#[utoipa::path(
    get,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_username = SessionUsername::remove(&session).await?;
    SessionToken::remove(&session).await?;

    if let Some(username) = maybe_username {
        tracing::info!(username = %username, "User logged out");
    }

    Ok(StatusCode::OK)
}
