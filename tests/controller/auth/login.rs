use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use reposearch::{
    model::user::LoginDto,
    server::{
        controller::auth::login,
        error::{auth::AuthError, Error},
        model::session::{token::SessionToken, user::SessionUsername},
    },
};
use reposearch_test_utils::prelude::*;

use super::login_as;
use crate::util::body_json;

fn login_dto(username: Option<&str>, token: Option<&str>) -> Json<LoginDto> {
    Json(LoginDto {
        username: username.map(str::to_string),
        token: token.map(str::to_string),
    })
}

#[tokio::test]
/// Expect 200 with the username echoed, a Location header, and both values in session
async fn logs_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        test.session.clone(),
        Ok(login_dto(Some(TEST_USERNAME), Some(TEST_TOKEN))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/auth/user");

    let body = body_json(resp).await;
    assert_eq!(body["username"], TEST_USERNAME);

    let username = SessionUsername::get(&test.session).await.unwrap();
    let token = SessionToken::get(&test.session).await.unwrap();
    assert_eq!(username.as_deref(), Some(TEST_USERNAME));
    assert_eq!(token.as_deref(), Some(TEST_TOKEN));

    Ok(())
}

#[tokio::test]
/// Expect 403 when the username is missing from the request body
async fn fails_when_username_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(test.session.clone(), Ok(login_dto(None, Some(TEST_TOKEN)))).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InformationMissing))
    ));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body = body_json(resp).await;
    assert_eq!(body["status_code"], 403);
    assert_eq!(body["name"], "Forbidden");
    assert_eq!(body["message"], "Information missing");

    // Nothing is stored for a rejected login
    assert!(SessionUsername::get(&test.session).await.unwrap().is_none());
    assert!(SessionToken::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 403 when the token is missing from the request body
async fn fails_when_token_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        test.session.clone(),
        Ok(login_dto(Some(TEST_USERNAME), None)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(SessionUsername::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 403 for a second login, leaving the first user's session untouched
async fn fails_when_already_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    login_as(&test.session, TEST_USERNAME, TEST_TOKEN).await;

    let result = login(
        test.session.clone(),
        Ok(login_dto(Some("someone-else"), Some("another-token"))),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::AlreadyLoggedIn))
    ));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "User already logged in");

    let username = SessionUsername::get(&test.session).await.unwrap();
    let token = SessionToken::get(&test.session).await.unwrap();
    assert_eq!(username.as_deref(), Some(TEST_USERNAME));
    assert_eq!(token.as_deref(), Some(TEST_TOKEN));

    Ok(())
}
