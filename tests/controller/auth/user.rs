use axum::{http::StatusCode, response::IntoResponse};
use reposearch::server::controller::auth::{get_user, logout};
use reposearch_test_utils::prelude::*;
use serde_json::Value;

use super::login_as;
use crate::util::body_json;

#[tokio::test]
/// Expect a null username when nobody is logged in
async fn returns_null_when_not_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_user(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["username"], Value::Null);

    Ok(())
}

#[tokio::test]
/// Expect the logged in username
async fn returns_username_when_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    login_as(&test.session, TEST_USERNAME, TEST_TOKEN).await;

    let resp = get_user(test.session.clone())
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["username"], TEST_USERNAME);

    Ok(())
}

#[tokio::test]
/// Expect a null username again after logout
async fn returns_null_after_logout() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    login_as(&test.session, TEST_USERNAME, TEST_TOKEN).await;
    let _ = logout(test.session.clone()).await.unwrap();

    let resp = get_user(test.session.clone())
        .await
        .unwrap()
        .into_response();

    let body = body_json(resp).await;
    assert_eq!(body["username"], Value::Null);

    Ok(())
}
