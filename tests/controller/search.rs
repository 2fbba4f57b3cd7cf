use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use reposearch::server::{
    controller::search::{search, SearchParams},
    error::{search::SearchError, Error},
    model::app::AppState,
};
use reposearch_test_utils::prelude::*;
use tower_sessions::Session;

use super::auth::login_as;
use crate::util::body_json;

fn no_params() -> SearchParams {
    SearchParams {
        per_page: None,
        page: None,
    }
}

async fn call_search(
    state: AppState,
    session: Session,
    uri: &str,
    keyword: &str,
    params: SearchParams,
) -> Result<axum::response::Response, Error> {
    let uri: Uri = uri.parse().unwrap();

    let mut pairs = Vec::new();
    if let Some(per_page) = params.per_page {
        pairs.push(("per_page".to_string(), per_page));
    }
    if let Some(page) = params.page {
        pairs.push(("page".to_string(), page));
    }

    search(
        State(state),
        session,
        OriginalUri(uri),
        Ok(Path(keyword.to_string())),
        Ok(Query(pairs)),
    )
    .await
    .map(|resp| resp.into_response())
}

#[tokio::test]
/// Expect total and first repository name to match the upstream response
async fn returns_reshaped_search_result() -> Result<(), TestError> {
    let response = factory::search_response(4321, &["tetris", "tetris-clone", "tetris-ai"]);
    let test = TestBuilder::new()
        .with_search_endpoint(TEST_KEYWORD, response, 1)
        .build()
        .await?;

    let result = call_search(
        test.to_app_state(),
        test.session.clone(),
        "/search/tetris",
        TEST_KEYWORD,
        no_params(),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["total"], 4321);
    assert_eq!(body["items"]["0"]["repo_name"], "tetris");
    assert_eq!(body["items"]["0"]["owner_login"], "tetris-owner");
    assert_eq!(
        body["items"]["0"]["repo_url"],
        "https://github.com/tetris-owner/tetris"
    );
    assert_eq!(body["items"]["2"]["repo_name"], "tetris-ai");
    assert_eq!(body["items"].as_object().unwrap().len(), 3);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the logged in user's token to authorize the upstream request
async fn authorizes_search_when_logged_in() -> Result<(), TestError> {
    let response = factory::search_response(1, &["tetris"]);
    let test = TestBuilder::new()
        .with_authorized_search_endpoint(TEST_KEYWORD, TEST_TOKEN, response, 1)
        .build()
        .await?;
    login_as(&test.session, TEST_USERNAME, TEST_TOKEN).await;

    let result = call_search(
        test.to_app_state(),
        test.session.clone(),
        "/search/tetris",
        TEST_KEYWORD,
        no_params(),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect pagination query parameters to be forwarded upstream
async fn forwards_pagination() -> Result<(), TestError> {
    let body = factory::search_response(100, &["tetris"]).to_string();
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", "/search/repositories")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("q".into(), "tetris".into()),
                    Matcher::UrlEncoded("page".into(), "3".into()),
                    Matcher::UrlEncoded("per_page".into(), "10".into()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = call_search(
        test.to_app_state(),
        test.session.clone(),
        "/search/tetris?per_page=10&page=3",
        TEST_KEYWORD,
        SearchParams {
            per_page: Some("10".to_string()),
            page: Some("3".to_string()),
        },
    )
    .await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 for keywords containing reserved characters, without calling upstream
async fn rejects_reserved_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_search_error_endpoint(500, 0).build().await?;

    for keyword in ["tet$ris", "c++", "a,b", "x:y", "me@home", "it's"] {
        let uri = format!("/search/{}", keyword);

        let result = call_search(
            test.to_app_state(),
            test.session.clone(),
            &uri,
            keyword,
            no_params(),
        )
        .await;

        assert!(
            matches!(result, Err(Error::SearchError(SearchError::InvalidKeyword))),
            "keyword {:?} was not rejected",
            keyword
        );
    }
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 when the decoded keyword differs from the raw URL
async fn rejects_percent_encoded_keyword() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = call_search(
        test.to_app_state(),
        test.session.clone(),
        "/search/tetris%20game",
        "tetris game",
        no_params(),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["status_code"], 400);
    assert_eq!(body["name"], "Bad request");
    assert_eq!(
        body["message"],
        "Keyword contains unencoded URI reserved character(s)"
    );

    Ok(())
}

#[tokio::test]
/// Expect 400 naming `page` when it is not an integer
async fn rejects_invalid_page() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = call_search(
        test.to_app_state(),
        test.session.clone(),
        "/search/tetris?page=first",
        TEST_KEYWORD,
        SearchParams {
            per_page: None,
            page: Some("first".to_string()),
        },
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Invalid \"page\" argument value.");
    assert_eq!(body["parameter"], "page");

    Ok(())
}

#[tokio::test]
/// Expect 400 naming `per_page` when it is not an integer
async fn rejects_invalid_per_page() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = call_search(
        test.to_app_state(),
        test.session.clone(),
        "/search/tetris?per_page=lots",
        TEST_KEYWORD,
        SearchParams {
            per_page: Some("lots".to_string()),
            page: None,
        },
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Invalid \"per_page\" argument value.");

    Ok(())
}

#[tokio::test]
/// Expect an opaque 500 when the upstream fails
async fn returns_internal_error_when_upstream_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_search_error_endpoint(502, 1)
        .build()
        .await?;

    let result = call_search(
        test.to_app_state(),
        test.session.clone(),
        "/search/tetris",
        TEST_KEYWORD,
        no_params(),
    )
    .await;

    assert!(matches!(result, Err(Error::UpstreamError(_))));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(resp).await;
    assert_eq!(body["status_code"], 500);
    assert_eq!(body["name"], "Internal Server Error");
    assert!(!body["description"]
        .as_str()
        .unwrap()
        .contains("upstream failure"));
    test.assert_mocks();

    Ok(())
}
