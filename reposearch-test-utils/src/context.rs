//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes a
//! mock upstream search API server, an HTTP client, and an in-memory session.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_USER_AGENT, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the test environment:
/// - Mock upstream search API server
/// - HTTP client and the base URL pointing at the mock server
/// - Session backed by an in-memory store
/// - Collection of mock endpoints for assertion
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_search_endpoint(TEST_KEYWORD, factory::search_response(1, &["tetris"]), 1)
///     .build()
///     .await?;
///
/// let state: AppState = test.to_app_state();
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// HTTP client for upstream requests
    pub http_client: reqwest::Client,
    /// Base URL of the mock upstream search API
    pub search_api_url: String,
    /// Session for test authentication flows
    pub session: Session,

    /// Mock HTTP server for upstream endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert the HTTP client and API URL into any type that can be constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main reposearch crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(reqwest::Client, String)>,
    {
        T::from((self.http_client.clone(), self.search_api_url.clone()))
    }

    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::ReqwestError)` - HTTP client could not be built
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let search_api_url = mock_server.url();

        let http_client = reqwest::Client::builder()
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Ok(TestContext {
            http_client,
            search_api_url,
            session,
            server: mock_server,
            mocks: Vec::new(),
        })
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
