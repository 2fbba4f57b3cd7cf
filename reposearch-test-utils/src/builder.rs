//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and executed during the final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up mock upstream search endpoints and custom HTTP endpoints. Methods can be chained
/// together and finalized with `build()`.
pub struct TestBuilder {
    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    search_endpoints: Vec<(String, Value, usize)>, // (keyword, response, expected_requests)
    authorized_search_endpoints: Vec<(String, String, Value, usize)>, // (keyword, token, response, expected_requests)
    search_error_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            search_endpoints: Vec::new(),
            authorized_search_endpoints: Vec::new(),
            search_error_endpoints: Vec::new(),
        }
    }

    /// Add an unauthenticated upstream search endpoint to the test server.
    ///
    /// The mock only matches requests without an `Authorization` header and will verify it
    /// was called exactly `expected_requests` times.
    ///
    /// # Arguments
    /// - `keyword` - Expected search keyword
    /// - `response` - Upstream JSON body, see [`factory::search_response`](crate::fixtures::search::factory::search_response)
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_search_endpoint(
        mut self,
        keyword: impl Into<String>,
        response: Value,
        expected_requests: usize,
    ) -> Self {
        self.search_endpoints
            .push((keyword.into(), response, expected_requests));
        self
    }

    /// Add an upstream search endpoint that requires `Authorization: token <token>`.
    pub fn with_authorized_search_endpoint(
        mut self,
        keyword: impl Into<String>,
        token: impl Into<String>,
        response: Value,
        expected_requests: usize,
    ) -> Self {
        self.authorized_search_endpoints.push((
            keyword.into(),
            token.into(),
            response,
            expected_requests,
        ));
        self
    }

    /// Add an upstream search endpoint answering every query with `status`.
    pub fn with_search_error_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.search_error_endpoints.push((status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Provides direct access to the mockito ServerGuard for endpoints not covered by the
    /// helper methods.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context, creating all configured mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::ReqwestError)` - HTTP client initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        // Custom endpoints are created first so tests registering several mocks for the same
        // path get predictable mockito matching order
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for (keyword, response, expected) in self.search_endpoints {
            mocks.push(
                context
                    .search()
                    .create_search_endpoint(&keyword, response, expected),
            );
        }

        for (keyword, token, response, expected) in self.authorized_search_endpoints {
            mocks.push(context.search().create_authorized_search_endpoint(
                &keyword, &token, response, expected,
            ));
        }

        for (status, expected) in self.search_error_endpoints {
            mocks.push(
                context
                    .search()
                    .create_search_error_endpoint(status, expected),
            );
        }

        context.mocks = mocks;

        Ok(context)
    }
}
