//! Upstream search API mock endpoint creation utilities.
//!
//! Endpoints are registered with the mockito server and verify they were called the expected
//! number of times.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::search::SearchFixtures;

/// Media type every upstream search request must accept.
pub static UPSTREAM_ACCEPT: &str = "application/vnd.github+json";

impl<'a> SearchFixtures<'a> {
    /// Create a mock endpoint for an unauthenticated keyword search.
    ///
    /// Matches `GET /search/repositories` with `q=<keyword>`, the upstream `Accept` header and
    /// no `Authorization` header.
    ///
    /// # Arguments
    /// - `keyword` - Expected `q` query parameter
    /// - `response` - JSON body returned by the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_search_endpoint(
        &mut self,
        keyword: &str,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::UrlEncoded("q".into(), keyword.into()))
            .match_header("accept", UPSTREAM_ACCEPT)
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for a keyword search authorized with `token`.
    ///
    /// Matches `GET /search/repositories` with `q=<keyword>`, the upstream `Accept` header and
    /// `Authorization: token <token>`.
    pub fn create_authorized_search_endpoint(
        &mut self,
        keyword: &str,
        token: &str,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::UrlEncoded("q".into(), keyword.into()))
            .match_header("accept", UPSTREAM_ACCEPT)
            .match_header("authorization", format!("token {}", token).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock search endpoint that fails with `status` for any query.
    pub fn create_search_error_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.context
            .server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "upstream failure"}"#)
            .expect(expected_requests)
            .create()
    }
}
