//! Constant values shared across tests.
//!
//! None of these are real credentials.

/// User agent string for test HTTP client requests.
pub static TEST_USER_AGENT: &str = "reposearch-tests/1.0 (contact@example.com)";

/// Username used when logging in during tests.
pub static TEST_USERNAME: &str = "user123";

/// Placeholder GitHub personal access token used when logging in during tests.
pub static TEST_TOKEN: &str = "user123-token-456";

/// Keyword used for search requests during tests.
pub static TEST_KEYWORD: &str = "tetris";
