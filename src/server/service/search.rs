use dioxus_logger::tracing;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

use crate::{
    model::search::SearchResultDto,
    server::{
        controller::util::pagination::Pagination,
        error::{input::InputError, Error},
        model::upstream::UpstreamSearchResponse,
        util::http::get_json,
    },
};

/// Media type requested from the upstream search API.
pub const UPSTREAM_ACCEPT: &str = "application/vnd.github+json";

/// Service proxying keyword searches to the upstream repository search API.
pub struct SearchService<'a> {
    http_client: &'a reqwest::Client,
    search_api_url: &'a str,
}

impl<'a> SearchService<'a> {
    /// Creates a new instance of SearchService.
    ///
    /// # Arguments
    /// - `http_client` - Client used for upstream requests
    /// - `search_api_url` - Base URL of the upstream API, without trailing slash
    pub fn new(http_client: &'a reqwest::Client, search_api_url: &'a str) -> Self {
        Self {
            http_client,
            search_api_url,
        }
    }

    /// Builds the upstream repository search URL.
    ///
    /// The keyword is inserted as-is; callers validate it beforehand.
    pub fn search_url(&self, keyword: &str, pagination: &Pagination) -> String {
        format!(
            "{}/search/repositories?q={}&page={}&per_page={}",
            self.search_api_url, keyword, pagination.page, pagination.per_page
        )
    }

    /// Searches upstream repositories by keyword and reshapes the result.
    ///
    /// Performs a single GET request. When `token` is provided it is sent as
    /// `Authorization: token <token>`, otherwise the request is unauthenticated.
    ///
    /// # Arguments
    /// - `keyword` - Validated search keyword
    /// - `pagination` - Page and page size forwarded unchanged
    /// - `token` - Upstream access token of the logged in user, if any
    ///
    /// # Returns
    /// - `Ok(SearchResultDto)` - Total count and indexed repositories in upstream order
    /// - `Err(Error::UpstreamError)` - Request failed, non-2xx status, or unexpected body
    /// - `Err(Error::InputError)` - Token cannot be used as a header value
    pub async fn search(
        &self,
        keyword: &str,
        pagination: &Pagination,
        token: Option<&str>,
    ) -> Result<SearchResultDto, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(UPSTREAM_ACCEPT));

        if let Some(token) = token {
            let authorization = HeaderValue::from_str(&format!("token {}", token)).map_err(|_| {
                InputError::bad_request("Stored token contains characters not allowed in a header")
            })?;
            headers.insert(AUTHORIZATION, authorization);
        }

        let url = self.search_url(keyword, pagination);

        tracing::debug!(
            keyword = %keyword,
            page = %pagination.page,
            per_page = %pagination.per_page,
            authenticated = token.is_some(),
            "Searching upstream repositories"
        );

        let response: UpstreamSearchResponse = get_json(self.http_client, &url, headers).await?;

        Ok(response.into())
    }
}
