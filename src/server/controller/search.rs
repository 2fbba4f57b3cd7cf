use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        OriginalUri, Path, Query, State,
    },
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{HttpErrorDto, InputErrorDto},
        search::SearchResultDto,
    },
    server::{
        controller::util::{keyword::validate_keyword, pagination::Pagination},
        error::Error,
        model::{app::AppState, session::token::SessionToken},
        service::search::SearchService,
    },
};

pub static SEARCH_TAG: &str = "search";

#[derive(Debug, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Items per page, an integer, defaults to 30
    pub per_page: Option<String>,
    /// Page number, an integer, defaults to 1
    pub page: Option<String>,
}

impl From<Vec<(String, String)>> for SearchParams {
    /// Collect pagination parameters from the raw query pairs.
    ///
    /// A repeated parameter resolves to its first occurrence, unknown parameters are ignored.
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();

        for (name, value) in pairs {
            let slot = match name.as_str() {
                "per_page" => &mut params.per_page,
                "page" => &mut params.page,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value);
            }
        }

        params
    }
}

/// Search GitHub repositories by keyword
///
/// Returns the total number of matching repositories and, for the requested page, each
/// repository's name, URL and owner login keyed by position. Searches are authorized with the
/// logged in user's token when there is one.
///
/// # Responses
/// - 200 (OK): Search result
/// - 400 (Bad Request): Keyword contains unencoded URI reserved characters, or `per_page` /
///   `page` is not an integer
/// - 500 (Internal Server Error): The upstream search API request failed
#[utoipa::path(
    get,
    path = "/search/{keyword}",
    tag = SEARCH_TAG,
    params(
        ("keyword" = String, Path, description = "Search keyword without URI reserved characters"),
        SearchParams
    ),
    responses(
        (status = 200, description = "Repositories matching the keyword", body = SearchResultDto),
        (status = 400, description = "Invalid keyword or pagination argument", body = InputErrorDto),
        (status = 500, description = "Upstream search failed", body = HttpErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    keyword: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(keyword) = keyword?;
    let Query(pairs) = query?;
    let params = SearchParams::from(pairs);

    validate_keyword(&keyword, &uri.to_string())?;
    let pagination = Pagination::resolve(params.page, params.per_page)?;

    let token = SessionToken::get(&session).await?;

    let result = SearchService::new(&state.http_client, &state.search_api_url)
        .search(&keyword, &pagination, token.as_deref())
        .await?;

    Ok(Json(result))
}
