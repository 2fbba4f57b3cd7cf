//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers every API endpoint together with its utoipa OpenAPI documentation and installs
//! the JSON fallbacks for unknown routes and unsupported methods.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, error::http, model::app::AppState};

/// Path the OpenAPI document is served at.
pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `POST /auth/login` - Store username & token in session
/// - `GET /auth/user` - Get the logged in username
/// - `GET /auth/logout` - Clear username & token from session
/// - `GET /search/{keyword}` - Keyword repository search
/// - `GET /api/docs/openapi.json` - OpenAPI document for the endpoints above
///
/// Requests matching no route get a JSON 404, requests with an unsupported method a JSON 405.
///
/// # Returns
/// A `Router<AppState>`; the caller provides the state and the session layer.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(app_state).layer(session_layer);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "reposearch", description = "Repository search API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::search::SEARCH_TAG, description = "Repository search API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::search::search))
        .split_for_parts();

    routes
        .route(
            OPENAPI_PATH,
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
        .fallback(http::not_found)
        .method_not_allowed_fallback(http::method_not_allowed)
}
