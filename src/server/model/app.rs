#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub search_api_url: String,
}

impl From<(reqwest::Client, String)> for AppState {
    fn from((http_client, search_api_url): (reqwest::Client, String)) -> Self {
        Self {
            http_client,
            search_api_url,
        }
    }
}
