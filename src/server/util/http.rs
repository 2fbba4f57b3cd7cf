use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::server::error::Error;

/// Fetch `url` with a single GET request and parse the body as JSON
///
/// No retries; the client's default timeouts apply.
///
/// # Returns
/// - `Ok(T)` - 2xx response whose body deserializes into `T`
/// - `Err(Error::UpstreamError)` - Network failure, non-2xx status, or a body that is not valid
///   JSON for `T`
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    headers: HeaderMap,
) -> Result<T, Error> {
    let body = client
        .get(url)
        .headers(headers)
        .send()
        .await?
        .error_for_status()?
        .json::<T>()
        .await?;

    Ok(body)
}
