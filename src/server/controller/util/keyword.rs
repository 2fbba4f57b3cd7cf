use crate::server::error::search::SearchError;

/// URI reserved characters a keyword may not contain unencoded.
pub const RESERVED_CHARACTERS: [char; 18] = [
    '!', '#', '$', '&', '\'', '(', ')', '*', '+', ',', '/', ':', ';', '=', '?', '@', '[', ']',
];

/// Extract the keyword from the raw request URL: after the last `/`, up to the first `?`.
pub fn raw_keyword(raw_url: &str) -> &str {
    let tail = match raw_url.rfind('/') {
        Some(index) => &raw_url[index + 1..],
        None => raw_url,
    };

    match tail.find('?') {
        Some(index) => &tail[..index],
        None => tail,
    }
}

/// Validate that `keyword` was sent without unencoded URI reserved characters.
///
/// `keyword` is the path segment as decoded by the router and `raw_url` the request URL as
/// received. A reserved character can cut the keyword short without appearing in it, so the
/// decoded keyword must equal the one read from the raw URL. Any percent-encoded keyword
/// differs from its raw form and is rejected as well.
///
/// # Returns
/// - `Ok(())` - Keyword is safe to forward upstream as-is
/// - `Err(SearchError::InvalidKeyword)` - Keyword differs from its raw form or contains a
///   reserved character
pub fn validate_keyword(keyword: &str, raw_url: &str) -> Result<(), SearchError> {
    if keyword != raw_keyword(raw_url) {
        return Err(SearchError::InvalidKeyword);
    }

    if keyword.contains(&RESERVED_CHARACTERS[..]) {
        return Err(SearchError::InvalidKeyword);
    }

    Ok(())
}
