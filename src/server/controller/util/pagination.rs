use crate::server::error::search::SearchError;

pub const DEFAULT_PER_PAGE: &str = "30";
pub const DEFAULT_PAGE: &str = "1";

/// Pagination forwarded to the upstream search API.
///
/// Values are validated as integers of any size but kept as the strings the client sent, so the
/// upstream receives exactly what was requested. No bounds are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: String,
    pub per_page: String,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE.to_string(),
            per_page: DEFAULT_PER_PAGE.to_string(),
        }
    }
}

impl Pagination {
    /// Resolve `per_page` and `page` query parameters, falling back to defaults when absent.
    ///
    /// `per_page` is checked first, so a request with both parameters invalid reports
    /// `per_page`.
    pub fn resolve(page: Option<String>, per_page: Option<String>) -> Result<Self, SearchError> {
        let per_page = resolve_integer("per_page", per_page, DEFAULT_PER_PAGE)?;
        let page = resolve_integer("page", page, DEFAULT_PAGE)?;

        Ok(Self { page, per_page })
    }
}

fn resolve_integer(
    parameter: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<String, SearchError> {
    match value {
        Some(value) if is_integer(&value) => Ok(value),
        Some(_) => Err(SearchError::InvalidArgument(parameter)),
        None => Ok(default.to_string()),
    }
}

/// Optional sign followed by at least one ASCII digit, with no upper bound on magnitude.
fn is_integer(value: &str) -> bool {
    let digits = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
