use serde_json::{json, Value};

/// Create a mock upstream repository with default test values.
///
/// The owner login is `<name>-owner`; extra fields the upstream returns are included so
/// tests cover ignoring them.
///
/// # Arguments
/// - `name` - Repository name
///
/// # Returns
/// - `Value` - A repository object as returned by the upstream search API
pub fn repository(name: &str) -> Value {
    let owner = format!("{}-owner", name);

    json!({
        "id": 1,
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "owner": {
            "login": owner,
            "id": 2,
            "type": "User"
        },
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "description": "string",
        "stargazers_count": 0
    })
}

/// Create a mock upstream search response.
///
/// # Arguments
/// - `total_count` - Total number of matches reported upstream
/// - `names` - Names of the repositories on the returned page, in order
///
/// # Returns
/// - `Value` - A search response as returned by the upstream search API
pub fn search_response(total_count: i64, names: &[&str]) -> Value {
    let items: Vec<Value> = names.iter().map(|name| repository(name)).collect();

    json!({
        "total_count": total_count,
        "incomplete_results": false,
        "items": items
    })
}
