use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// Simplified repository search result
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct SearchResultDto {
    /// Total number of repositories matching the keyword upstream
    pub total: i64,
    /// Repositories of the requested page keyed by their zero-based position
    #[schema(value_type = std::collections::HashMap<String, RepositoryDto>)]
    pub items: IndexedRepositories,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RepositoryDto {
    pub repo_name: String,
    pub owner_login: String,
    pub repo_url: String,
}

/// Repositories serialized as a JSON object keyed by `"0"`, `"1"`, ...
///
/// Entries keep the order they were received in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexedRepositories(pub Vec<RepositoryDto>);

impl IndexedRepositories {
    pub fn get(&self, index: &str) -> Option<&RepositoryDto> {
        index.parse::<usize>().ok().and_then(|i| self.0.get(i))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for IndexedRepositories {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, repository) in self.0.iter().enumerate() {
            map.serialize_entry(&index.to_string(), repository)?;
        }
        map.end()
    }
}
