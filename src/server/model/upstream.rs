//! Shape of the upstream repository search API response.
//!
//! Only the fields that end up in [`SearchResultDto`] are modelled; everything else the
//! upstream returns is ignored during deserialization. A missing field fails deserialization.

use serde::{Deserialize, Serialize};

use crate::model::search::{IndexedRepositories, RepositoryDto, SearchResultDto};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpstreamSearchResponse {
    pub total_count: i64,
    pub items: Vec<UpstreamRepository>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpstreamRepository {
    pub name: String,
    pub owner: UpstreamOwner,
    pub html_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpstreamOwner {
    pub login: String,
}

impl From<UpstreamRepository> for RepositoryDto {
    fn from(repository: UpstreamRepository) -> Self {
        RepositoryDto {
            repo_name: repository.name,
            owner_login: repository.owner.login,
            repo_url: repository.html_url,
        }
    }
}

impl From<UpstreamSearchResponse> for SearchResultDto {
    fn from(response: UpstreamSearchResponse) -> Self {
        SearchResultDto {
            total: response.total_count,
            items: IndexedRepositories(response.items.into_iter().map(Into::into).collect()),
        }
    }
}
