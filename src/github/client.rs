use crate::error::{Result, ScoutError};
use crate::github::types::SearchResponse;
use crate::search::PAGE_SIZE;
use crate::stats::RepoStats;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
    api_base: String,
}

impl GitHubClient {
    pub fn new(api_base: &str) -> Result<Self> {
        let api_base = api_base.trim_end_matches('/').to_string();
        let octo = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .base_uri(api_base.as_str())
            .map_err(|e| ScoutError::Config(format!("invalid api_base {api_base}: {e}")))?
            .build()?;

        Ok(Self { octo, api_base })
    }

    pub fn search_url(&self, query: &str, page: u32) -> String {
        format!(
            "{}/search/repositories?q={}&sort=stars&order=desc&page={}&per_page={}",
            self.api_base,
            urlencoding::encode(query),
            page,
            PAGE_SIZE
        )
    }

    pub fn repo_url(&self, owner: &str, repo: &str) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_base,
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        )
    }

    /// One attempt; any non-2xx collapses to [`ScoutError::HttpStatus`].
    pub async fn search_repositories(&self, query: &str, page: u32) -> Result<SearchResponse> {
        let url = self.search_url(query, page);
        debug!(%url, "search request");

        let response = self.octo._get(url.as_str()).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, query, page, "search request rejected");
            return Err(ScoutError::HttpStatus);
        }

        let body = self.octo.body_to_string(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The status code is ignored: an error payload still decodes and
    /// renders as a record with no usable fields.
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepoStats> {
        let url = self.repo_url(owner, repo);
        debug!(%url, "repository request");

        let response = self.octo._get(url.as_str()).await?;
        debug!(status = %response.status(), owner, repo, "repository response");

        let body = self.octo.body_to_string(response).await?;
        RepoStats::from_json(&body)
    }
}
