use crate::error::Result;
use crate::github::client::GitHubClient;
use crate::github::types::SearchResponse;
use crate::search::summary::RepositorySummary;
use crate::search::PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub total_pages: u32,
    pub summaries: Vec<RepositorySummary>,
}

impl FetchedPage {
    pub fn from_response(resp: SearchResponse, date_format: &str) -> Self {
        Self {
            total_pages: total_pages(resp.total_count),
            summaries: resp
                .items
                .into_iter()
                .map(|item| RepositorySummary::from_item(item, date_format))
                .collect(),
        }
    }
}

pub fn total_pages(total_count: u64) -> u32 {
    let pages = total_count.div_ceil(u64::from(PAGE_SIZE));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

pub async fn fetch_repositories(
    client: &GitHubClient,
    query: &str,
    page: u32,
    date_format: &str,
) -> Result<FetchedPage> {
    let resp = client.search_repositories(query, page).await?;
    Ok(FetchedPage::from_response(resp, date_format))
}
