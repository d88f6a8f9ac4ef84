#![cfg(test)]

use crate::github::types::SearchItem;
use crate::search::fetcher::{total_pages, FetchedPage};
use crate::search::summary::RepositorySummary;

pub fn make_item(name: &str) -> SearchItem {
    SearchItem {
        name: Some(name.to_string()),
        description: Some(format!("{name} description")),
        stargazers_count: Some(100),
        forks_count: Some(10),
        open_issues_count: Some(1),
        updated_at: Some("2024-03-05T10:00:00Z".to_string()),
        html_url: Some(format!("https://github.com/example/{name}")),
    }
}

pub fn make_summary(name: &str) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        stars: 100,
        forks: 10,
        open_issues: 1,
        last_updated_display: "3/5/2024".to_string(),
        url: format!("https://github.com/example/{name}"),
    }
}

/// A page of `count` results out of `total_count` matches.
pub fn make_page(total_count: u64, count: usize) -> FetchedPage {
    FetchedPage {
        total_pages: total_pages(total_count),
        summaries: (0..count).map(|i| make_summary(&format!("repo-{i}"))).collect(),
    }
}
