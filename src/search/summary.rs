use crate::github::types::SearchItem;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

pub const INVALID_DATE: &str = "Invalid Date";

/// One search hit, decoupled from the upstream payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub last_updated_display: String,
    pub url: String,
}

impl RepositorySummary {
    pub fn from_item(item: SearchItem, date_format: &str) -> Self {
        Self::from_item_in(item, date_format, &Local)
    }

    pub fn from_item_in<Tz>(item: SearchItem, date_format: &str, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let last_updated_display = item
            .updated_at
            .as_deref()
            .map(|raw| format_date(raw, date_format, tz))
            .unwrap_or_else(|| INVALID_DATE.to_string());

        Self {
            name: item.name.unwrap_or_default(),
            description: item.description,
            stars: item.stargazers_count.unwrap_or_default(),
            forks: item.forks_count.unwrap_or_default(),
            open_issues: item.open_issues_count.unwrap_or_default(),
            last_updated_display,
            url: item.html_url.unwrap_or_default(),
        }
    }

    /// `None` and `Some("")` both mean "draw no description".
    pub fn visible_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

pub fn format_date<Tz>(raw: &str, date_format: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Ok(t) = DateTime::parse_from_rfc3339(raw) else {
        return INVALID_DATE.to_string();
    };
    // a bad strftime pattern surfaces as fmt::Error, not a panic
    let mut out = String::new();
    match write!(out, "{}", t.with_timezone(tz).format(date_format)) {
        Ok(()) => out,
        Err(_) => INVALID_DATE.to_string(),
    }
}
