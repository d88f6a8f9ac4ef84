use crate::error::Result;
use crate::github::client::GitHubClient;
use serde_json::{Map, Value};
use tracing::{info, warn};

pub const PLACEHOLDER: &str = "Not Available";
const COVERAGE_TOPIC: &str = "code-coverage";

/// Whatever `GET /repos/{owner}/{repo}` returned, untouched. Fields are
/// looked up and defaulted one at a time when rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoStats(Map<String, Value>);

impl RepoStats {
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Ok(match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        })
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| is_truthy(v))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// `null`, `false`, `0`, `""` and absence count as missing; empty arrays
/// and objects do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn plain(stats: &RepoStats, key: &str) -> String {
    stats.field(key).map(display).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Element count of an array or character count of a string. Any other
/// value has no length and falls back to the placeholder.
fn length(stats: &RepoStats, key: &str) -> String {
    match stats.field(key) {
        Some(Value::Array(items)) => items.len().to_string(),
        Some(Value::String(s)) => s.chars().count().to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn coverage(stats: &RepoStats) -> String {
    match stats.field("topics") {
        Some(Value::Array(topics)) => {
            let found = topics.iter().any(|t| t.as_str() == Some(COVERAGE_TOPIC));
            let answer = if found { "Yes" } else { "No" };
            answer.to_string()
        }
        Some(_) => "No".to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// The nine lines of the stats panel, in display order.
pub fn stat_lines(stats: &RepoStats) -> Vec<StatLine> {
    let line = |icon, label, value| StatLine { icon, label, value };
    vec![
        line("\u{2b50}", "Stars", plain(stats, "stargazers_count")),
        line("\u{1f374}", "Forks", plain(stats, "forks_count")),
        line("\u{1f440}", "Watchers", plain(stats, "subscribers_count")),
        line("\u{26a0}\u{fe0f}", "Open Issues", plain(stats, "open_issues_count")),
        line("\u{1f4c8}", "Code Frequency", length(stats, "code_frequency")),
        line("\u{1f465}", "Contributors", plain(stats, "contributors_url")),
        line("\u{270f}\u{fe0f}", "Commits", length(stats, "commits")),
        line("\u{1f504}", "Pull Requests", length(stats, "pulls")),
        line("\u{2705}", "Code Coverage", coverage(stats)),
    ]
}

/// What the stats panel currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatsView {
    #[default]
    Empty,
    Loaded {
        owner: String,
        repo: String,
        lines: Vec<StatLine>,
    },
    Failed(String),
}

impl StatsView {
    pub fn from_outcome(owner: &str, repo: &str, outcome: Result<RepoStats>) -> Self {
        match outcome {
            Ok(stats) => {
                info!(owner, repo, "stats rendered");
                StatsView::Loaded {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                    lines: stat_lines(&stats),
                }
            }
            Err(e) => {
                warn!(owner, repo, error = %e, "stats lookup failed");
                StatsView::Failed(format!("Error: {e}"))
            }
        }
    }

    pub fn title(&self) -> Option<String> {
        match self {
            StatsView::Loaded { owner, repo, .. } => Some(format!("Stats for {owner}/{repo}")),
            _ => None,
        }
    }
}

pub async fn get_repo_stats(client: &GitHubClient, owner: &str, repo: &str) -> Result<RepoStats> {
    client.get_repository(owner, repo).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutError;

    fn stats(body: &str) -> RepoStats {
        RepoStats::from_json(body).unwrap()
    }

    fn values(stats: &RepoStats) -> Vec<String> {
        stat_lines(stats).into_iter().map(|l| l.value).collect()
    }

    #[test]
    fn nine_lines_in_fixed_order() {
        let labels: Vec<&str> = stat_lines(&RepoStats::default())
            .iter()
            .map(|l| l.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Stars",
                "Forks",
                "Watchers",
                "Open Issues",
                "Code Frequency",
                "Contributors",
                "Commits",
                "Pull Requests",
                "Code Coverage",
            ]
        );
    }

    #[test]
    fn empty_record_is_all_placeholders() {
        assert!(values(&RepoStats::default()).iter().all(|v| v == PLACEHOLDER));
    }

    #[test]
    fn real_repository_payload() {
        let s = stats(
            r#"{
                "stargazers_count": 1200,
                "forks_count": 80,
                "subscribers_count": 40,
                "open_issues_count": 7,
                "contributors_url": "https://api.github.com/repos/o/r/contributors",
                "topics": ["rust", "code-coverage"]
            }"#,
        );
        assert_eq!(
            values(&s),
            vec![
                "1200",
                "80",
                "40",
                "7",
                PLACEHOLDER,
                "https://api.github.com/repos/o/r/contributors",
                PLACEHOLDER,
                PLACEHOLDER,
                "Yes",
            ]
        );
    }

    #[test]
    fn zero_counts_show_placeholder() {
        let s = stats(r#"{"stargazers_count": 0, "forks_count": null, "open_issues_count": 0}"#);
        let v = values(&s);
        assert_eq!(v[0], PLACEHOLDER);
        assert_eq!(v[1], PLACEHOLDER);
        assert_eq!(v[3], PLACEHOLDER);
    }

    #[test]
    fn empty_string_contributors_show_placeholder() {
        let s = stats(r#"{"contributors_url": ""}"#);
        assert_eq!(values(&s)[5], PLACEHOLDER);
    }

    #[test]
    fn topics_without_coverage_tag_say_no() {
        assert_eq!(values(&stats(r#"{"topics": ["cli"]}"#))[8], "No");
        assert_eq!(values(&stats(r#"{"topics": []}"#))[8], "No");
        assert_eq!(values(&stats(r#"{"topics": null}"#))[8], PLACEHOLDER);
    }

    #[test]
    fn list_fields_report_length_when_present() {
        let s = stats(r#"{"code_frequency": [[1, 2, 3]], "commits": [], "pulls": [1, 2]}"#);
        let v = values(&s);
        assert_eq!(v[4], "1");
        assert_eq!(v[6], "0");
        assert_eq!(v[7], "2");
    }

    #[test]
    fn list_field_with_scalar_or_object_shows_placeholder() {
        let s = stats(r#"{"code_frequency": 12, "commits": {"total": 3}, "pulls": true}"#);
        let v = values(&s);
        assert_eq!(v[4], PLACEHOLDER);
        assert_eq!(v[6], PLACEHOLDER);
        assert_eq!(v[7], PLACEHOLDER);
    }

    #[test]
    fn not_found_payload_renders_placeholders() {
        let s = stats(r#"{"message": "Not Found", "documentation_url": "https://docs.github.com"}"#);
        let v = values(&s);
        assert!(v.iter().all(|x| x == PLACEHOLDER));
    }

    #[test]
    fn non_object_json_is_empty_record() {
        assert_eq!(stats("[1, 2, 3]"), RepoStats::default());
    }

    #[test]
    fn invalid_json_is_error() {
        assert!(matches!(
            RepoStats::from_json("<!doctype html>"),
            Err(ScoutError::Transport(_))
        ));
    }

    #[test]
    fn failure_view_is_single_error_line() {
        let view = StatsView::from_outcome("o", "r", Err(ScoutError::Transport("dns failure".into())));
        assert_eq!(view, StatsView::Failed("Error: dns failure".to_string()));
        assert_eq!(view.title(), None);
    }

    #[test]
    fn loaded_view_has_title() {
        let view = StatsView::from_outcome("rust-lang", "rust", Ok(RepoStats::default()));
        assert_eq!(view.title().as_deref(), Some("Stats for rust-lang/rust"));
    }
}
