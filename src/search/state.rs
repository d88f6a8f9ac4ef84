use crate::error::Result;
use crate::search::fetcher::FetchedPage;
use crate::search::pagination::{page_controls, PageControl};
use crate::search::summary::RepositorySummary;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            total_pages: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: String,
    pub page: u32,
}

/// Owns the query/page state and the retained output of the last completed
/// flow. Overlapping requests are never cancelled; completions are applied
/// in arrival order.
#[derive(Debug, Default)]
pub struct SearchController {
    state: SearchState,
    phase: Phase,
    issued: u64,
    in_flight: usize,
    results: Vec<RepositorySummary>,
    pagination: Vec<PageControl>,
    error: Option<String>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn results(&self) -> &[RepositorySummary] {
        &self.results
    }

    pub fn pagination(&self) -> &[PageControl] {
        &self.pagination
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submit_query(&mut self, text: &str) -> FetchRequest {
        self.state.query = text.to_string();
        self.state.current_page = 1;
        self.begin()
    }

    pub fn select_page(&mut self, page: u32) -> FetchRequest {
        self.state.current_page = page;
        self.begin()
    }

    fn begin(&mut self) -> FetchRequest {
        self.issued += 1;
        self.in_flight += 1;
        self.phase = Phase::Loading;
        let req = FetchRequest {
            seq: self.issued,
            query: self.state.query.clone(),
            page: self.state.current_page,
        };
        info!(seq = req.seq, query = %req.query, page = req.page, "search issued");
        req
    }

    pub fn complete(&mut self, seq: u64, outcome: Result<FetchedPage>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if seq < self.issued {
            debug!(seq, latest = self.issued, "applying completion of an older search");
        }

        match outcome {
            Ok(page) => {
                self.phase = Phase::Success;
                self.state.total_pages = page.total_pages;
                self.results = page.summaries;
                self.pagination = page_controls(self.state.current_page, self.state.total_pages);
                info!(seq, results = self.results.len(), total_pages = self.state.total_pages, "search rendered");
            }
            Err(e) => {
                self.phase = Phase::Failed;
                self.results.clear();
                self.pagination.clear();
                warn!(seq, error = %e, "search failed");
                self.error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutError;
    use crate::test_utils::{make_page, make_summary};

    #[test]
    fn starts_idle_on_page_one() {
        let c = SearchController::new();
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.state().current_page, 1);
        assert_eq!(c.state().total_pages, 0);
        assert!(c.results().is_empty());
    }

    #[test]
    fn submit_resets_page_to_one() {
        let mut c = SearchController::new();
        let req = c.submit_query("rust");
        c.complete(req.seq, Ok(make_page(50, 10)));
        let req = c.select_page(4);
        c.complete(req.seq, Ok(make_page(50, 10)));
        assert_eq!(c.state().current_page, 4);

        let req = c.submit_query("go");
        assert_eq!(req.page, 1);
        assert_eq!(req.query, "go");
        assert_eq!(c.state().current_page, 1);
        assert_eq!(c.phase(), Phase::Loading);
    }

    #[test]
    fn select_page_keeps_query() {
        let mut c = SearchController::new();
        let req = c.submit_query("tui");
        c.complete(req.seq, Ok(make_page(30, 10)));

        let req = c.select_page(3);
        assert_eq!(req.query, "tui");
        assert_eq!(req.page, 3);
        assert_eq!(c.state().query, "tui");
        assert_eq!(c.state().current_page, 3);
    }

    #[test]
    fn success_records_total_pages_and_marks_active_control() {
        let mut c = SearchController::new();
        let req = c.submit_query("x");
        c.complete(req.seq, Ok(make_page(95, 10)));
        assert_eq!(c.phase(), Phase::Success);
        assert_eq!(c.state().total_pages, 10);
        assert_eq!(c.results().len(), 10);
        assert_eq!(c.pagination().len(), 10);

        let req = c.select_page(7);
        c.complete(req.seq, Ok(make_page(95, 5)));
        let active: Vec<u32> = c.pagination().iter().filter(|p| p.active).map(|p| p.page).collect();
        assert_eq!(active, vec![7]);
    }

    #[test]
    fn single_page_result_has_no_controls() {
        let mut c = SearchController::new();
        let req = c.submit_query("tiny");
        c.complete(req.seq, Ok(make_page(4, 4)));
        assert_eq!(c.state().total_pages, 1);
        assert!(c.pagination().is_empty());
        assert_eq!(c.results().len(), 4);
    }

    #[test]
    fn failure_clears_results_and_pagination() {
        let mut c = SearchController::new();
        let req = c.submit_query("x");
        c.complete(req.seq, Ok(make_page(40, 10)));

        let req = c.select_page(2);
        c.complete(req.seq, Err(ScoutError::HttpStatus));
        assert_eq!(c.phase(), Phase::Failed);
        assert!(c.results().is_empty());
        assert!(c.pagination().is_empty());
        assert_eq!(c.error(), Some("Failed to fetch repositories"));
    }

    #[test]
    fn transport_error_text_is_verbatim() {
        let mut c = SearchController::new();
        let req = c.submit_query("x");
        c.complete(req.seq, Err(ScoutError::Transport("connection refused".into())));
        assert_eq!(c.error(), Some("connection refused"));
    }

    #[test]
    fn error_persists_after_later_success() {
        let mut c = SearchController::new();
        let req = c.submit_query("x");
        c.complete(req.seq, Err(ScoutError::HttpStatus));
        let req = c.submit_query("x");
        c.complete(req.seq, Ok(make_page(20, 10)));
        assert_eq!(c.phase(), Phase::Success);
        assert_eq!(c.error(), Some("Failed to fetch repositories"));
        assert_eq!(c.results().len(), 10);
    }

    #[test]
    fn last_completion_wins_even_if_issued_first() {
        let mut c = SearchController::new();
        let first = c.submit_query("first");
        let second = c.submit_query("second");
        assert_eq!(c.in_flight(), 2);

        let newer = FetchedPage {
            total_pages: 3,
            summaries: vec![make_summary("from-second")],
        };
        let older = FetchedPage {
            total_pages: 8,
            summaries: vec![make_summary("from-first")],
        };
        c.complete(second.seq, Ok(newer));
        c.complete(first.seq, Ok(older));

        assert_eq!(c.in_flight(), 0);
        assert_eq!(c.results()[0].name, "from-first");
        assert_eq!(c.state().total_pages, 8);
        assert_eq!(c.state().query, "second");
    }

    #[test]
    fn results_are_replaced_not_appended() {
        let mut c = SearchController::new();
        let req = c.submit_query("x");
        c.complete(req.seq, Ok(make_page(30, 10)));
        let req = c.select_page(2);
        c.complete(req.seq, Ok(make_page(30, 3)));
        assert_eq!(c.results().len(), 3);
    }
}
