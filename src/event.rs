use crate::error::Result;
use crate::search::fetcher::FetchedPage;
use crate::stats::RepoStats;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    SearchLoaded {
        seq: u64,
        result: Result<FetchedPage>,
    },
    StatsLoaded {
        owner: String,
        repo: String,
        result: Result<RepoStats>,
    },
}
