use crate::event::AppEvent;
use crate::search::state::{FetchRequest, Phase, SearchController};
use crate::stats::StatsView;
use crate::ui::{
    help_panel::HelpPanel,
    input::{self, Action, InputMode},
    input_bar::InputBar,
    pagination_bar::{self, PaginationBar},
    results_view::{results_lines, ResultsView},
    stats_panel::StatsPanel,
    status_bar::StatusBar,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

const INPUTS_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const MIN_BODY_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Results,
    Pagination,
    Stats,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Results => Focus::Pagination,
            Focus::Pagination => Focus::Stats,
            Focus::Stats => Focus::Results,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Results => Focus::Stats,
            Focus::Pagination => Focus::Results,
            Focus::Stats => Focus::Pagination,
        }
    }
}

/// Work the event loop has to run off the UI path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Search(FetchRequest),
    Stats { owner: String, repo: String },
}

pub struct App {
    pub search: SearchController,
    pub stats: StatsView,

    pub mode: InputMode,
    pub query_input: String,
    pub owner_input: String,
    pub repo_input: String,
    saved_inputs: (String, String),

    pub focus: Focus,
    pub page_cursor: usize,
    pub results_scroll: u16,
    pub show_help: bool,

    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            search: SearchController::new(),
            stats: StatsView::default(),
            mode: InputMode::Normal,
            query_input: String::new(),
            owner_input: String::new(),
            repo_input: String::new(),
            saved_inputs: (String::new(), String::new()),
            focus: Focus::Results,
            page_cursor: 0,
            results_scroll: 0,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn submit_query(&mut self, text: &str) -> Request {
        self.query_input = text.to_string();
        Request::Search(self.search.submit_query(text))
    }

    pub fn lookup_stats(&mut self, owner: &str, repo: &str) -> Request {
        self.owner_input = owner.to_string();
        self.repo_input = repo.to_string();
        Request::Stats {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Option<Request> {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.mode);
                self.handle_action(action)
            }
            AppEvent::Resize => None,
            AppEvent::SearchLoaded { seq, result } => {
                self.search.complete(seq, result);
                if self.search.phase() == Phase::Success {
                    self.results_scroll = 0;
                }
                self.page_cursor = self
                    .search
                    .pagination()
                    .iter()
                    .position(|c| c.active)
                    .unwrap_or(0);
                None
            }
            AppEvent::StatsLoaded {
                owner,
                repo,
                result,
            } => {
                self.stats = StatsView::from_outcome(&owner, &repo, result);
                None
            }
        }
    }

    pub fn handle_action(&mut self, action: Action) -> Option<Request> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::EditQuery => {
                self.saved_inputs.0 = self.query_input.clone();
                self.mode = InputMode::Query;
            }
            Action::EditStats => {
                self.saved_inputs = (self.owner_input.clone(), self.repo_input.clone());
                self.mode = InputMode::Owner;
            }
            Action::InputChar(c) => {
                if let Some(field) = self.active_input() {
                    field.push(c);
                }
            }
            Action::InputBackspace => {
                if let Some(field) = self.active_input() {
                    field.pop();
                }
            }
            Action::InputSwitch => {
                self.mode = match self.mode {
                    InputMode::Owner => InputMode::Repo,
                    InputMode::Repo => InputMode::Owner,
                    other => other,
                };
            }
            Action::InputConfirm => {
                let mode = self.mode;
                self.mode = InputMode::Normal;
                return match mode {
                    InputMode::Query => {
                        let text = self.query_input.clone();
                        Some(self.submit_query(&text))
                    }
                    InputMode::Owner | InputMode::Repo => {
                        let (owner, repo) = (self.owner_input.clone(), self.repo_input.clone());
                        Some(self.lookup_stats(&owner, &repo))
                    }
                    InputMode::Normal => None,
                };
            }
            Action::InputCancel => {
                match self.mode {
                    InputMode::Query => self.query_input = self.saved_inputs.0.clone(),
                    InputMode::Owner | InputMode::Repo => {
                        self.owner_input = self.saved_inputs.0.clone();
                        self.repo_input = self.saved_inputs.1.clone();
                    }
                    InputMode::Normal => {}
                }
                self.mode = InputMode::Normal;
            }
            Action::NextFocus => self.focus = self.focus.next(),
            Action::PrevFocus => self.focus = self.focus.prev(),
            Action::CursorLeft => {
                if self.focus == Focus::Pagination {
                    self.page_cursor = self.page_cursor.saturating_sub(1);
                }
            }
            Action::CursorRight => {
                if self.focus == Focus::Pagination
                    && self.page_cursor + 1 < self.search.pagination().len()
                {
                    self.page_cursor += 1;
                }
            }
            Action::ScrollDown => {
                if self.focus == Focus::Results {
                    let max = results_lines(self.search.results()).len().saturating_sub(1);
                    if (self.results_scroll as usize) < max {
                        self.results_scroll += 1;
                    }
                }
            }
            Action::ScrollUp => {
                if self.focus == Focus::Results {
                    self.results_scroll = self.results_scroll.saturating_sub(1);
                }
            }
            Action::Select => {
                if self.focus == Focus::Pagination {
                    let page = self.search.pagination().get(self.page_cursor)?.page;
                    return Some(Request::Search(self.search.select_page(page)));
                }
            }
            Action::Help => self.show_help = !self.show_help,
            Action::ClosePopup => self.show_help = false,
            Action::None => {}
        }
        None
    }

    fn active_input(&mut self) -> Option<&mut String> {
        match self.mode {
            InputMode::Query => Some(&mut self.query_input),
            InputMode::Owner => Some(&mut self.owner_input),
            InputMode::Repo => Some(&mut self.repo_input),
            InputMode::Normal => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let controls = self.search.pagination();
        let spare = size
            .height
            .saturating_sub(INPUTS_HEIGHT + STATUS_HEIGHT + MIN_BODY_HEIGHT);
        let pagination_h = pagination_bar::bar_height(controls, size.width, spare);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUTS_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(pagination_h),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(size);

        let inputs = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
            ])
            .split(rows[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Min(30)])
            .split(rows[1]);

        frame.render_widget(
            InputBar {
                label: "Search",
                text: &self.query_input,
                placeholder: "press / to search repositories",
                editing: self.mode == InputMode::Query,
            },
            inputs[0],
        );
        frame.render_widget(
            InputBar {
                label: "Owner",
                text: &self.owner_input,
                placeholder: "press o",
                editing: self.mode == InputMode::Owner,
            },
            inputs[1],
        );
        frame.render_widget(
            InputBar {
                label: "Repo",
                text: &self.repo_input,
                placeholder: "",
                editing: self.mode == InputMode::Repo,
            },
            inputs[2],
        );

        frame.render_widget(
            ResultsView {
                summaries: self.search.results(),
                scroll: self.results_scroll,
                focused: self.focus == Focus::Results,
                loading: self.search.in_flight() > 0,
            },
            body[0],
        );
        frame.render_widget(
            StatsPanel {
                view: &self.stats,
                focused: self.focus == Focus::Stats,
            },
            body[1],
        );

        frame.render_widget(
            PaginationBar {
                controls,
                cursor: self.page_cursor,
                focused: self.focus == Focus::Pagination,
            },
            rows[2],
        );

        let state = self.search.state();
        frame.render_widget(
            StatusBar {
                error: self.search.error(),
                mode: self.mode,
                page: state.current_page,
                total_pages: state.total_pages,
                in_flight: self.search.in_flight(),
            },
            rows[3],
        );

        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }
    }
}
