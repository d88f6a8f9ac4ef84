mod app;
mod config;
mod error;
mod event;
mod github;
mod logging;
mod search;
mod stats;
#[cfg(test)]
mod test_utils;
mod ui;

use app::{App, Request};
use clap::Parser;
use config::Config;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::ScoutError;
use event::AppEvent;
use futures::StreamExt;
use github::client::GitHubClient;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "reposcout", about = "Search GitHub repositories from the terminal")]
struct Cli {
    #[arg(long, short, help = "Run this search on startup")]
    query: Option<String>,

    #[arg(long, value_name = "OWNER/REPO", help = "Look up stats for a repository on startup")]
    stats: Option<String>,

    #[arg(long, help = "Path to config.toml")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the effective configuration and exit")]
    print_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config);

    if cli.print_config {
        print!("{}", config.to_toml());
        return Ok(());
    }

    logging::init(&config)?;
    let client = GitHubClient::new(&config.api_base)?;

    let mut app = App::new();
    let mut startup: Vec<Request> = Vec::new();
    if let Some(ref q) = cli.query {
        startup.push(app.submit_query(q));
    }
    if let Some(ref target) = cli.stats {
        let (owner, repo) = parse_target(target)?;
        startup.push(app.lookup_stats(owner, repo));
    }

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let input_tx = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    for request in startup {
        dispatch(request, &client, &config.date_format, &tx);
    }

    info!("ui started");
    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        if let Some(request) = app.handle_event(first) {
            dispatch(request, &client, &config.date_format, &tx);
        }
        while let Ok(pending) = rx.try_recv() {
            if let Some(request) = app.handle_event(pending) {
                dispatch(request, &client, &config.date_format, &tx);
            }
        }

        if app.should_quit {
            break;
        }
    }

    input_task.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("ui stopped");

    Ok(())
}

/// Spawn the HTTP work for a request. Nothing is cancelled or deduplicated;
/// each task posts its own completion.
fn dispatch(
    request: Request,
    client: &GitHubClient,
    date_format: &str,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    let client = client.clone();
    let tx = tx.clone();
    match request {
        Request::Search(req) => {
            let date_format = date_format.to_string();
            tokio::spawn(async move {
                let result = search::fetcher::fetch_repositories(
                    &client,
                    &req.query,
                    req.page,
                    &date_format,
                )
                .await;
                if tx.send(AppEvent::SearchLoaded { seq: req.seq, result }).is_err() {
                    debug!(seq = req.seq, "search finished after ui shut down");
                }
            });
        }
        Request::Stats { owner, repo } => {
            tokio::spawn(async move {
                let result = stats::get_repo_stats(&client, &owner, &repo).await;
                let _ = tx.send(AppEvent::StatsLoaded {
                    owner,
                    repo,
                    result,
                });
            });
        }
    }
}

fn parse_target(target: &str) -> error::Result<(&str, &str)> {
    target
        .split_once('/')
        .ok_or_else(|| ScoutError::Config(format!("expected OWNER/REPO, got {target:?}")))
}
