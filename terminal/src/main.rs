use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use url::Url;

use terminal::api::ApiClient;
use terminal::app::{App, AppCommand, AppEvent};
use terminal::share::{self, ShareData};
use terminal::{stream, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they don't fight the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let match_url = std::env::args()
        .nth(1)
        .context("usage: tictactoe-terminal <match-url>")?;
    let match_url = Url::parse(&match_url).context("match url is not a valid URL")?;

    let api = Arc::new(ApiClient::new(match_url.clone()));
    let (tx, rx) = mpsc::channel(32);
    tokio::spawn(stream::run(api.events_url()?, tx.clone()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(ShareData::for_match(&match_url));
    let res = run_app(&mut terminal, &mut app, api, tx, rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api: Arc<ApiClient>,
    tx: mpsc::Sender<AppEvent>,
    mut rx: mpsc::Receiver<AppEvent>,
) -> Result<()> {
    let mut input = EventStream::new();
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            maybe_input = input.next() => match maybe_input {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    match app.handle_input(key) {
                        Some(AppCommand::Quit) => return Ok(()),
                        Some(AppCommand::SubmitMove(index)) => submit_move(&api, app, index),
                        Some(AppCommand::RequestRematch) => request_rematch(&api, app, tx.clone()),
                        Some(AppCommand::CopyInvite) => copy_invite(app),
                        None => {}
                    }
                }
                Some(Ok(_)) => {} // resize etc, redrawn next pass
                Some(Err(err)) => return Err(err.into()),
                None => return Ok(()),
            },
            maybe_event = rx.recv() => match maybe_event {
                Some(AppEvent::Stream(event)) => app.apply_stream_event(event),
                Some(AppEvent::RematchAccepted) => app.session.clear_overlay(),
                None => return Ok(()),
            },
        }
    }
}

/// Fire-and-forget: the board only ever changes from a later stream update,
/// so the response status is just logged.
fn submit_move(api: &Arc<ApiClient>, app: &App, index: usize) {
    let Some(credentials) = app.session.credentials() else {
        tracing::warn!(index, "no session credentials yet, move not sent");
        return;
    };
    let credentials = credentials.to_owned();
    let api = Arc::clone(api);
    tokio::spawn(async move {
        match api.submit_move(index, &credentials).await {
            Ok(status) => tracing::info!(%status, index, "move request acknowledged"),
            Err(err) => tracing::warn!(%err, index, "move request failed"),
        }
    });
}

fn request_rematch(api: &Arc<ApiClient>, app: &App, tx: mpsc::Sender<AppEvent>) {
    let Some(credentials) = app.session.credentials() else {
        tracing::warn!("no session credentials yet, rematch not sent");
        return;
    };
    let credentials = credentials.to_owned();
    let api = Arc::clone(api);
    tokio::spawn(async move {
        match api.request_rematch(&credentials).await {
            Ok(status) if status.is_success() => {
                let _ = tx.send(AppEvent::RematchAccepted).await;
            }
            Ok(status) => tracing::warn!(%status, "rematch rejected"),
            Err(err) => tracing::warn!(%err, "rematch request failed"),
        }
    });
}

fn copy_invite(app: &App) {
    match share::copy_to_clipboard(&mut io::stdout(), &app.share.url) {
        Ok(()) => tracing::info!("invite link copied to clipboard"),
        Err(err) => tracing::warn!(%err, "clipboard copy failed"),
    }
}
