//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! core never blocks on the network: the fetch runs as a tokio task and
//! reports back over an mpsc channel of Actions that the loop drains
//! between frames.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events. While the search
//!   box has a pending edit the poll shortens to 50ms so the debounce
//!   timer fires close to the configured quiet period.
//!
//! ## Fault boundary
//!
//! `run` wraps each session in `catch_unwind`: a panic anywhere in the
//! render/event path restores the terminal, reports the fault, and offers
//! a full reload — a fresh `App` and a fresh fetch, never an in-place
//! repair of core state.

mod component;
mod components;
mod event;
mod ui;

use std::io::{Write, stdout};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info, warn};

use crate::api::{DirectoryProvider, HttpDirectoryProvider};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, FetchStatus, ROWS_PER_PAGE_CHOICES};
use crate::tui::component::EventHandler;
use crate::tui::components::{CardGridState, SearchBox, SearchEvent, TableViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which presentation of the page slice is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Card,
}

impl ViewMode {
    pub fn toggle(self) -> ViewMode {
        match self {
            ViewMode::Table => ViewMode::Card,
            ViewMode::Card => ViewMode::Table,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Card => "card",
        }
    }
}

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands (paging, facet cycling, view toggle).
    Browse,
    /// Keys edit the search box. Enter/Esc return to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    pub search: SearchBox,
    pub table: TableViewState,
    pub cards: CardGridState,
    /// When the loading indicator was turned on; it stays visible for at
    /// least `min_loading` even if the fetch resolves sooner.
    pub loading_shown_at: Option<Instant>,
    min_loading: Duration,
    search_debounce: Duration,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            view_mode: ViewMode::Table,
            input_mode: InputMode::Browse,
            search: SearchBox::new(),
            table: TableViewState::new(),
            cards: CardGridState::new(),
            loading_shown_at: None,
            min_loading: Duration::from_millis(config.min_loading_ms),
            search_debounce: Duration::from_millis(config.search_debounce_ms),
        }
    }

    /// Whether the loading indicator should show this frame: the fetch is
    /// in flight, or the minimum-visibility window has not elapsed yet.
    pub fn loading_visible(&mut self, app: &App) -> bool {
        if app.status == FetchStatus::Loading {
            return true;
        }
        match self.loading_shown_at {
            Some(shown) if shown.elapsed() < self.min_loading => true,
            Some(_) => {
                self.loading_shown_at = None;
                false
            }
            None => false,
        }
    }

    fn clamp_cursor(&mut self, app: &App) {
        self.table.clamp(app.page_slice().len());
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the directory provider for the configured endpoint.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn DirectoryProvider> {
    Arc::new(HttpDirectoryProvider::new(Some(config.base_url.clone())))
}

/// Supervisory entry point. Runs sessions until one exits normally; a
/// panicked session tears down the terminal, reports the fault, and offers
/// a full reload with all in-memory state discarded.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    loop {
        let outcome =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| run_session(&config)));
        match outcome {
            Ok(result) => return result,
            Err(panic) => {
                ratatui::restore();
                let message = panic_message(panic.as_ref());
                warn!("Session panicked: {}", message);
                eprintln!("firmdex hit an unexpected fault: {message}");
                eprint!("Press Enter to reload (all state is discarded), or q + Enter to quit: ");
                let _ = std::io::stderr().flush();
                let mut line = String::new();
                if std::io::stdin().read_line(&mut line).is_err()
                    || line.trim().eq_ignore_ascii_case("q")
                {
                    return Ok(());
                }
                info!("Reloading after fault");
            }
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn run_session(config: &ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(config);
    let mut app = App::from_config(provider, config);
    let mut tui = TuiState::new(config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from the background fetch task
    let (tx, rx) = mpsc::channel();

    // Abort handle for the in-flight fetch (superseded by manual reloads)
    let mut active_fetch: Option<tokio::task::AbortHandle> = None;

    // Initial load
    if update(&mut app, Action::Reload) == Effect::SpawnFetch {
        tui.loading_shown_at = Some(Instant::now());
        active_fetch = Some(spawn_fetch(&app, tx.clone()));
    }

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        let animating = tui.loading_visible(&app);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Commit settled search input to the core
        if let Some(text) = tui.search.take_debounced(tui.search_debounce) {
            debug!("Committing debounced search: {:?}", text);
            update(&mut app, Action::SetSearch(text));
            tui.clamp_cursor(&app);
            needs_redraw = true;
        }

        // Dynamic poll timeout: short while animating or while a search edit
        // is settling, long when idle
        let timeout = if tui.search.has_pending_edit() {
            Duration::from_millis(50)
        } else if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            match tui.input_mode {
                InputMode::Search => {
                    if let Some(search_event) = tui.search.handle_event(&event) {
                        match search_event {
                            SearchEvent::Changed => {}
                            SearchEvent::Committed(text) => {
                                update(&mut app, Action::SetSearch(text));
                                tui.clamp_cursor(&app);
                                tui.input_mode = InputMode::Browse;
                            }
                            SearchEvent::Dismissed => {
                                tui.input_mode = InputMode::Browse;
                            }
                        }
                    }
                }
                InputMode::Browse => {
                    handle_browse_event(
                        &event,
                        &mut app,
                        &mut tui,
                        &mut active_fetch,
                        &tx,
                        &mut should_quit,
                    );
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::SpawnFetch => {
                    active_fetch = Some(spawn_fetch(&app, tx.clone()));
                }
                Effect::None => {}
            }
            tui.clamp_cursor(&app);
        }

        if should_quit {
            break;
        }
    }

    // Teardown: a result arriving after this point must not touch freed
    // state — abort the task and let any straggling send fail harmlessly.
    if let Some(handle) = active_fetch {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

fn handle_browse_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    active_fetch: &mut Option<tokio::task::AbortHandle>,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match event {
        TuiEvent::InputChar('q') | TuiEvent::Escape => {
            if update(app, Action::Quit) == Effect::Quit {
                *should_quit = true;
            }
        }
        TuiEvent::InputChar('/') => {
            tui.input_mode = InputMode::Search;
        }
        TuiEvent::InputChar('v') => {
            tui.view_mode = tui.view_mode.toggle();
        }
        TuiEvent::InputChar('s') => {
            update(app, Action::SetSort(app.filters.sort_by.next()));
        }
        TuiEvent::InputChar('l') => {
            if let Some(value) = cycle_facet(&app.locations, &app.filters.location) {
                update(app, Action::SetLocation(value));
            }
        }
        TuiEvent::InputChar('i') => {
            if let Some(value) = cycle_facet(&app.industries, &app.filters.industry) {
                update(app, Action::SetIndustry(value));
            }
        }
        TuiEvent::InputChar('x') => {
            tui.search.clear();
            update(app, Action::ResetFilters);
        }
        TuiEvent::InputChar('+') => {
            update(app, Action::SetRowsPerPage(next_rows_choice(app.rows_per_page)));
        }
        TuiEvent::InputChar('r') => {
            if update(app, Action::Reload) == Effect::SpawnFetch {
                // Last-request-wins: abort the superseded fetch; even if it
                // races to completion its stale seq is discarded by update()
                if let Some(handle) = active_fetch.take() {
                    handle.abort();
                }
                tui.loading_shown_at = Some(Instant::now());
                *active_fetch = Some(spawn_fetch(app, tx.clone()));
            }
        }
        TuiEvent::PageForward | TuiEvent::InputChar('n') => {
            if app.page + 1 < app.page_count() {
                update(app, Action::SetPage(app.page + 1));
            }
        }
        TuiEvent::PageBack | TuiEvent::InputChar('p') => {
            if app.page > 0 {
                update(app, Action::SetPage(app.page - 1));
            }
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            match tui.view_mode {
                ViewMode::Table => tui.table.handle_event(event, app.page_slice().len()),
                ViewMode::Card => tui.cards.handle_event(event),
            }
        }
        _ => {}
    }
    tui.clamp_cursor(app);
}

fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) -> tokio::task::AbortHandle {
    let provider = app.provider.clone();
    let seq = app.fetch_seq;
    info!(
        "Spawning directory fetch (seq {}, provider {})",
        seq,
        provider.name()
    );

    let handle = tokio::spawn(async move {
        let action = match provider.fetch_companies().await {
            Ok(companies) => Action::DataLoaded { seq, companies },
            Err(e) => {
                info!("Fetch failed (seq {}): {}", seq, e);
                Action::FetchFailed {
                    seq,
                    message: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!(
                "Failed to deliver fetch result (seq {}): receiver dropped",
                seq
            );
        }
    });

    handle.abort_handle()
}

/// Advances a facet selection to the next value, wrapping around. A current
/// value that is no longer in the list (stale after reload) restarts at the
/// "All" entry.
fn cycle_facet(values: &[String], current: &str) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let idx = values.iter().position(|v| v == current).unwrap_or(0);
    Some(values[(idx + 1) % values.len()].clone())
}

fn next_rows_choice(current: usize) -> usize {
    let idx = ROWS_PER_PAGE_CHOICES
        .iter()
        .position(|&r| r == current)
        .unwrap_or(0);
    ROWS_PER_PAGE_CHOICES[(idx + 1) % ROWS_PER_PAGE_CHOICES.len()]
}
