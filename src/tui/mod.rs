//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Lifecycle
//!
//! 1. Mount: `Action::Fetch` is dispatched exactly once, before the first
//!    terminal event is read.
//! 2. Loop: draw, poll input, apply results coming back from fetch tasks.
//! 3. Quit: the terminal is restored. A fetch still in flight finishes in the
//!    background and its result is dropped.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::view::trigger_label;
use crate::facts::{FactSource, HttpFactSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{ButtonEvent, TriggerButton};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub trigger: TriggerButton,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            trigger: TriggerButton::new(),
        }
    }

    /// Push core state into component props.
    pub fn sync_props(&mut self, app: &App) {
        self.trigger.enabled = app.facts.trigger_enabled();
        self.trigger.label = trigger_label(&app.facts);
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn FactSource> = Arc::new(HttpFactSource::new(config.endpoint_url));
    let mut app = App::new(source);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Mount: the one automatic fetch
    dispatch(&mut app, Action::Fetch, &tx);

    let mut terminal = ratatui::init();
    let result = {
        let _terminal_mode_guard = TerminalModeGuard::new();
        event_loop(&mut terminal, &mut app, &mut tui, &tx, &rx)
    };
    ratatui::restore();

    if app.facts.loading {
        info!("Exiting with fetch #{} still in flight", app.fetch_count);
    }
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync_props(app);

        let animating = app.facts.loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short timeout while the spinner runs (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
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
            match event {
                TuiEvent::Quit => {
                    if dispatch(app, Action::Quit, tx) == Effect::Quit {
                        return Ok(());
                    }
                }
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                _ => {
                    if tui.trigger.handle_event(&event) == Some(ButtonEvent::Pressed) {
                        dispatch(app, Action::Fetch, tx);
                        // Disable before the next queued press is handled
                        tui.sync_props(app);
                    }
                }
            }
        }

        // Handle fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(app, action, tx);
        }
    }
}

/// Apply an action and perform the effect it asks for.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> Effect {
    let effect = update(app, action);
    if effect == Effect::SpawnFetch {
        spawn_fetch(app.source.clone(), tx.clone());
    }
    effect
}

fn spawn_fetch(source: Arc<dyn FactSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning fact fetch via {}", source.name());
    tokio::spawn(async move {
        let action = match source.fetch().await {
            Ok(fact) => Action::FactReceived(fact),
            Err(e) => Action::FetchFailed(e),
        };
        if tx.send(action).is_err() {
            warn!("Fetch finished after the view closed, result dropped");
        }
    });
}
