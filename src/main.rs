mod app;
mod config;
mod export;
mod flashcards;
mod logging;
mod pomodoro;
mod reminder;
mod storage;
mod study;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use crate::config::Permission;
use crate::pomodoro::Ticker;
use crate::storage::FileStore;
use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        tracing::debug!(path = %path.display(), "logging to file");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg).await;

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!("fatal: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut store = FileStore::new(cfg.storage.data_dir.clone());
    let today = Local::now().date_naive();
    let data = storage::load_data(&mut store, cfg.storage.seed_sample_data, today);

    let reminder_period = cfg.notifications.reminder_period();
    let mut state = AppState::new(cfg, data);

    if state.config.notifications.permission == Permission::Default {
        state.ask(
            "Allow StudyHub to show deadline and timer notifications?",
            PendingOp::NotificationPermission,
        );
    }
    handler::run_reminders(&mut state, today);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    let mut pomodoro_ticker = Ticker::new(Duration::from_secs(1), |generation| {
        AppEvent::PomodoroTick { generation }
    });
    let mut reminder_ticker =
        Ticker::new(reminder_period, |generation| AppEvent::ReminderSweep { generation });
    reminder_ticker.start(event_tx.clone());

    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        // Events queued by a cancelled ticker
        match event {
            AppEvent::PomodoroTick { generation } if !pomodoro_ticker.is_current(generation) => {
                continue
            }
            AppEvent::ReminderSweep { generation } if !reminder_ticker.is_current(generation) => {
                continue
            }
            _ => {}
        }

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::Persist => {
                    storage::save_data(&mut store, state.data());
                }
                Action::StartPomodoro => pomodoro_ticker.start(event_tx.clone()),
                Action::StopPomodoro => pomodoro_ticker.cancel(),
                Action::Export { kinds } => run_export(&mut state, &kinds),
                Action::LoadImport { path } => match export::read_backup(&path) {
                    Ok(data) => handler::request_import(&mut state, data),
                    Err(e) => {
                        tracing::warn!("import failed: {:#}", e);
                        state.set_error(format!("Import failed: {:#}", e));
                    }
                },
                Action::SaveConfig => {
                    if let Err(e) = config::save_config(&state.config) {
                        tracing::warn!("saving config failed: {:#}", e);
                        state.set_error(format!("Could not save settings: {:#}", e));
                    }
                }
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Bell
        if state.pending_bell {
            let _ = io::stdout().write_all(b"\x07");
            let _ = io::stdout().flush();
            state.pending_bell = false;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    pomodoro_ticker.cancel();
    reminder_ticker.cancel();
    tracing::info!(dir = %store.dir().display(), "studyhub exiting");
    Ok(())
}

fn run_export(state: &mut AppState, kinds: &[export::ExportKind]) {
    let now = Local::now();
    let dir = state.config.export.dir.clone();
    let mut written = Vec::new();
    for &kind in kinds {
        match export::write_export(kind, state.data(), &dir, &now) {
            Ok(path) => written.push(path),
            Err(e) => {
                tracing::warn!("export failed: {:#}", e);
                state.set_error(format!("Export failed: {:#}", e));
                return;
            }
        }
    }
    let names: Vec<String> = written
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    state.set_status(format!("Exported {} to {}", names.join(", "), dir.display()));
}
