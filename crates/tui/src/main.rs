//! Optiklab - interactive optics labs in the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Tutorial navigation logic (see `navigator`).
//! - Lab content and drawing (see `labs`).
//! - Preference persistence internals (see `optiklab_config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - Logs go to files only; stdout belongs to the terminal UI.
//! - Preference precedence: CLI args > persisted state > defaults.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use optiklab_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use optiklab_config::{ColorTheme, ConfigManager, PersistedState};
use optiklab_tui::action::Action;
use optiklab_tui::app::App;
use optiklab_tui::cli::Cli;
use optiklab_tui::labs::LabRegistry;
use optiklab_tui::runtime::terminal::TerminalGuard;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    // File-based logging; the guard must live for the whole of main()
    // so buffered logs are flushed on exit.
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "optiklab.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Load persisted preferences; CLI flags win over the stored value.
    let config_manager = ConfigManager::new()?;
    let persisted = if cli.fresh {
        tracing::info!("--fresh flag set, starting with default state");
        PersistedState::default()
    } else {
        config_manager.load()
    };
    let color_theme = match cli.theme.as_deref() {
        Some(name) => ColorTheme::from_cli_name(name).unwrap_or(persisted.theme),
        None => persisted.theme,
    };

    let mut registry = LabRegistry::standard();
    registry.init_all();
    registry.broadcast_dark_mode(color_theme.is_dark());

    // Resolve --lab before the registry moves into the app.
    let start_lab = match cli.lab.as_deref() {
        Some(id) => match registry.index_of(id) {
            Some(index) => Some(index),
            None => {
                let known: Vec<&str> = registry.descriptors().iter().map(|d| d.id).collect();
                anyhow::bail!("unknown lab {id:?}; known labs: {}", known.join(", "));
            }
        },
        None => None,
    };

    let mut app = App::new(registry, color_theme);
    if let Some(index) = start_lab {
        app.update(Action::StartLab(index));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Guard restores the terminal on panic or early return.
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Seed lab geometry with the initial terminal size.
    let size = terminal.size()?;
    app.update(Action::Resize(size.width, size.height));

    // Bounded channel for actions; capacity absorbs input bursts
    // without growing unbounded.
    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Input stream task: key presses and resizes only.
    let tx_input = tx.clone();
    tokio::spawn(async move {
        use crossterm::event::{Event, EventStream, KeyEventKind};

        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let action = match event_result {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    Some(Action::Input(key))
                }
                Ok(Event::Resize(width, height)) => Some(Action::Resize(width, height)),
                Ok(_) => None,
                Err(_) => break,
            };
            if let Some(action) = action {
                // User intent must not be dropped; block until there is room.
                if tx_input.send(action).await.is_err() {
                    break;
                }
            }
        }
    });

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(?action, "handling action");

                if matches!(action, Action::Quit) {
                    save_preferences(&config_manager, &app);
                    break;
                }
                if matches!(action, Action::PersistState) {
                    save_preferences(&config_manager, &app);
                    continue;
                }

                if let Some(follow_up) = app.update(action) {
                    if tx.send(follow_up).await.is_err() {
                        break;
                    }
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Explicit cleanup on the normal path; the guard covers panics.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn save_preferences(config_manager: &ConfigManager, app: &App) {
    let state = PersistedState {
        theme: app.color_theme,
    };
    if let Err(e) = config_manager.save(&state) {
        tracing::error!(error = %e, "Failed to save preferences");
    }
}
