use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use tw_palette_config::AppConfig;
use tw_playground_sync::{FileSnapshotStore, MemorySnapshotStore, SyncService};

mod actions;
mod capabilities;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod logger;
mod menu;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use middleware::{
    command_palette_middleware::CommandPaletteMiddleware,
    font_dialog_middleware::FontDialogMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging_middleware::LoggingMiddleware, navigation_middleware::NavigationMiddleware,
    playground_middleware::PlaygroundMiddleware, text_input_middleware::TextInputMiddleware,
    Middleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init().context("failed to initialize logging")?;

    log::info!("Starting tw-palette, logging to {:?}", log_file);

    let app_config = AppConfig::load();
    let menu = menu::playground_menu(&app_config).context("invalid command menu")?;
    let playground = playground_middleware(&app_config);

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(app_config, menu));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(NavigationMiddleware::new()));
    store.add_middleware(Box::new(TextInputMiddleware::new()));
    store.add_middleware(Box::new(CommandPaletteMiddleware::new()));
    store.add_middleware(Box::new(FontDialogMiddleware::new()));
    store.add_middleware(playground);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Event loop failed: {}", err);
    }

    log::info!("Exiting tw-palette");
    result.map_err(Into::into)
}

/// Snapshots go to the configured directory; without one they only live in memory
fn playground_middleware(app_config: &AppConfig) -> Box<dyn Middleware> {
    let store = app_config
        .snapshot_path()
        .and_then(|dir| FileSnapshotStore::open(dir).map_err(anyhow::Error::from));

    match store {
        Ok(store) => Box::new(PlaygroundMiddleware::new(SyncService::new(store))),
        Err(e) => {
            log::warn!("Snapshot directory unavailable, keeping snapshots in memory: {:#}", e);
            Box::new(PlaygroundMiddleware::new(SyncService::new(
                MemorySnapshotStore::new(),
            )))
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
