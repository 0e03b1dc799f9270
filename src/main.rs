//! Binary entry point: terminal lifecycle and the event loop.

use std::fs;
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, info};

use foyer::app::App;
use foyer::config::SiteConfig;
use foyer::store::FileStore;
use foyer::terminal::{setup_panic_hook, TerminalManager};
use foyer::ui;

/// Frame pacing for the tick branch of the select loop. The hover
/// preview's 300ms clear deadline rides on this tick.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version" || arg == "-V") {
        println!("foyer {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    color_eyre::install()?;

    let config = SiteConfig::from_env();
    let store = match &config.data_dir {
        Some(dir) => FileStore::open(dir.join("site_state.json")),
        None => FileStore::open_default().wrap_err("failed to locate the state directory")?,
    };
    init_logging(&store)?;

    if !std::io::stdout().is_terminal() {
        eprintln!("foyer needs an interactive terminal");
        std::process::exit(1);
    }

    setup_panic_hook();

    let mut app = App::new(config, Box::new(store));
    let mut terminal = TerminalManager::new().wrap_err("failed to enter TUI mode")?;

    let result = run_app(&mut terminal, &mut app).await;

    terminal.restore().wrap_err("failed to restore the terminal")?;
    result
}

/// Route log output to a file next to the state file; stdout belongs
/// to the TUI.
fn init_logging(store: &FileStore) -> Result<()> {
    let log_path = store
        .state_path()
        .with_file_name("foyer.log");
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    let log_file = fs::File::create(&log_path)
        .wrap_err_with(|| format!("failed to open {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("foyer=info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!(log = %log_path.display(), "logging initialized");
    Ok(())
}

/// The select loop: terminal events, plus a fixed tick that advances
/// time-based state. Redraws only happen when something marked the
/// state dirty.
async fn run_app(terminal: &mut TerminalManager, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal
                .terminal()
                .draw(|frame| ui::render(frame, app))
                .wrap_err("draw failed")?;
            app.needs_redraw = false;
        }

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => app.handle_key(&key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(&mouse),
                    Some(Ok(Event::Resize(width, height))) => {
                        debug!(width, height, "terminal resized");
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        return Err(e).wrap_err("terminal event stream failed");
                    }
                    None => break,
                }
            }
            _ = sleep(TICK_INTERVAL) => {
                app.tick();
            }
        }

        if app.should_quit {
            info!("exiting");
            break;
        }
    }

    Ok(())
}
