use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use persona_select::config::AppConfig;
use persona_select::core::{logging, persona::Roster};
use persona_select::tui::{
    app::AppState, events::AppEvent, router::Router, views::selector::CharacterSelectorView,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let _log_guard = logging::init_tui(&AppConfig::log_dir());
    log::info!("{} v{} starting", persona_select::NAME, persona_select::VERSION);

    let config = AppConfig::load();
    let roster = Roster::builtin().context("built-in persona roster is invalid")?;
    let view = CharacterSelectorView::new(roster, &config.animation, config.tui.mouse_enabled);
    let router = Router::open("/", view).context("no view mounted at /")?;
    let mut app = AppState::new(router, Duration::from_millis(config.tui.tick_rate_ms));

    // SIGINT from outside the terminal (raw mode delivers Ctrl+C as a key)
    let quit_tx = app.sender();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = quit_tx.send(AppEvent::Quit);
        }
    });

    // Setup terminal
    let mut terminal = match setup_terminal(config.tui.mouse_enabled) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal(config.tui.mouse_enabled);
            return Err(e);
        }
    };

    // Run the app
    let result = app.run(&mut terminal).await;

    // Restore terminal
    restore_terminal(config.tui.mouse_enabled);
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Event loop failed: {e}");
    }
    result.context("event loop failed")?;

    log::info!("Shutdown complete");
    Ok(())
}

fn setup_terminal(mouse_enabled: bool) -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture).context("failed to enable mouse capture")?;
    }
    Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")
}

/// Best-effort: leave raw mode and the alternate screen.
fn restore_terminal(mouse_enabled: bool) {
    if let Err(e) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {e}");
    }
    let mut stdout = io::stdout();
    if mouse_enabled {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
        log::warn!("Failed to leave alternate screen: {e}");
    }
}
