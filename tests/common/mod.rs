//! Shared fixtures for the integration tests.

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use persona_select::config::AnimationConfig;
use persona_select::core::persona::Roster;
use persona_select::tui::{
    app::AppState, events::AppEvent, router::Router, views::selector::CharacterSelectorView,
};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

pub const WIDTH: u16 = 120;
pub const HEIGHT: u16 = 40;

/// App over the built-in roster with animation off, sized to the test screen.
pub fn app() -> AppState {
    let animation = AnimationConfig {
        enabled: false,
        ..AnimationConfig::default()
    };
    let roster = Roster::builtin().expect("built-in roster");
    let view = CharacterSelectorView::new(roster, &animation, true);
    let mut app = AppState::new(Router::open("/", view).unwrap(), Duration::from_millis(16));
    app.set_viewport(Rect::new(0, 0, WIDTH, HEIGHT));
    app
}

pub fn press(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

pub fn click(column: u16, row: u16) -> AppEvent {
    AppEvent::Input(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

/// Render the app and return the screen as one string per row.
pub fn screen(app: &AppState) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
    terminal.draw(|frame| app.render(frame)).expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

/// Row of the first screen line containing `needle`.
pub fn row_of(screen: &[String], needle: &str) -> Option<usize> {
    screen.iter().position(|row| row.contains(needle))
}
