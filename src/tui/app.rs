use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent};
use super::layout::{centered_rect, AppLayout};
use super::router::Router;
use super::theme;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Routed views.
    pub router: Router,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Terminal area as of the last draw or resize.
    viewport: Rect,
    /// Tick interval; each tick advances animations by this much.
    tick_rate: Duration,
    /// Receiver for internally pushed events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sender handed out to background tasks.
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppState {
    pub fn new(router: Router, tick_rate: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            router,
            show_help: false,
            viewport: Rect::default(),
            tick_rate,
            event_rx,
            event_tx,
        }
    }

    /// Handle for pushing events into the loop from other tasks.
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_tx.clone()
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(self.tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            let size = terminal.size()?;
            self.viewport = Rect::new(0, 0, size.width, size.height);

            // Render
            terminal.draw(|frame| self.render(frame))?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        log::info!("Event loop finished");
        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Resize(width, height)) => {
                self.viewport = Rect::new(0, 0, width, height);
            }
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Routed view
                let main = AppLayout::compute(self.viewport).main;
                if self.router.handle_input(&crossterm_event, main) {
                    return;
                }

                // Priority 3: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.router.on_tick(self.tick_rate.as_secs_f64()),
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    /// Map help modal input to action.
    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (_, KeyCode::Esc | KeyCode::Char('?')) => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            // Ctrl+C → quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('q')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                Some(Action::ShowHelp)
            }
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::Selector(transition) => {
                if let Err(e) = self.router.selector_mut().apply(transition) {
                    log::warn!("Ignored {transition:?}: {e}");
                }
            }
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);

        self.router.render(frame, layout.main);
        self.render_status_bar(frame, layout.status);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let selector = self.router.selector();
        let selection = selector.selection();
        let name = selector.focused().map(|p| p.name).unwrap_or_default();

        let status = Line::from(vec![
            Span::styled(" PERSONA SELECT ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(
                self.router.route().label(),
                Style::default()
                    .fg(theme::HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled(
                format!("{}/{}", selection.index + 1, selector.roster().len()),
                theme::muted(),
            ),
            Span::raw(" "),
            Span::raw(name),
            Span::raw(" │ "),
            Span::styled("←/→", theme::key_hint()),
            Span::raw(":turn "),
            Span::styled("Enter", theme::key_hint()),
            Span::raw(":view "),
            Span::styled("Esc", theme::key_hint()),
            Span::raw(":close "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 70, area);

        let keybindings = [
            ("Carousel:", ""),
            ("← / h / a", "Previous persona"),
            ("→ / l / d", "Next persona"),
            ("Enter / Space", "View focused persona"),
            ("1-9", "View persona by position"),
            ("Click card", "View that persona"),
            ("Click ‹ / ›", "Previous / next persona"),
            ("", ""),
            ("Details:", ""),
            ("Esc / Enter / c", "Close"),
            ("Click [ Close ]", "Close"),
            ("", ""),
            ("Global:", ""),
            ("?", "Toggle this help"),
            ("q", "Quit application"),
            ("Ctrl+C", "Force quit"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                " Keybindings",
                Style::default()
                    .fg(theme::HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {key}"),
                    Style::default()
                        .fg(theme::HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<18}", key),
                        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ]));
            }
        }

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::HIGHLIGHT))
            .style(Style::default().bg(theme::BG_SURFACE));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationConfig;
    use crate::core::persona::Roster;
    use crate::core::selector::Transition;
    use crate::tui::views::selector::CharacterSelectorView;

    fn app() -> AppState {
        let view = CharacterSelectorView::new(
            Roster::builtin().unwrap(),
            &AnimationConfig::default(),
            true,
        );
        let mut app = AppState::new(Router::new(view), Duration::from_millis(16));
        app.set_viewport(Rect::new(0, 0, 100, 30));
        app
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> AppEvent {
        AppEvent::Input(Event::Key(KeyEvent::new(code, modifiers)))
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.running);
    }

    #[test]
    fn test_q_ignored_while_details_open() {
        let mut app = app();
        app.handle_event(press(KeyCode::Enter, KeyModifiers::NONE));
        assert!(app.router.selector().selection().modal_open);
        app.handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.running);
    }

    #[test]
    fn test_ctrl_c_quits_from_details() {
        let mut app = app();
        app.handle_event(press(KeyCode::Enter, KeyModifiers::NONE));
        app.handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_help_swallows_navigation() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(app.show_help);
        app.handle_event(press(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(app.router.selector().selection().index, 0);
        app.handle_event(press(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.show_help);
    }

    #[test]
    fn test_selector_action() {
        let mut app = app();
        app.handle_event(AppEvent::Action(Transition::Select(3).into()));
        let state = app.router.selector().selection();
        assert_eq!(state.index, 3);
        assert!(state.modal_open);
    }

    #[test]
    fn test_out_of_range_action_ignored() {
        let mut app = app();
        app.handle_event(AppEvent::Action(Transition::Select(7).into()));
        assert_eq!(app.router.selector().selection().index, 0);
        assert!(app.running);
    }

    #[test]
    fn test_tick_advances_animation() {
        let mut app = app();
        app.handle_event(press(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(app.router.selector().rotation(), 0.0);
        app.handle_event(AppEvent::Tick);
        assert!(app.router.selector().rotation() < 0.0);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = app();
        app.handle_event(AppEvent::Input(Event::Resize(120, 40)));
        assert_eq!(app.viewport(), Rect::new(0, 0, 120, 40));
    }

    #[test]
    fn test_quit_event() {
        let mut app = app();
        app.sender().send(AppEvent::Quit).unwrap();
        let event = app.event_rx.try_recv().unwrap();
        app.handle_event(event);
        assert!(!app.running);
    }
}
