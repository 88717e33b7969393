//! Character selector: the rotating persona ring and its detail overlay.
//!
//! Owns the selection state machine and the spring that animates the ring.
//! Every transition retargets the spring from the new `index`; the spring
//! never feeds back into selection.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use tracing::instrument;

use crate::config::AnimationConfig;
use crate::core::carousel::{ring_poses, target_rotation, CardPose, Spring};
use crate::core::persona::{Persona, Roster};
use crate::core::selector::{SelectError, SelectionState, Selector, Transition};
use crate::tui::layout::{card_rect, hit_card, ModalLayout, SelectorLayout};
use crate::tui::theme;
use crate::tui::views::persona_modal;

pub const TITLE: &str = "PICK YOUR PLAYER";
pub const PREV_ARROW: &str = "‹";
pub const NEXT_ARROW: &str = "›";

/// Map a key press to a selector transition.
///
/// While the overlay is open only dismiss keys map; the ring does not move
/// underneath it.
pub fn map_key(key: &KeyEvent, state: SelectionState, count: usize) -> Option<Transition> {
    if key.kind != KeyEventKind::Press || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    if state.modal_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('c') => {
                Some(Transition::Dismiss)
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Transition::Retreat),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Transition::Advance),
        // Click-to-view on the focused card
        KeyCode::Enter | KeyCode::Char(' ') => {
            (state.index < count).then_some(Transition::Select(state.index))
        }
        KeyCode::Char(c @ '1'..='9') => {
            let position = c.to_digit(10)? as usize - 1;
            (position < count).then_some(Transition::Select(position))
        }
        _ => None,
    }
}

/// Selector view state.
pub struct CharacterSelectorView {
    roster: Roster,
    selector: Selector,
    spring: Spring,
    animate: bool,
    mouse_enabled: bool,
}

impl CharacterSelectorView {
    pub fn new(roster: Roster, animation: &AnimationConfig, mouse_enabled: bool) -> Self {
        let selector = Selector::new(roster.len());
        let spring = animation
            .spring()
            .at_rest(target_rotation(selector.index(), roster.len()));

        Self {
            roster,
            selector,
            spring,
            animate: animation.enabled,
            mouse_enabled,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selection(&self) -> SelectionState {
        self.selector.state()
    }

    /// The persona at the current index.
    pub fn focused(&self) -> Option<&'static Persona> {
        self.roster.get(self.selector.index())
    }

    /// Current (animated) ring rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.spring.position
    }

    pub fn is_animating(&self) -> bool {
        !self.spring.is_settled()
    }

    /// Apply a transition and retarget the ring.
    #[instrument(level = "debug", skip(self))]
    pub fn apply(&mut self, transition: Transition) -> Result<SelectionState, SelectError> {
        let state = match transition {
            Transition::Dismiss => self.selector.dismiss(),
            Transition::Advance => self.selector.advance()?,
            Transition::Retreat => self.selector.retreat()?,
            Transition::Select(index) => self.selector.select(index)?,
        };
        tracing::debug!(
            index = state.index,
            modal_open = state.modal_open,
            persona = self.roster.get(state.index).map(|p| p.name),
            "selection changed"
        );

        self.spring
            .retarget(target_rotation(state.index, self.roster.len()));
        if !self.animate {
            self.spring.snap();
        }
        Ok(state)
    }

    /// Advance the ring animation by `dt` seconds.
    pub fn on_tick(&mut self, dt: f64) {
        self.spring.step(dt);
    }

    /// Handle input events. Returns `true` if the event was consumed.
    ///
    /// `area` is the region the view was last rendered into; mouse presses
    /// are resolved against it.
    pub fn handle_input(&mut self, event: &Event, area: Rect) -> bool {
        let transition = match event {
            Event::Key(key) => {
                let transition = map_key(key, self.selector.state(), self.roster.len());
                // The overlay swallows stray keys so nothing behind it reacts.
                if transition.is_none() {
                    return self.selector.modal_open()
                        && key.kind == KeyEventKind::Press
                        && !key.modifiers.contains(KeyModifiers::CONTROL);
                }
                transition
            }
            Event::Mouse(mouse) if self.mouse_enabled => self.map_mouse(mouse, area),
            _ => None,
        };

        let Some(transition) = transition else {
            return false;
        };

        if let Err(e) = self.apply(transition) {
            log::warn!("Ignored {transition:?}: {e}");
        }
        true
    }

    /// Resolve a left press to the arrow, card or close control under it.
    fn map_mouse(&self, mouse: &MouseEvent, area: Rect) -> Option<Transition> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let point = ratatui::layout::Position::new(mouse.column, mouse.row);

        if self.selector.modal_open() {
            let modal = ModalLayout::compute(area);
            return modal
                .close
                .contains(point)
                .then_some(Transition::Dismiss);
        }

        let layout = SelectorLayout::compute(area);
        if layout.prev.contains(point) {
            return Some(Transition::Retreat);
        }
        if layout.next.contains(point) {
            return Some(Transition::Advance);
        }

        let poses = ring_poses(self.rotation(), self.roster.len());
        hit_card(layout.ring, &poses, mouse.column, mouse.row).map(Transition::Select)
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::default().style(Style::default().bg(theme::BG_BASE)), area);

        let layout = SelectorLayout::compute(area);

        frame.render_widget(
            Paragraph::new(Span::styled(TITLE, theme::title())).alignment(Alignment::Center),
            layout.title,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(PREV_ARROW, theme::title())).alignment(Alignment::Center),
            layout.prev,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(NEXT_ARROW, theme::title())).alignment(Alignment::Center),
            layout.next,
        );

        // Back to front, so nearer cards paint over farther ones.
        for pose in ring_poses(self.rotation(), self.roster.len()) {
            if let Some(rect) = card_rect(layout.ring, &pose) {
                self.render_card(frame, rect, &pose);
            }
        }

        if self.selector.modal_open() {
            if let Some(persona) = self.focused() {
                persona_modal::render(frame, area, persona);
            }
        }
    }

    fn render_card(&self, frame: &mut Frame, rect: Rect, pose: &CardPose) {
        let Some(persona) = self.roster.get(pose.index) else {
            return;
        };
        let focused = pose.index == self.selector.index();
        let style = theme::card(pose.depth, focused);

        frame.render_widget(Clear, rect);
        let block = theme::card_block(style).style(Style::default().bg(theme::BG_BASE));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let [portrait, name] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let monogram_row = Rect {
            y: portrait.y + portrait.height.saturating_sub(1) / 2,
            height: 1.min(portrait.height),
            ..portrait
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                persona.monogram(),
                style.add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            monogram_row,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(persona.name, style)))
                .alignment(Alignment::Center),
            name,
        );
    }
}
