//! Persona detail overlay.
//!
//! Shown while the selector's modal flag is set. Content is built by
//! [`detail_lines`] so it can be checked without a terminal.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::core::persona::Persona;
use crate::tui::layout::{ModalLayout, CLOSE_LABEL};
use crate::tui::theme;

pub const CLOCK_GLYPH: &str = "◷";
pub const PROJECT_GLYPH: &str = "◆";
pub const TOOL_GLYPH: &str = "⚒";
pub const BULLET: &str = "•";

fn section_label(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, theme::label()))
}

fn glyph_line(glyph: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{glyph} "), theme::muted()),
        Span::raw(text),
    ])
}

/// Detail content for a persona, top to bottom.
///
/// The notable-project line is omitted entirely when the persona has none.
pub fn detail_lines(persona: &Persona) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            persona.name,
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::raw(""),
        section_label("ROLE"),
        Line::raw(persona.role),
        Line::raw(""),
        section_label("LANGUAGES"),
        Line::raw(persona.languages_line()),
        Line::raw(""),
        glyph_line(CLOCK_GLYPH, persona.experience),
        Line::raw(""),
        section_label("SPECIALIZATIONS"),
        Line::raw(persona.specializations_line()),
        Line::raw(""),
        section_label("KEY SKILLS"),
    ];

    lines.extend(
        persona
            .key_skills
            .iter()
            .map(|skill| Line::raw(format!("  {BULLET} {skill}"))),
    );
    lines.push(Line::raw(""));

    if let Some(project) = persona.notable_project() {
        lines.push(glyph_line(PROJECT_GLYPH, project));
    }
    lines.push(glyph_line(TOOL_GLYPH, persona.equipment));

    lines
}

/// Portrait stand-in: framed monogram plus the asset reference.
fn portrait_lines(persona: &Persona) -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::raw(""),
        Line::from(Span::styled(
            persona.monogram(),
            Style::default()
                .fg(theme::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(""),
        Line::from(Span::styled(persona.image, theme::dim())),
    ]
}

/// Render the overlay for `persona` on top of `area`.
pub fn render(frame: &mut Frame, area: Rect, persona: &Persona) {
    let layout = ModalLayout::compute(area);
    if layout.frame.width < 3 || layout.frame.height < 3 {
        return;
    }

    frame.render_widget(Clear, layout.frame);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::muted())
        .style(Style::default().bg(theme::BG_SURFACE).fg(theme::TEXT));
    frame.render_widget(block, layout.frame);

    if layout.portrait.width > 0 {
        let [frame_area] = Layout::vertical([Constraint::Length(10)])
            .flex(ratatui::layout::Flex::Center)
            .areas(layout.portrait);
        frame.render_widget(
            Paragraph::new(portrait_lines(persona))
                .alignment(Alignment::Center)
                .block(theme::card_block(theme::muted())),
            frame_area,
        );
    }

    frame.render_widget(
        Paragraph::new(detail_lines(persona)).wrap(Wrap { trim: false }),
        layout.details,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, theme::button())),
        layout.close,
    );
}
