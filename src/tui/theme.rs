//! Slate & Crimson color theme for the selector.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Near-black slate, the stage behind the ring.
pub const BG_BASE: Color = Color::Rgb(0x11, 0x18, 0x27);
/// Raised slate for the detail overlay.
pub const BG_SURFACE: Color = Color::Rgb(0x1F, 0x29, 0x37);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xF9, 0xFA, 0xFB);
/// Section labels and glyphs.
pub const TEXT_MUTED: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
/// Cards turned away from the viewer, hints.
pub const TEXT_DIM: Color = Color::Rgb(0x4B, 0x55, 0x63);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Crimson: close control.
pub const ACCENT: Color = Color::Rgb(0xDC, 0x26, 0x26);
/// Gold: front-facing card.
pub const HIGHLIGHT: Color = Color::Rgb(0xFB, 0xBF, 0x24);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Screen title.
pub fn title() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

/// Uppercase section label in the detail overlay.
pub fn label() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Muted glyphs and secondary text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Close button face.
pub fn button() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Card style by depth: front card bright, side cards fading out.
pub fn card(depth: f64, focused: bool) -> Style {
    if focused {
        Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else if depth > 0.5 {
        Style::default().fg(TEXT)
    } else if depth > 0.0 {
        Style::default().fg(TEXT_MUTED)
    } else {
        Style::default().fg(TEXT_DIM)
    }
}

// ── Block builders ──────────────────────────────────────────────────────────

/// Rounded block for a persona card.
pub fn card_block(style: Style) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style)
}
