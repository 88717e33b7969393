//! Layout computation: root frame, selector stage, ring cards and the detail
//! overlay. Rendering and mouse hit-testing both go through these functions
//! so what is drawn is exactly what is clickable.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::carousel::{CardPose, BACKFACE_THRESHOLD};

/// Widest a card gets when facing front.
pub const CARD_MAX_WIDTH: u16 = 26;
/// Tallest a card gets when facing front.
pub const CARD_MAX_HEIGHT: u16 = 11;
/// Narrowest a visible card gets.
pub const CARD_MIN_WIDTH: u16 = 5;
/// Width of the ‹ / › navigation arrows.
pub const ARROW_WIDTH: u16 = 3;
/// Width of the portrait column in the detail overlay.
pub const PORTRAIT_WIDTH: u16 = 22;

pub const CLOSE_LABEL: &str = "[ Close ]";

/// Root regions for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Routed view area.
    pub main: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Min(1),    // Routed view
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        AppLayout {
            main: rows[0],
            status: rows[1],
        }
    }
}

/// Regions of the character selector stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorLayout {
    pub title: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub ring: Rect,
}

impl SelectorLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(1), // Top padding
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Stage
            Constraint::Length(1), // Bottom padding
        ])
        .split(area);

        let stage = rows[3];
        let cols = Layout::horizontal([
            Constraint::Length(ARROW_WIDTH),
            Constraint::Min(1),
            Constraint::Length(ARROW_WIDTH),
        ])
        .split(stage);

        let arrow_y = stage.y + stage.height.saturating_sub(1) / 2;
        let arrow = |col: Rect| Rect::new(col.x, arrow_y, col.width, 1.min(stage.height));

        SelectorLayout {
            title: rows[1],
            prev: arrow(cols[0]),
            next: arrow(cols[2]),
            ring: cols[1],
        }
    }
}

/// Screen rectangle for a card, or `None` when it faces away.
pub fn card_rect(ring: Rect, pose: &CardPose) -> Option<Rect> {
    if !pose.is_visible() || ring.width == 0 || ring.height == 0 {
        return None;
    }

    // 0.0 at the backface threshold, 1.0 facing front.
    let facing = ((pose.depth - BACKFACE_THRESHOLD) / (1.0 - BACKFACE_THRESHOLD)).clamp(0.0, 1.0);

    let max_width = CARD_MAX_WIDTH.min(ring.width);
    let max_height = CARD_MAX_HEIGHT.min(ring.height);
    let min_width = CARD_MIN_WIDTH.min(max_width);

    let width = (f64::from(max_width) * (0.2 + 0.8 * facing)).round() as u16;
    let width = width.clamp(min_width, max_width);
    let height = (f64::from(max_height) * (0.6 + 0.4 * facing)).round() as u16;
    let height = height.clamp(1, max_height);

    let radius = f64::from(ring.width.saturating_sub(max_width)) / 2.0 + f64::from(max_width) / 4.0;
    let center_x = f64::from(ring.x) + f64::from(ring.width) / 2.0 + pose.lateral * radius;
    let left = (center_x - f64::from(width) / 2.0).round().max(f64::from(ring.x)) as u16;
    let x = left.min(ring.right().saturating_sub(width));
    let y = ring.y + (ring.height - height) / 2;

    Some(Rect::new(x, y, width, height))
}

/// Persona under `(column, row)`; front-most card wins. `poses` are back to front.
pub fn hit_card(ring: Rect, poses: &[CardPose], column: u16, row: u16) -> Option<usize> {
    let point = Position::new(column, row);
    poses
        .iter()
        .rev()
        .find(|pose| card_rect(ring, pose).is_some_and(|rect| rect.contains(point)))
        .map(|pose| pose.index)
}

/// Regions of the persona detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    /// Whole overlay, including its border.
    pub frame: Rect,
    pub portrait: Rect,
    pub details: Rect,
    pub close: Rect,
}

impl ModalLayout {
    pub fn compute(area: Rect) -> Self {
        let frame = centered_rect(80, 85, area);
        let inner = Rect::new(
            frame.x.saturating_add(2).min(frame.right()),
            frame.y.saturating_add(1).min(frame.bottom()),
            frame.width.saturating_sub(4),
            frame.height.saturating_sub(2),
        );

        let rows = Layout::vertical([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Close control
        ])
        .split(inner);

        let portrait_width = if inner.width >= PORTRAIT_WIDTH * 2 {
            PORTRAIT_WIDTH
        } else {
            0
        };
        let gap: u16 = if portrait_width > 0 { 2 } else { 0 };
        let cols = Layout::horizontal([
            Constraint::Length(portrait_width),
            Constraint::Min(1),
        ])
        .spacing(gap)
        .split(rows[0]);

        let close_width = (CLOSE_LABEL.len() as u16).min(rows[1].width);
        let close = Rect::new(
            rows[1].x + (rows[1].width - close_width) / 2,
            rows[1].y,
            close_width,
            rows[1].height,
        );

        ModalLayout {
            frame,
            portrait: cols[0],
            details: cols[1],
            close,
        }
    }
}

/// Calculate a centered rect using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
